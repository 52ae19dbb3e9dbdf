use crate::fixtures;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Assistant,
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub from: Sender,
    pub text: String,
    /// Display label only ("12:55 PM"); never derived from the clock.
    pub time: String,
}

impl ChatMessage {
    pub fn new(id: &str, from: Sender, text: &str, time: &str) -> Self {
        Self {
            id: id.to_string(),
            from,
            text: text.to_string(),
            time: time.to_string(),
        }
    }
}

/// All mutable state for one practice workspace. Created fresh when the
/// workspace opens and reset by `next_question`; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    pub hint_visible: bool,
    pub draft: String,
    pub submitted: Option<String>,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Blank or whitespace-only drafts are ignored without touching any
    /// state. A successful submit keeps the hint toggle as-is.
    pub fn submit_answer(&mut self) {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return;
        }
        self.submitted = Some(trimmed.to_string());
        self.draft.clear();
    }

    /// The only operation that clears a prior submission.
    pub fn next_question(&mut self) {
        *self = Self::new();
    }

    /// The transcript shown in the assistant panel: the fixed base
    /// conversation, plus a student echo and a canned tutor reply once a
    /// submission exists.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        let mut messages = fixtures::base_messages();
        if let Some(answer) = &self.submitted {
            messages.push(ChatMessage::new(
                "4",
                Sender::Student,
                answer,
                fixtures::STUDENT_REPLY_TIME,
            ));
            messages.push(ChatMessage::new(
                "5",
                Sender::Assistant,
                fixtures::TUTOR_ACK,
                fixtures::TUTOR_ACK_TIME,
            ));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_hint_hidden_and_nothing_submitted() {
        let state = WorkspaceState::new();
        assert!(!state.hint_visible);
        assert_eq!(state.draft, "");
        assert_eq!(state.submitted, None);
    }

    #[test]
    fn toggle_hint_twice_is_an_involution() {
        let mut state = WorkspaceState::new();
        state.toggle_hint();
        assert!(state.hint_visible);
        state.toggle_hint();
        assert!(!state.hint_visible);
    }

    #[test]
    fn update_draft_replaces_prior_text() {
        let mut state = WorkspaceState::new();
        state.update_draft("first try");
        state.update_draft("second try");
        assert_eq!(state.draft, "second try");
    }

    #[test]
    fn submit_trims_and_clears_the_draft() {
        let mut state = WorkspaceState::new();
        state.update_draft("  x = 3 or x = 1  ");
        state.submit_answer();
        assert_eq!(state.submitted.as_deref(), Some("x = 3 or x = 1"));
        assert_eq!(state.draft, "");
    }

    #[test]
    fn blank_submit_is_a_silent_no_op() {
        for blank in ["", "   ", "\n\t  \n"] {
            let mut state = WorkspaceState::new();
            state.toggle_hint();
            state.update_draft(blank);
            let before = state.clone();
            state.submit_answer();
            assert_eq!(state, before, "blank draft {blank:?} must change nothing");
        }
    }

    #[test]
    fn submit_does_not_reset_the_hint() {
        let mut state = WorkspaceState::new();
        state.toggle_hint();
        state.update_draft("2(x - 3)(x - 1) = 0");
        state.submit_answer();
        assert!(state.hint_visible);
    }

    #[test]
    fn resubmitting_replaces_the_previous_answer() {
        let mut state = WorkspaceState::new();
        state.update_draft("x = 4");
        state.submit_answer();
        state.update_draft("x = 3 or x = 1");
        state.submit_answer();
        assert_eq!(state.submitted.as_deref(), Some("x = 3 or x = 1"));
    }

    #[test]
    fn next_question_restores_the_initial_state() {
        let mut state = WorkspaceState::new();
        state.toggle_hint();
        state.update_draft("scratch work");
        state.submit_answer();
        state.update_draft("more typing");
        state.next_question();
        assert_eq!(state, WorkspaceState::new());
    }

    #[test]
    fn transcript_starts_with_the_three_base_messages() {
        let state = WorkspaceState::new();
        let transcript = state.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript, fixtures::base_messages());
    }

    #[test]
    fn transcript_appends_echo_and_canned_reply_after_submit() {
        let mut state = WorkspaceState::new();
        state.update_draft("x = 3 or x = 1");
        state.submit_answer();

        let transcript = state.transcript();
        assert_eq!(transcript.len(), 5);
        assert_eq!(&transcript[..3], &fixtures::base_messages()[..]);

        let echo = &transcript[3];
        assert_eq!(echo.id, "4");
        assert_eq!(echo.from, Sender::Student);
        assert_eq!(echo.text, "x = 3 or x = 1");
        assert_eq!(echo.time, fixtures::STUDENT_REPLY_TIME);

        let reply = &transcript[4];
        assert_eq!(reply.id, "5");
        assert_eq!(reply.from, Sender::Assistant);
        assert_eq!(reply.text, fixtures::TUTOR_ACK);
        assert_eq!(reply.time, fixtures::TUTOR_ACK_TIME);
    }

    #[test]
    fn full_practice_round_trip() {
        let mut state = WorkspaceState::new();

        state.toggle_hint();
        assert!(state.hint_visible);

        state.update_draft("x = 3 or x = 1");
        state.submit_answer();
        assert_eq!(state.draft, "");
        assert_eq!(state.submitted.as_deref(), Some("x = 3 or x = 1"));
        assert!(state.hint_visible, "submitting must not hide the hint");
        assert_eq!(state.transcript().len(), 5);

        state.next_question();
        assert_eq!(state, WorkspaceState::new());
        assert_eq!(state.transcript().len(), 3);
    }
}
