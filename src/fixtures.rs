//! Seed data for the dashboard. Everything here is fixed display content;
//! the timestamps are labels from the scripted conversation, not clock
//! readings.

use crate::workspace::{ChatMessage, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleBadge {
    Now,
    New,
}

impl ScheduleBadge {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleBadge::Now => "Now",
            ScheduleBadge::New => "New",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub title: &'static str,
    pub room: &'static str,
    pub time: &'static str,
    pub badge: Option<ScheduleBadge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    Quiz,
    Exam,
}

impl AssessmentKind {
    pub fn label(self) -> &'static str {
        match self {
            AssessmentKind::Quiz => "quiz",
            AssessmentKind::Exam => "exam",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assessment {
    pub title: &'static str,
    pub course: &'static str,
    pub due: &'static str,
    pub kind: AssessmentKind,
}

#[derive(Debug, Clone)]
pub struct PracticeProblem {
    pub course: &'static str,
    pub progress: &'static str,
    pub tag: &'static str,
    pub prompt: &'static str,
    pub hint: &'static str,
    pub solution_steps: &'static [&'static str],
}

pub const APP_NAME: &str = "Sunlyt";
pub const APP_TAGLINE: &str = "Your Personal Learning Assistant";
pub const ACTIVE_COURSE: &str = "Algebra II";

pub const STUDENT_REPLY_TIME: &str = "12:59 PM";
pub const TUTOR_ACK_TIME: &str = "1:00 PM";
pub const TUTOR_ACK: &str = "Great effort! Compare your steps with the guided solution on the left. Let me know if you'd like another problem.";

pub fn schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry {
            title: "Algebra II",
            room: "Room 204",
            time: "8:00 AM",
            badge: None,
        },
        ScheduleEntry {
            title: "English Literature",
            room: "Room 105",
            time: "9:30 AM",
            badge: None,
        },
        ScheduleEntry {
            title: "Chemistry",
            room: "Lab 3",
            time: "11:00 AM",
            badge: Some(ScheduleBadge::Now),
        },
        ScheduleEntry {
            title: "World History",
            room: "Room 301",
            time: "1:00 PM",
            badge: None,
        },
        ScheduleEntry {
            title: "Spanish II",
            room: "Room 210",
            time: "2:30 PM",
            badge: None,
        },
    ]
}

pub fn assessments() -> Vec<Assessment> {
    vec![Assessment {
        title: "Quadratic Equations",
        course: "Algebra II",
        due: "Tomorrow",
        kind: AssessmentKind::Quiz,
    }]
}

pub fn practice_problem() -> PracticeProblem {
    PracticeProblem {
        course: "Algebra II",
        progress: "Question 1 of 5",
        tag: "short answer",
        prompt: "Solve for x: 2x\u{b2} - 8x + 6 = 0",
        hint: "Think about factoring out any common terms first. What factor do all coefficients share?",
        solution_steps: &[
            "Factor out the common factor of 2: 2(x\u{b2} - 4x + 3) = 0",
            "Set each factor equal to zero: x\u{b2} - 4x + 3 = 0",
            "Factor the trinomial: (x - 3)(x - 1) = 0",
            "Solutions: x = 3 or x = 1",
        ],
    }
}

/// The scripted conversation every session opens with.
pub fn base_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            "1",
            Sender::Assistant,
            "Hi! I'm Sunlyt, your AI tutor. I can help you with homework, explain concepts, and prepare for tests. What would you like to work on today?",
            "12:55 PM",
        ),
        ChatMessage::new(
            "2",
            Sender::Student,
            "Can you help me understand quadratic equations?",
            "12:56 PM",
        ),
        ChatMessage::new(
            "3",
            Sender::Assistant,
            "Of course! A quadratic equation is written as ax\u{b2} + bx + c = 0. There are three main ways to solve them:\n\n1. Factoring\n2. Completing the square\n3. Quadratic formula\n\nWhich method would you like to explore first?",
            "12:57 PM",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn schedule_has_five_entries_with_one_active() {
        let entries = schedule();
        assert_eq!(entries.len(), 5);
        let active: Vec<_> = entries
            .iter()
            .filter(|e| e.badge == Some(ScheduleBadge::Now))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Chemistry");
    }

    #[test]
    fn single_upcoming_assessment_is_a_quiz() {
        let list = assessments();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, AssessmentKind::Quiz);
        assert_eq!(list[0].kind.label(), "quiz");
    }

    #[test]
    fn base_messages_have_unique_ids_in_order() {
        let messages = base_messages();
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn opening_message_contains_embedded_line_breaks() {
        let messages = base_messages();
        assert!(messages[2].text.contains('\n'));
    }

    #[test]
    fn solution_has_four_guided_steps() {
        let problem = practice_problem();
        assert_eq!(problem.solution_steps.len(), 4);
        assert!(problem.solution_steps[3].contains("x = 3 or x = 1"));
    }
}
