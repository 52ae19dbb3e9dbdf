use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod fixtures;
mod gui;
mod settings;
mod theme;
mod workspace;

use settings::{
    default_base_path, ensure_base_folders, load_or_init_settings, save_settings, Settings,
};
use workspace::{Sender, WorkspaceState};

#[derive(Parser, Debug)]
#[command(
    name = "sunlyt",
    version,
    about = "Sunlyt learning dashboard (offline, single screen)"
)]
struct CliArgs {
    /// Choose GUI (default) or CLI mode
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Override data base path (defaults to ./data next to the exe)
    #[arg(long)]
    base_path: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    if let Err(e) = ensure_base_folders(&base_path) {
        log::error!(
            "Failed to create base folders at {}: {}",
            base_path.display(),
            e
        );
        return;
    }

    let mut settings = match load_or_init_settings(&base_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to load settings: {e}");
            return;
        }
    };

    log::info!("Using data path: {}", base_path.display());

    settings.base_path = base_path.to_string_lossy().to_string();
    settings.mode = match args.mode {
        RunMode::Gui => "gui".to_string(),
        RunMode::Cli => "cli".to_string(),
    };

    match args.mode {
        RunMode::Gui => {
            if let Err(e) = gui::launch_gui(base_path.clone(), settings.clone()) {
                log::error!("Failed to start GUI: {e}");
            }
        }
        RunMode::Cli => {
            run_cli(&settings, &base_path);
        }
    }

    if let Err(e) = save_settings(&settings, &base_path) {
        log::warn!("Could not save settings: {e}");
    }
}

/// Drives the practice workspace from a line prompt, useful on machines
/// without a display. Same state transitions as the GUI buttons.
fn run_cli(settings: &Settings, base_path: &Path) {
    println!("Sunlyt CLI starting up");
    println!("Base path: {}", base_path.display());
    println!("Student: {}", settings.student.student_name);
    println!("Type 'help' for commands, 'exit' to quit.\n");

    let problem = fixtures::practice_problem();
    let mut workspace = WorkspaceState::new();

    loop {
        print!("sunlyt> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Exiting.");
            break;
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye");
            break;
        }

        if let Some(text) = input.strip_prefix("draft ") {
            workspace.update_draft(text);
            println!("Draft updated ({} chars).\n", workspace.draft.len());
            continue;
        }

        match input {
            "help" => {
                println!("  question   show the current practice question");
                println!("  hint       toggle the hint");
                println!("  draft <t>  replace the draft response");
                println!("  submit     submit the current draft");
                println!("  next       move on and reset the workspace");
                println!("  chat       print the assistant transcript");
                println!("  schedule   print today's classes");
                println!("  solution   print the guided solution");
                println!("  exit       quit\n");
            }
            "question" => {
                println!("{} [{}]", problem.progress, problem.tag);
                println!("{}\n", problem.prompt);
            }
            "hint" => {
                workspace.toggle_hint();
                if workspace.hint_visible {
                    println!("Hint: {}\n", problem.hint);
                } else {
                    println!("Hint hidden.\n");
                }
            }
            "submit" => {
                let blank = workspace.draft.trim().is_empty();
                workspace.submit_answer();
                if blank {
                    println!("Nothing to submit; the draft is blank.\n");
                } else {
                    println!("Answer submitted. Type 'chat' to see the tutor's reply.\n");
                }
            }
            "next" => {
                workspace.next_question();
                println!("Workspace reset for the next question.\n");
            }
            "chat" => {
                for message in workspace.transcript() {
                    let who = match message.from {
                        Sender::Assistant => "Sunlyt",
                        Sender::Student => "You",
                    };
                    println!("[{}] {}: {}", message.time, who, message.text);
                }
                println!();
            }
            "schedule" => {
                for entry in fixtures::schedule() {
                    let badge = entry.badge.map(|b| b.label()).unwrap_or("");
                    println!("{:>8}  {} ({}) {}", entry.time, entry.title, entry.room, badge);
                }
                println!();
            }
            "solution" => {
                println!("Step-by-Step Solution");
                for (idx, step) in problem.solution_steps.iter().enumerate() {
                    println!("  {}. {step}", idx + 1);
                }
                println!();
            }
            "" => {}
            _ => println!("Unknown command. Type 'help' for the list.\n"),
        }
    }
}
