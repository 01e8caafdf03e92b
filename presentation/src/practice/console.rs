//! Practice console: prompt loop around one practice session

use super::command::ConsoleCommand;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use doq_application::{
    IgnoredReason, PracticeError, PracticeSessionUseCase, SubmitOutcome,
};
use doq_domain::{Difficulty, FeedbackTiming, PracticeSettings, SessionState, Theme};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Errors that end the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Practice(#[from] PracticeError),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive console for one trainee
pub struct PracticeConsole {
    practice: Arc<PracticeSessionUseCase>,
    settings: PracticeSettings,
    history_file: Option<PathBuf>,
}

impl PracticeConsole {
    pub fn new(practice: Arc<PracticeSessionUseCase>, settings: PracticeSettings) -> Self {
        Self {
            practice,
            settings,
            history_file: None,
        }
    }

    /// Set the history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the console until the trainee quits.
    ///
    /// Missing session settings are asked for first. A session that cannot
    /// start is returned as an error.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        let mut editor = self.editor();

        if !self.complete_settings(&mut editor)? {
            println!("Bye!");
            return Ok(());
        }
        self.start().await?;

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("you".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Some(command) = ConsoleCommand::parse(line) {
                        if let Flow::Quit = self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }
                    self.submit(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Ask for each missing setting. Returns false if the trainee gave up.
    fn complete_settings(&mut self, editor: &mut Reedline) -> std::io::Result<bool> {
        if is_missing(&self.settings.theme) {
            print!("{}", ConsoleFormatter::themes());
            let choices = Theme::ALL.map(|t| t.as_str()).join(", ");
            match ask::<Theme>(editor, "theme", &choices)? {
                Some(theme) => self.settings.theme = Some(theme),
                None => return Ok(false),
            }
        }
        if is_missing(&self.settings.difficulty) {
            match ask::<Difficulty>(editor, "difficulty", "beginner, intermediate, advanced")? {
                Some(difficulty) => self.settings.difficulty = Some(difficulty),
                None => return Ok(false),
            }
        }
        if is_missing(&self.settings.feedback) {
            match ask::<FeedbackTiming>(editor, "feedback", "immediate, deferred")? {
                Some(feedback) => self.settings.feedback = Some(feedback),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    async fn start(&self) -> Result<(), PracticeError> {
        let opening = self.practice.start(self.settings.clone()).await?;
        if let Some(config) = self.practice.config() {
            println!("{}", ConsoleFormatter::banner(&config));
        }
        println!("{}\n", ConsoleFormatter::turn(&opening));
        Ok(())
    }

    async fn submit(&self, line: &str) {
        match self.practice.state() {
            SessionState::Active => {}
            SessionState::Ended => {
                println!("The session has ended. Type /reset to start a new one, or /quit.");
                return;
            }
            SessionState::NotStarted => {
                println!("No active session. Type /reset to start one.");
                return;
            }
        }

        match self.practice.submit_utterance(line).await {
            Ok(outcome) => {
                if let Some(text) = outcome_text(&outcome) {
                    println!("{}", text);
                }
            }
            Err(e @ PracticeError::GenerationFailed(_)) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                println!(
                    "{}",
                    "Your question was kept. You can ask again or rephrase it.".dimmed()
                );
            }
            Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
        }
    }

    async fn handle_command(&self, command: ConsoleCommand) -> Flow {
        match command {
            ConsoleCommand::Help => {
                println!("\n{}\n", ConsoleCommand::help());
            }
            ConsoleCommand::Stats => {
                println!("{}", ConsoleFormatter::stats(&self.practice.stats()));
            }
            ConsoleCommand::Transcript => {
                println!(
                    "{}",
                    ConsoleFormatter::transcript(&self.practice.transcript())
                );
            }
            ConsoleCommand::End => match self.practice.end().await {
                Ok(summary) => {
                    println!("{}", ConsoleFormatter::summary(&summary));
                    println!("Type /reset to start a new session, or /quit.");
                }
                Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ConsoleCommand::Reset => {
                self.practice.reset();
                println!("{}", "Starting a new session...".dimmed());
                if let Err(e) = self.start().await {
                    eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                }
            }
            ConsoleCommand::Guide => {
                println!("{}", ConsoleFormatter::guidelines());
            }
            ConsoleCommand::Settings => match self.practice.config() {
                Some(config) => println!(
                    "{}",
                    ConsoleFormatter::settings(&config, self.practice.strategy_names())
                ),
                None => println!("No active session."),
            },
            ConsoleCommand::Quit => {
                println!("Bye!");
                return Flow::Quit;
            }
            ConsoleCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Prompt until the answer parses as `T`. `None` when the trainee gives up.
fn ask<T: FromStr>(
    editor: &mut Reedline,
    field: &str,
    choices: &str,
) -> std::io::Result<Option<String>> {
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(field.to_string()),
        DefaultPromptSegment::Empty,
    );
    loop {
        println!("Choose a {} ({}):", field, choices);
        match editor.read_line(&prompt)? {
            Signal::Success(answer) => {
                let answer = answer.trim();
                if answer.parse::<T>().is_ok() {
                    return Ok(Some(answer.to_string()));
                }
                println!("'{}' is not one of: {}", answer, choices);
            }
            _ => return Ok(None),
        }
    }
}

/// What to print after a submission, if anything
fn outcome_text(outcome: &SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Replied { trainee, client } => {
            let mut text = String::new();
            if let Some(classification) = trainee.classification() {
                text.push_str(&ConsoleFormatter::feedback(classification));
                text.push('\n');
            }
            text.push('\n');
            text.push_str(&ConsoleFormatter::turn(client));
            text.push('\n');
            Some(text)
        }
        SubmitOutcome::Ignored(IgnoredReason::InFlight) => {
            Some("Still waiting for the client to answer...".to_string())
        }
        SubmitOutcome::Ignored(IgnoredReason::EmptyUtterance) => None,
    }
}
