//! Progress reporting for practice sessions

use colored::Colorize;
use doq_application::PracticeProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the client is thinking or questions are scored
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn show(&self, message: String) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PracticeProgress for ProgressReporter {
    fn on_client_thinking(&self) {
        self.show("Client is thinking...".dimmed().to_string());
    }

    fn on_classifying(&self, turns: usize) {
        let message = if turns == 1 {
            "Analyzing your question...".to_string()
        } else {
            format!("Analyzing {} questions...", turns)
        };
        self.show(message.dimmed().to_string());
    }

    fn on_idle(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl PracticeProgress for SimpleProgress {
    fn on_client_thinking(&self) {
        println!("{} {}", "->".cyan(), "Client is thinking...".dimmed());
    }

    fn on_classifying(&self, turns: usize) {
        println!(
            "{} {}",
            "->".cyan(),
            format!("Analyzing {} question(s)...", turns).dimmed()
        );
    }

    fn on_idle(&self) {}
}
