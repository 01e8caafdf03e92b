//! Console output formatter for practice sessions

use colored::Colorize;
use doq_application::SessionSummary;
use doq_domain::{
    Classification, CoachPromptTemplate, DoqGuidelines, FeedbackTiming, SessionConfig,
    SessionStats, Speaker, Theme, Turn, single_line,
};

/// Formats practice session output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Session banner shown once a session has started
    pub fn banner(config: &SessionConfig) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("DOQ Coach - Practice Session"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Theme:".cyan().bold(),
            config.theme.label()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Difficulty:".cyan().bold(),
            config.difficulty
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Feedback:".cyan().bold(),
            match config.feedback_timing {
                FeedbackTiming::Immediate => "after each question",
                FeedbackTiming::Deferred => "when the session ends",
            }
        ));
        output.push_str(&format!(
            "\n{}\n",
            "Ask your client a question. Type /help for commands.".dimmed()
        ));
        output
    }

    /// One transcript line, labeled by speaker
    pub fn turn(turn: &Turn) -> String {
        match turn.speaker() {
            Speaker::SimulatedClient => {
                format!("{} {}", "Client:".yellow().bold(), single_line(turn.text()))
            }
            Speaker::Trainee => format!("{} {}", "You:".blue().bold(), single_line(turn.text())),
        }
    }

    /// Verdict line with optional score and the rationale
    pub fn feedback(classification: &Classification) -> String {
        let score = classification
            .score
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        let verdict = if classification.is_above_line() {
            format!("^ {}{}", classification.verdict.label(), score)
                .green()
                .bold()
        } else {
            format!("v {}{}", classification.verdict.label(), score)
                .red()
                .bold()
        };
        format!(
            "  {}\n{}",
            verdict,
            Self::indent(&classification.rationale, "    ")
        )
    }

    /// Full transcript, with feedback under classified trainee turns
    pub fn transcript(turns: &[Turn]) -> String {
        if turns.is_empty() {
            return format!("{}\n", "The transcript is empty.".dimmed());
        }

        let mut output = Self::section_header("Transcript");
        for turn in turns {
            output.push_str(&format!(
                "{} {}\n",
                turn.created_at().format("%H:%M:%S").to_string().dimmed(),
                Self::turn(turn)
            ));
            if let Some(classification) = turn.classification() {
                output.push_str(&Self::feedback(classification));
                output.push('\n');
            }
        }
        output
    }

    pub fn stats(stats: &SessionStats) -> String {
        let mut output = Self::section_header("Statistics");
        output.push_str(&format!(
            "  Questions classified: {}\n",
            stats.total_classified_turns
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Above Line:".green(),
            stats.above_line_count
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Below Line:".red(),
            stats.below_line_count
        ));
        output.push_str(&format!(
            "  {} {}%\n",
            "Above Line rate:".bold(),
            stats.above_line_percentage
        ));
        output
    }

    /// End-of-session report: per-question feedback then totals
    pub fn summary(summary: &SessionSummary) -> String {
        let mut output = Self::header("Session Complete");
        output.push('\n');

        if !summary.feedback.is_empty() {
            output.push_str(&Self::section_header("Feedback"));
            for (i, item) in summary.feedback.iter().enumerate() {
                output.push_str(&format!("\n{}. {}\n", i + 1, item.text.bold()));
                output.push_str(&Self::feedback(&item.classification));
                output.push('\n');
            }
        }

        output.push_str(&Self::stats(&summary.stats));
        output.push_str(&Self::footer());
        output
    }

    /// DOQ reference card
    pub fn guidelines() -> String {
        let mut output = Self::section_header("Dialogic Orientation Quadrant");
        output.push_str(&format!("{}\n", "Above the line (solution-focused):".green().bold()));
        for item in DoqGuidelines::above_line() {
            output.push_str(&format!("  * {}\n", item));
        }
        output.push_str(&format!("\n{}\n", "Below the line (problem-focused):".red().bold()));
        for item in DoqGuidelines::below_line() {
            output.push_str(&format!("  * {}\n", item));
        }
        output
    }

    /// Active configuration, strategies and the coaching brief
    pub fn settings(config: &SessionConfig, strategies: Option<(&str, &str)>) -> String {
        let mut output = Self::section_header("Settings");
        output.push_str(&format!(
            "  Theme: {} ({})\n",
            config.theme.label(),
            config.theme
        ));
        output.push_str(&format!("  Difficulty: {}\n", config.difficulty));
        output.push_str(&format!("  Feedback: {}\n", config.feedback_timing));
        if let Some((classifier, responder)) = strategies {
            output.push_str(&format!(
                "  Client: {}, Classifier: {}\n",
                responder, classifier
            ));
        }
        output.push_str(&format!("\n{}\n", "Coaching brief:".cyan().bold()));
        output.push_str(&Self::indent(&CoachPromptTemplate::session_setup(config), "  "));
        output.push('\n');
        output
    }

    pub fn themes() -> String {
        let mut output = String::from("Available themes:\n");
        for theme in Theme::ALL {
            output.push_str(&format!("  {:<12} {}\n", theme.as_str(), theme.label()));
        }
        output
    }

    /// Offline fallback notice shown once before the session starts
    pub fn offline_notice(reason: &str) -> String {
        format!(
            "{} {}\n{}",
            "Note:".yellow().bold(),
            reason,
            "Running offline: client lines come from a fixed set and feedback uses keyword scoring."
                .dimmed()
        )
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
