//! CLI command definitions

use clap::{Parser, ValueEnum};
use doq_application::{ClassifierChoice, StrategyMode};
use doq_domain::PracticeSettings;
use std::path::PathBuf;

/// Where client lines and feedback come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Remote service when configured, offline otherwise
    Auto,
    /// Canned client lines and keyword feedback, no network
    Offline,
    /// Remote service only
    Remote,
}

impl From<ModeArg> for StrategyMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => StrategyMode::Auto,
            ModeArg::Offline => StrategyMode::Offline,
            ModeArg::Remote => StrategyMode::Remote,
        }
    }
}

/// Which classifier scores trainee questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    /// Follow the mode
    Auto,
    /// Keyword rubric
    Heuristic,
    /// Remote rubric scoring
    Remote,
}

impl From<ClassifierArg> for ClassifierChoice {
    fn from(classifier: ClassifierArg) -> Self {
        match classifier {
            ClassifierArg::Auto => ClassifierChoice::Auto,
            ClassifierArg::Heuristic => ClassifierChoice::Heuristic,
            ClassifierArg::Remote => ClassifierChoice::Remote,
        }
    }
}

/// CLI arguments for doq-coach
#[derive(Parser, Debug)]
#[command(name = "doq-coach")]
#[command(author, version, about = "Practice Solution-Focused coaching questions with a simulated client")]
#[command(long_about = r#"
DOQ Coach runs a role-play with a simulated client so you can practice
"staying above the line" of the Dialogic Orientation Quadrant.

Each question you ask is classified as Above Line (solution-focused) or
Below Line (problem-focused), either right away or when you end the session.

Configuration files are loaded from (in priority order):
1. OPENAI_* environment variables
2. --config <path>     Explicit config file
3. ./doq.toml          Project-level config
4. ~/.config/doq-coach/config.toml   Global config

Example:
  doq-coach --theme stress --difficulty beginner --feedback immediate
  doq-coach --mode offline --theme nutrition --feedback deferred
"#)]
pub struct Cli {
    /// Session theme (see --list-themes)
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Client difficulty: beginner, intermediate or advanced
    #[arg(short, long, value_name = "LEVEL")]
    pub difficulty: Option<String>,

    /// When to give feedback: immediate or deferred
    #[arg(short, long, value_name = "WHEN")]
    pub feedback: Option<String>,

    /// Strategy mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Classifier override
    #[arg(long, value_enum)]
    pub classifier: Option<ClassifierArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append transcript events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub events_file: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl Cli {
    /// Session settings from flags, falling back to `defaults` per field
    pub fn practice_settings(&self, defaults: PracticeSettings) -> PracticeSettings {
        PracticeSettings {
            theme: self.theme.clone().or(defaults.theme),
            difficulty: self.difficulty.clone().or(defaults.difficulty),
            feedback: self.feedback.clone().or(defaults.feedback),
        }
    }
}
