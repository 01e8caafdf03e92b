//! Presentation layer for doq-coach
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive practice console.

pub mod cli;
pub mod config;
pub mod output;
pub mod practice;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{ClassifierArg, Cli, ModeArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use practice::{ConsoleCommand, ConsoleError, PracticeConsole};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
