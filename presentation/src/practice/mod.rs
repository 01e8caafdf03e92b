//! Interactive practice console
//!
//! Provides a reedline-based console around the practice session.

mod command;
mod console;

pub use command::ConsoleCommand;
pub use console::{ConsoleError, PracticeConsole};
