//! Practice session domain.
//!
//! - [`settings`] - themes, difficulty, feedback timing and session configuration
//! - [`turn`] - transcript turns and their classifications
//! - [`session::Session`] - the session aggregate and its lifecycle
//! - [`stats::SessionStats`] - statistics projected from the transcript

pub mod session;
pub mod settings;
pub mod stats;
pub mod turn;
