//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and strategies
//! must implement.

pub mod classifier;
pub mod event_log;
pub mod progress;
pub mod responder;
pub mod strategy_source;
pub mod text_generation;
