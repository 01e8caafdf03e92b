//! Application layer for doq-coach
//!
//! This crate contains the practice session use case, the classifier and
//! responder strategies, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod strategies;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{ClassifierChoice, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ServiceParams, StrategyMode};
pub use ports::{
    classifier::UtteranceClassifier,
    event_log::{EventLog, NoEventLog, SessionEvent},
    progress::{NoProgress, PracticeProgress},
    responder::{ClientResponder, GenerationError},
    strategy_source::{FixedStrategies, PracticeStrategies, StrategySource},
    text_generation::{CompletionRequest, GatewayError, GenerationParams, TextGenerationService},
};
pub use strategies::{CannedResponder, HeuristicClassifier, RemoteResponder, RemoteScoringClassifier};
pub use use_cases::practice_session::{
    IgnoredReason, PracticeError, PracticeSessionUseCase, SessionSummary, SubmitOutcome,
    TurnFeedback,
};
