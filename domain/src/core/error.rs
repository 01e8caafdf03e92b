//! Domain error types

use crate::practice::session::SessionState;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session setting '{field}' is missing")]
    MissingSetting { field: &'static str },

    #[error("Session setting '{field}' has unrecognized value '{value}'")]
    UnrecognizedSetting { field: &'static str, value: String },

    #[error("Utterance cannot be empty")]
    EmptyUtterance,

    #[error("Cannot {operation} a session that is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: SessionState,
    },
}

impl DomainError {
    /// Check if this error came from session configuration validation
    pub fn is_config_invalid(&self) -> bool {
        matches!(
            self,
            DomainError::MissingSetting { .. } | DomainError::UnrecognizedSetting { .. }
        )
    }
}
