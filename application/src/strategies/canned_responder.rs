//! Offline responder backed by the canned client corpus

use crate::ports::responder::{ClientResponder, GenerationError};
use async_trait::async_trait;
use doq_domain::{SessionConfig, Turn, client_statement};

/// Deterministic responder: the line depends only on theme and difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder;

impl CannedResponder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClientResponder for CannedResponder {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn generate_opening(&self, config: &SessionConfig) -> Result<String, GenerationError> {
        Ok(client_statement(config.theme, config.difficulty).to_string())
    }

    async fn generate_next(
        &self,
        config: &SessionConfig,
        _transcript: &[Turn],
    ) -> Result<String, GenerationError> {
        Ok(client_statement(config.theme, config.difficulty).to_string())
    }
}
