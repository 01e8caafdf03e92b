//! Client response generator port

use super::text_generation::GatewayError;
use async_trait::async_trait;
use doq_domain::{SessionConfig, Turn};
use thiserror::Error;

/// The simulated client could not produce a line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Client response generation failed: {0}")]
pub struct GenerationError(#[from] pub GatewayError);

/// Produces the simulated client's lines of dialogue
#[async_trait]
pub trait ClientResponder: Send + Sync {
    /// Short name used in logs and the settings display
    fn name(&self) -> &'static str;

    /// The first line of a session
    async fn generate_opening(&self, config: &SessionConfig) -> Result<String, GenerationError>;

    /// The next line, responsive to the whole transcript so far
    async fn generate_next(
        &self,
        config: &SessionConfig,
        transcript: &[Turn],
    ) -> Result<String, GenerationError>;
}
