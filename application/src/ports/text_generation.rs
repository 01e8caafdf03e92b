//! Text-generation port
//!
//! Defines the interface for requesting one completion from a
//! chat-style language model service.

use async_trait::async_trait;
use doq_domain::Message;
use thiserror::Error;

/// Errors that can occur while calling the text-generation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Service returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Service returned no usable text")]
    EmptyCompletion,

    #[error("Other error: {0}")]
    Other(String),
}

/// Generation parameters for one request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Model identifier understood by the service
    pub model: String,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl GenerationParams {
    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature: temperature.clamp(0.0, 1.0),
            max_tokens,
        }
    }
}

/// A role-tagged message list plus generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, params: GenerationParams) -> Self {
        Self { messages, params }
    }
}

/// Gateway to an opaque text-generation service
///
/// This port defines how the application layer obtains completions.
/// Implementations (adapters) live in the infrastructure layer. Calls are
/// never retried here.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Request a single completion and return its text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_is_clamped() {
        assert_eq!(GenerationParams::new("gpt-4", 1.7, 100).temperature, 1.0);
        assert_eq!(GenerationParams::new("gpt-4", -0.2, 100).temperature, 0.0);
        assert_eq!(GenerationParams::new("gpt-4", 0.7, 100).temperature, 0.7);
    }

    #[test]
    fn test_http_status_display() {
        let error = GatewayError::HttpStatus {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(error.to_string(), "Service returned status 429: rate limited");
    }
}
