//! Responder that role-plays the client through the text-generation service

use crate::config::ServiceParams;
use crate::ports::responder::{ClientResponder, GenerationError};
use crate::ports::text_generation::{
    CompletionRequest, GatewayError, GenerationParams, TextGenerationService,
};
use async_trait::async_trait;
use doq_domain::{CoachPromptTemplate, Message, SessionConfig, Turn};
use std::sync::Arc;
use tracing::debug;

/// Token budget for the opening line
pub const OPENING_MAX_TOKENS: u32 = 150;

/// Token budget for later replies
pub const REPLY_MAX_TOKENS: u32 = 100;

/// Remote role-play. Failures propagate: without a reply the conversation
/// cannot continue.
pub struct RemoteResponder {
    service: Arc<dyn TextGenerationService>,
    params: ServiceParams,
}

impl RemoteResponder {
    pub fn new(service: Arc<dyn TextGenerationService>, params: ServiceParams) -> Self {
        Self { service, params }
    }

    fn params(&self, max_tokens: u32) -> GenerationParams {
        GenerationParams::new(&self.params.model, self.params.temperature, max_tokens)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        debug!(
            "Requesting client line ({} messages, model {})",
            request.messages.len(),
            request.params.model
        );
        let reply = self.service.complete(request).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(GatewayError::EmptyCompletion.into());
        }
        Ok(reply.to_string())
    }
}

#[async_trait]
impl ClientResponder for RemoteResponder {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn generate_opening(&self, config: &SessionConfig) -> Result<String, GenerationError> {
        let request = CompletionRequest::new(
            vec![
                Message::system(CoachPromptTemplate::client_opening_system(config)),
                Message::user(CoachPromptTemplate::client_opening_request()),
            ],
            self.params(OPENING_MAX_TOKENS),
        );
        self.complete(request).await
    }

    async fn generate_next(
        &self,
        config: &SessionConfig,
        transcript: &[Turn],
    ) -> Result<String, GenerationError> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(Message::system(CoachPromptTemplate::client_reply_system(config)));
        messages.extend(transcript.iter().map(Message::from_turn));

        self.complete(CompletionRequest::new(messages, self.params(REPLY_MAX_TOKENS)))
            .await
    }
}
