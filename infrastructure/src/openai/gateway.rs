//! OpenAI-compatible text-generation gateway

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};
use crate::config::FileServiceConfig;
use async_trait::async_trait;
use doq_application::{CompletionRequest, GatewayError, TextGenerationService};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Gateway to an OpenAI-compatible chat completions endpoint.
///
/// Each call is a single request; nothing is retried.
pub struct OpenAiGateway {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiGateway {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        info!("OpenAiGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// Build a gateway from the `[service]` section.
    ///
    /// Returns `None` when no credential is configured.
    pub fn from_config(config: &FileServiceConfig) -> Option<Result<Self, GatewayError>> {
        let api_key = config.api_key.as_deref().filter(|_| config.status().is_configured())?;
        Some(Self::new(
            &config.base_url,
            api_key.trim(),
            Duration::from_secs(config.timeout_secs.max(1)),
        ))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerationService for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest::from(&request);
        debug!(
            "POST {} model={} messages={} max_tokens={}",
            self.endpoint,
            body.model,
            body.messages.len(),
            body.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response: {}", e)))?;

        completion
            .into_content()
            .ok_or(GatewayError::EmptyCompletion)
    }
}
