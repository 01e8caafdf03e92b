//! Wire types for the chat completions endpoint

use doq_application::CompletionRequest;
use doq_domain::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.params.model,
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the service produced any
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Error body returned by OpenAI-compatible services
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use doq_application::GenerationParams;
    use doq_domain::Message;

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest::new(
            vec![Message::system("Be a client."), Message::user("Hi")],
            GenerationParams::new("gpt-4", 0.7, 100),
        );
        let body = serde_json::to_value(ChatCompletionRequest::from(&request)).unwrap();
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hi");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_first_choice() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Score: 8/10"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_content().as_deref(), Some("Score: 8/10"));
    }

    #[test]
    fn test_response_without_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_content().is_none());

        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_content().is_none());
    }

    #[test]
    fn test_error_body() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.message, "Incorrect API key provided");
    }
}
