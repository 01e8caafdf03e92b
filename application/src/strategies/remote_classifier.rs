//! Classifier that asks the text-generation service to score a question

use crate::config::ServiceParams;
use crate::ports::classifier::UtteranceClassifier;
use crate::ports::text_generation::{CompletionRequest, GenerationParams, TextGenerationService};
use async_trait::async_trait;
use doq_domain::{
    Classification, CoachPromptTemplate, Message, Verdict, parse_rubric_score, truncate,
    verdict_for_score,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Rubric scoring runs cooler than role-play
pub const RUBRIC_TEMPERATURE: f32 = 0.3;

/// Token budget for the rubric reply
pub const RUBRIC_MAX_TOKENS: u32 = 200;

/// Rationale used when scoring is unavailable
pub const UNAVAILABLE_RATIONALE: &str = "Unable to analyze question due to API error.";

/// Remote rubric scoring with a conservative local fallback.
///
/// Service errors never surface as errors; they yield a below-line
/// classification with score 0. A reply without a number scores 5.
pub struct RemoteScoringClassifier {
    service: Arc<dyn TextGenerationService>,
    model: String,
}

impl RemoteScoringClassifier {
    pub fn new(service: Arc<dyn TextGenerationService>, params: &ServiceParams) -> Self {
        Self {
            service,
            model: params.model.clone(),
        }
    }

    fn request(&self, text: &str) -> CompletionRequest {
        CompletionRequest::new(
            vec![
                Message::system(CoachPromptTemplate::rubric_system()),
                Message::user(CoachPromptTemplate::rubric_request(text)),
            ],
            GenerationParams::new(&self.model, RUBRIC_TEMPERATURE, RUBRIC_MAX_TOKENS),
        )
    }

    fn unavailable() -> Classification {
        Classification::new(Verdict::BelowLine, UNAVAILABLE_RATIONALE).with_score(0)
    }
}

#[async_trait]
impl UtteranceClassifier for RemoteScoringClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Classification {
        let reply = match self.service.complete(self.request(text)).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Classification unavailable: {}", e);
                return Self::unavailable();
            }
        };

        let score = parse_rubric_score(&reply);
        debug!("Rubric score {} for '{}'", score, truncate(text, 60));
        Classification::new(verdict_for_score(score), reply.trim()).with_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generation::GatewayError;
    use crate::test_support::ScriptedService;
    use doq_domain::Role;

    fn classifier(service: Arc<ScriptedService>) -> RemoteScoringClassifier {
        RemoteScoringClassifier::new(service, &ServiceParams::default())
    }

    #[tokio::test]
    async fn test_high_score_is_above_line() {
        let service = Arc::new(ScriptedService::replies(["Score: 8/10. Nice exception question."]));
        let c = classifier(service.clone())
            .classify("When is the stress a little less?")
            .await;
        assert_eq!(c.verdict, Verdict::AboveLine);
        assert_eq!(c.score, Some(8));
        assert_eq!(c.rationale, "Score: 8/10. Nice exception question.");
    }

    #[tokio::test]
    async fn test_request_shape() {
        let service = Arc::new(ScriptedService::replies(["6"]));
        classifier(service.clone()).classify("What else?").await;

        let requests = service.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.params.temperature, RUBRIC_TEMPERATURE);
        assert_eq!(request.params.max_tokens, RUBRIC_MAX_TOKENS);
        assert_eq!(request.params.model, "gpt-4");
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(
            request.messages[1].content,
            "Analyze this coach question: \"What else?\""
        );
    }

    #[tokio::test]
    async fn test_threshold_boundary() {
        let service = Arc::new(ScriptedService::replies(["6/10", "5/10"]));
        let classifier = classifier(service);
        assert_eq!(classifier.classify("a").await.verdict, Verdict::AboveLine);
        assert_eq!(classifier.classify("b").await.verdict, Verdict::BelowLine);
    }

    #[tokio::test]
    async fn test_no_digits_scores_five() {
        let service = Arc::new(ScriptedService::replies(["Mostly problem focused."]));
        let c = classifier(service).classify("Why?").await;
        assert_eq!(c.verdict, Verdict::BelowLine);
        assert_eq!(c.score, Some(5));
    }

    #[tokio::test]
    async fn test_service_error_is_absorbed() {
        let service = Arc::new(ScriptedService::new(vec![Err(GatewayError::ConnectionError(
            "refused".to_string(),
        ))]));
        let c = classifier(service).classify("What is better?").await;
        assert_eq!(c.verdict, Verdict::BelowLine);
        assert_eq!(c.score, Some(0));
        assert_eq!(c.rationale, UNAVAILABLE_RATIONALE);
    }

    #[tokio::test]
    async fn test_blank_reply_scores_fallback() {
        let service = Arc::new(ScriptedService::replies(["   "]));
        let c = classifier(service).classify("What is better?").await;
        assert_eq!(c.verdict, Verdict::BelowLine);
        assert_eq!(c.score, Some(5));
        assert_ne!(c.rationale, UNAVAILABLE_RATIONALE);
    }

    #[tokio::test]
    async fn test_oversized_score_saturates() {
        let service = Arc::new(ScriptedService::replies(["Score 99999999999999999999999"]));
        let c = classifier(service).classify("What is better?").await;
        assert_eq!(c.verdict, Verdict::AboveLine);
        assert_eq!(c.score, Some(10));
    }
}
