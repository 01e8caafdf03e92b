//! Utterance classifier port

use async_trait::async_trait;
use doq_domain::Classification;

/// Scores one piece of trainee text against a rubric.
///
/// Classification is advisory: implementations never fail. A strategy that
/// cannot reach its backend substitutes a conservative below-line result.
#[async_trait]
pub trait UtteranceClassifier: Send + Sync {
    /// Short name used in logs and the settings display
    fn name(&self) -> &'static str;

    async fn classify(&self, text: &str) -> Classification;
}
