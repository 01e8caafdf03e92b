//! Offline classifier backed by the keyword rubric

use crate::ports::classifier::UtteranceClassifier;
use async_trait::async_trait;
use doq_domain::{Classification, KeywordRubric};

/// Deterministic classifier: identical text always yields the same result.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    rubric: KeywordRubric,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rubric(rubric: KeywordRubric) -> Self {
        Self { rubric }
    }
}

#[async_trait]
impl UtteranceClassifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn classify(&self, text: &str) -> Classification {
        self.rubric.classify(text)
    }
}
