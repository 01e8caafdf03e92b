//! Strategy selection port
//!
//! The practice session asks a [`StrategySource`] for its classifier and
//! responder once, when a session starts. Which implementations come back
//! depends on configuration and on whether the text-generation service is
//! usable; the session itself never branches on it.

use super::classifier::UtteranceClassifier;
use super::responder::ClientResponder;
use doq_domain::ServiceStatus;
use std::sync::Arc;

/// The classifier/responder pair used for one session
#[derive(Clone)]
pub struct PracticeStrategies {
    pub classifier: Arc<dyn UtteranceClassifier>,
    pub responder: Arc<dyn ClientResponder>,
}

impl PracticeStrategies {
    pub fn new(
        classifier: Arc<dyn UtteranceClassifier>,
        responder: Arc<dyn ClientResponder>,
    ) -> Self {
        Self {
            classifier,
            responder,
        }
    }
}

impl std::fmt::Debug for PracticeStrategies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticeStrategies")
            .field("classifier", &self.classifier.name())
            .field("responder", &self.responder.name())
            .finish()
    }
}

/// Supplies strategies at session start
pub trait StrategySource: Send + Sync {
    /// Select strategies, or report why the configured service is unusable.
    fn select(&self) -> Result<PracticeStrategies, ServiceStatus>;
}

/// A source that always returns the same pair
pub struct FixedStrategies(pub PracticeStrategies);

impl StrategySource for FixedStrategies {
    fn select(&self) -> Result<PracticeStrategies, ServiceStatus> {
        Ok(self.0.clone())
    }
}
