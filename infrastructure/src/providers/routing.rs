use crate::config::FileConfig;
use crate::openai::OpenAiGateway;
use doq_application::{
    CannedResponder, ClassifierChoice, GatewayError, HeuristicClassifier, PracticeStrategies,
    RemoteResponder, RemoteScoringClassifier, ServiceParams, StrategyMode, StrategySource,
    TextGenerationService, UtteranceClassifier,
};
use doq_domain::ServiceStatus;
use std::sync::Arc;
use tracing::debug;

/// Picks the classifier/responder pair for a session.
///
/// | mode | service configured | service not configured |
/// |------|--------------------|------------------------|
/// | `offline` | canned + heuristic | canned + heuristic |
/// | `remote` | remote + remote | refused |
/// | `auto` | remote + remote | canned + heuristic |
///
/// The classifier override replaces only the classifier. Asking for the
/// remote classifier without a configured service is refused in every mode.
pub struct StrategyRouter {
    mode: StrategyMode,
    classifier: ClassifierChoice,
    status: ServiceStatus,
    service: Option<Arc<dyn TextGenerationService>>,
    params: ServiceParams,
}

impl StrategyRouter {
    pub fn new(
        mode: StrategyMode,
        classifier: ClassifierChoice,
        status: ServiceStatus,
        service: Option<Arc<dyn TextGenerationService>>,
        params: ServiceParams,
    ) -> Self {
        // A service without a usable credential is never routed to.
        let service = service.filter(|_| status.is_configured());
        Self {
            mode,
            classifier,
            status,
            service,
            params,
        }
    }

    /// Build a router from the merged configuration.
    ///
    /// Unusable values fall back to defaults; [`FileConfig::validate`]
    /// reports them.
    pub fn from_config(config: &FileConfig) -> Result<Self, GatewayError> {
        let (mode, _) = config.practice.parse_mode();
        let (classifier, _) = config.practice.parse_classifier();
        let (params, _) = config.service.params();

        let service = match OpenAiGateway::from_config(&config.service) {
            Some(gateway) => Some(Arc::new(gateway?) as Arc<dyn TextGenerationService>),
            None => None,
        };

        Ok(Self::new(
            mode,
            classifier,
            config.service.status(),
            service,
            params,
        ))
    }

    pub fn with_mode(mut self, mode: StrategyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierChoice) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn mode(&self) -> StrategyMode {
        self.mode
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    /// Why `auto` mode will run offline, when it will.
    ///
    /// `None` when the service is usable or the mode was chosen explicitly.
    pub fn offline_fallback_notice(&self) -> Option<&'static str> {
        match self.mode {
            StrategyMode::Auto if self.service.is_none() => Some(self.status.message()),
            _ => None,
        }
    }

    fn remote_service(&self) -> Result<Arc<dyn TextGenerationService>, ServiceStatus> {
        self.service.clone().ok_or(self.status)
    }

    fn classifier_for(
        &self,
        remote_default: bool,
    ) -> Result<Arc<dyn UtteranceClassifier>, ServiceStatus> {
        let remote = match self.classifier {
            ClassifierChoice::Auto => remote_default,
            ClassifierChoice::Heuristic => false,
            ClassifierChoice::Remote => true,
        };
        if remote {
            Ok(Arc::new(RemoteScoringClassifier::new(
                self.remote_service()?,
                &self.params,
            )))
        } else {
            Ok(Arc::new(HeuristicClassifier::new()))
        }
    }

    fn offline(&self) -> Result<PracticeStrategies, ServiceStatus> {
        Ok(PracticeStrategies::new(
            self.classifier_for(false)?,
            Arc::new(CannedResponder::new()),
        ))
    }

    fn remote(&self) -> Result<PracticeStrategies, ServiceStatus> {
        let service = self.remote_service()?;
        Ok(PracticeStrategies::new(
            self.classifier_for(true)?,
            Arc::new(RemoteResponder::new(service, self.params.clone())),
        ))
    }
}

impl StrategySource for StrategyRouter {
    fn select(&self) -> Result<PracticeStrategies, ServiceStatus> {
        let strategies = match self.mode {
            StrategyMode::Offline => self.offline(),
            StrategyMode::Remote => self.remote(),
            StrategyMode::Auto if self.service.is_some() => self.remote(),
            StrategyMode::Auto => self.offline(),
        }?;
        debug!("Selected strategies: {:?}", strategies);
        Ok(strategies)
    }
}
