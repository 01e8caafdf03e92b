//! Text-generation service configuration from TOML (`[service]` section)

use super::{ConfigIssue, Severity};
use doq_application::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, ServiceParams};
use doq_domain::ServiceStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default OpenAI-compatible endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Raw service configuration from TOML
///
/// `api_key` is usually supplied through `OPENAI_API_KEY` rather than
/// written to a file.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keep the credential out of logs and `--show-config` output.
impl fmt::Debug for FileServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileServiceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FileServiceConfig {
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus::evaluate(self.api_key.as_deref())
    }

    /// Model and temperature, falling back to defaults for unusable values.
    pub fn params(&self) -> (ServiceParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut params = ServiceParams::default();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "service.model",
                format!("service.model is empty, using '{}'", DEFAULT_MODEL),
            ));
        } else {
            params = params.with_model(self.model.trim());
        }

        if (0.0..=1.0).contains(&self.temperature) {
            params = params.with_temperature(self.temperature);
        } else {
            issues.push(ConfigIssue::warning(
                "service.temperature",
                format!(
                    "service.temperature {} is outside [0, 1], using {}",
                    self.temperature, DEFAULT_TEMPERATURE
                ),
            ));
        }

        (params, issues)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.params().1;
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "service.timeout_secs".to_string(),
                message: "service.timeout_secs must be greater than zero".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "service.base_url".to_string(),
                message: format!("service.base_url '{}' is not an http(s) URL", self.base_url),
            });
        }
        issues
    }
}
