//! Availability of the text-generation service

use serde::{Deserialize, Serialize};

/// Value shipped in sample environment files; never a real credential
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

/// Whether a usable credential for the text-generation service is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Configured,
    MissingCredential,
    PlaceholderCredential,
}

impl ServiceStatus {
    /// Classify a credential as found in configuration or the environment.
    pub fn evaluate(api_key: Option<&str>) -> Self {
        match api_key.map(str::trim) {
            None | Some("") => ServiceStatus::MissingCredential,
            Some(PLACEHOLDER_API_KEY) => ServiceStatus::PlaceholderCredential,
            Some(_) => ServiceStatus::Configured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ServiceStatus::Configured)
    }

    /// User-facing explanation, free of technical detail
    pub fn message(&self) -> &'static str {
        match self {
            ServiceStatus::Configured => "OpenAI API configured successfully.",
            ServiceStatus::MissingCredential => {
                "OpenAI API key not found. Please add OPENAI_API_KEY to your environment or the [service] section of doq.toml."
            }
            ServiceStatus::PlaceholderCredential => {
                "Please replace the placeholder API key with your actual OpenAI API key."
            }
        }
    }
}
