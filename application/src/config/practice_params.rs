//! Strategy selection and service parameters.
//!
//! These are application concerns: which classifier/responder pair a
//! session uses and how remote calls are parameterized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default model identifier for remote strategies
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default sampling temperature for client replies
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// How the session obtains client lines and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    /// Remote strategies when the service is configured, offline otherwise
    #[default]
    Auto,
    /// Canned corpus and keyword rubric, no network
    Offline,
    /// Remote generation and scoring; start is refused when not configured
    Remote,
}

impl StrategyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyMode::Auto => "auto",
            StrategyMode::Offline => "offline",
            StrategyMode::Remote => "remote",
        }
    }
}

impl fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(StrategyMode::Auto),
            "offline" => Ok(StrategyMode::Offline),
            "remote" => Ok(StrategyMode::Remote),
            other => Err(format!(
                "unknown mode '{}' (expected auto, offline or remote)",
                other
            )),
        }
    }
}

/// Classifier override, independent of the responder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierChoice {
    /// Follow the strategy mode
    #[default]
    Auto,
    Heuristic,
    Remote,
}

impl ClassifierChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierChoice::Auto => "auto",
            ClassifierChoice::Heuristic => "heuristic",
            ClassifierChoice::Remote => "remote",
        }
    }
}

impl fmt::Display for ClassifierChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassifierChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ClassifierChoice::Auto),
            "heuristic" => Ok(ClassifierChoice::Heuristic),
            "remote" => Ok(ClassifierChoice::Remote),
            other => Err(format!(
                "unknown classifier '{}' (expected auto, heuristic or remote)",
                other
            )),
        }
    }
}

/// Model and temperature for remote strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceParams {
    pub model: String,
    pub temperature: f32,
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ServiceParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
