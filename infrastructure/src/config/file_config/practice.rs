//! Practice configuration from TOML (`[practice]` section)

use super::ConfigIssue;
use doq_application::{ClassifierChoice, StrategyMode};
use doq_domain::PracticeSettings;
use serde::{Deserialize, Serialize};

/// Raw practice configuration from TOML
///
/// Session settings are kept as strings: they are validated when a session
/// starts, not when the file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePracticeConfig {
    /// Strategy mode: "auto", "offline" or "remote"
    pub mode: String,
    /// Classifier override: "auto", "heuristic" or "remote"
    pub classifier: String,
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    pub feedback: Option<String>,
}

impl Default for FilePracticeConfig {
    fn default() -> Self {
        Self {
            mode: StrategyMode::default().as_str().to_string(),
            classifier: ClassifierChoice::default().as_str().to_string(),
            theme: None,
            difficulty: None,
            feedback: None,
        }
    }
}

impl FilePracticeConfig {
    pub fn parse_mode(&self) -> (StrategyMode, Vec<ConfigIssue>) {
        match self.mode.parse::<StrategyMode>() {
            Ok(mode) => (mode, vec![]),
            Err(e) => (
                StrategyMode::default(),
                vec![ConfigIssue::warning(
                    "practice.mode",
                    format!("practice.mode: {}, falling back to 'auto'", e),
                )],
            ),
        }
    }

    pub fn parse_classifier(&self) -> (ClassifierChoice, Vec<ConfigIssue>) {
        match self.classifier.parse::<ClassifierChoice>() {
            Ok(choice) => (choice, vec![]),
            Err(e) => (
                ClassifierChoice::default(),
                vec![ConfigIssue::warning(
                    "practice.classifier",
                    format!("practice.classifier: {}, falling back to 'auto'", e),
                )],
            ),
        }
    }

    /// Session settings as written in the file, possibly incomplete
    pub fn settings(&self) -> PracticeSettings {
        PracticeSettings {
            theme: self.theme.clone(),
            difficulty: self.difficulty.clone(),
            feedback: self.feedback.clone(),
        }
    }
}
