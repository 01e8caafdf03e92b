//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; values with a closed set of choices are
//! kept as strings and parsed with a fallback so that a typo produces a
//! warning instead of a load failure.

mod log;
mod output;
mod practice;
mod repl;
mod service;

pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use practice::FilePracticeConfig;
pub use repl::FileReplConfig;
pub use service::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileServiceConfig};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A fallback value is used
    Warning,
    /// The configuration cannot be used as written
    Error,
}

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `service.temperature`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation service settings
    pub service: FileServiceConfig,
    /// Strategy selection and default session settings
    pub practice: FilePracticeConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript event log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.service.validate());
        issues.extend(self.practice.parse_mode().1);
        issues.extend(self.practice.parse_classifier().1);
        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}
