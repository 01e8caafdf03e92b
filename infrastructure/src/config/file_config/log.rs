//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL transcript event log; disabled when unset
    pub events_file: Option<String>,
}
