//! Configuration file loading for doq-coach
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_TEMPERATURE`, `OPENAI_BASE_URL`
//! 2. `--config <path>` specified file
//! 3. Project root: `./doq.toml` or `./.doq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/doq-coach/config.toml`
//! 5. Fallback: `~/.config/doq-coach/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileConfig, FileLogConfig,
    FileOutputConfig, FilePracticeConfig, FileReplConfig, FileServiceConfig, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
