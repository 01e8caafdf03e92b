//! Infrastructure layer for doq-coach
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileLogConfig, FileOutputConfig,
    FilePracticeConfig, FileReplConfig, FileServiceConfig, Severity,
};
pub use logging::JsonlEventLog;
pub use openai::OpenAiGateway;
pub use providers::StrategyRouter;
