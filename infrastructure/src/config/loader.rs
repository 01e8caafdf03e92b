//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::{Uncased, UncasedStr},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_FILENAMES: [&str; 2] = ["doq.toml", ".doq.toml"];

/// Environment variables recognized as overrides, and the keys they set
const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "service.api_key"),
    ("OPENAI_MODEL", "service.model"),
    ("OPENAI_TEMPERATURE", "service.temperature"),
    ("OPENAI_BASE_URL", "service.base_url"),
];

/// Configuration could not be read or merged
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `OPENAI_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./doq.toml` or `./.doq.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/doq-coach/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment.merge(Self::env_overrides()))
    }

    /// Defaults plus environment overrides only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, ConfigError> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(FileConfig::default()))
                .merge(Self::env_overrides()),
        )
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults overlaid with a single file, ignoring the environment
    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(FileConfig::default()))
                .merge(Toml::file(path)),
        )
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/doq-coach/config.toml if set,
    /// otherwise falls back to ~/.config/doq-coach/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("doq-coach").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for (var, key) in ENV_OVERRIDES {
            let marker = if std::env::var_os(var).is_some() {
                "[SET  ]"
            } else {
                "[     ]"
            };
            println!("  {} Env:     {} -> {}", marker, var, key);
        }

        if let Some(path) = config_path {
            let marker = if path.exists() { "[FOUND]" } else { "[MISS ]" };
            println!("  {} Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./doq.toml or ./.doq.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }

    fn env_overrides() -> Env {
        Env::raw()
            .only(&ENV_OVERRIDES.map(|(var, _)| var))
            .map(Self::env_key)
    }

    fn env_key(var: &UncasedStr) -> Uncased<'_> {
        ENV_OVERRIDES
            .iter()
            .find(|(name, _)| var == *name)
            .map(|(_, key)| Uncased::from(*key))
            .unwrap_or_else(|| var.into())
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }
}
