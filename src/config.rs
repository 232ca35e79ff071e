//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::Language;
use crate::concierge::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub concierge: ConciergeConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Persisted store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("luxecut").to_string_lossy().to_string())
        .unwrap_or_else(|| "./luxecut_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Generative-text API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConciergeConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub chat_model: String,

    #[serde(default = "default_model")]
    pub consultation_model: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            chat_model: default_model(),
            consultation_model: default_model(),
        }
    }
}

impl ConciergeConfig {
    /// Client settings, if an API key is configured
    pub fn gemini(&self) -> Option<GeminiConfig> {
        let api_key = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        Some(GeminiConfig {
            api_key: api_key.to_string(),
            base_url: self.base_url.clone(),
        })
    }
}

/// Site presentation configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub default_language: Language,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("luxecut").join("config.toml")),
            Some(PathBuf::from("/etc/luxecut/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // The API key keeps the bare name the browser build reads at compile time
        if let Some(key) = var("API_KEY") {
            self.concierge.api_key = Some(key);
        }

        if let Some(data_dir) = var("LUXECUT_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(lang) = var("LUXECUT_LANG") {
            match lang.parse() {
                Ok(lang) => self.site.default_language = lang,
                Err(e) => tracing::warn!("Ignoring LUXECUT_LANG: {}", e),
            }
        }

        if let Some(level) = var("LUXECUT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LUXECUT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# LuxeCut Configuration
#
# Environment variables override these settings:
# - API_KEY
# - LUXECUT_DATA_DIR
# - LUXECUT_LANG
# - LUXECUT_LOG_LEVEL
# - LUXECUT_LOG_FORMAT

[storage]
# Directory holding the services, bookings, social links and translations
data_dir = "~/.local/share/luxecut"

[concierge]
# Generative-language API key (leave unset to disable consult/chat)
# api_key = ""

# API endpoint
base_url = "https://generativelanguage.googleapis.com/v1beta"

# Models for the chat assistant and the grooming consultation
chat_model = "gemini-3-flash-preview"
consultation_model = "gemini-3-flash-preview"

[site]
# Language used when --lang is not given: vi or en
default_language = "vi"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/luxecut/luxecut.log"
"#
    .to_string()
}
