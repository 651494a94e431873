use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "favprimes";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/favprimes/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Default location of the preference file, next to the config file.
    pub fn default_preferences_path() -> PathBuf {
        app_dir().join("preferences.toml")
    }

    /// Preference file path, honouring the `storage.preferences_path` override.
    pub fn preferences_path(&self) -> PathBuf {
        self.storage
            .preferences_path
            .clone()
            .unwrap_or_else(Self::default_preferences_path)
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The record key is not blank
    /// - The log level is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.record_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "storage.record_key must not be empty".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.level must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn app_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join(APP_DIR)
}
