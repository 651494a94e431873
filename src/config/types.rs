use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and under which key the counter snapshot is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Preference file path. `None` uses the platform default.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
    /// Name of the record holding the snapshot (default: "state").
    #[serde(default = "default_record_key")]
    pub record_key: String,
}

/// Logging configuration. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive passed to `EnvFilter` (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_record_key() -> String {
    "state".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: None,
            record_key: default_record_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
