//! Application configuration.
//!
//! Loaded once at startup from `config.toml`. A missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, StorageConfig};
