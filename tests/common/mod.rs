//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use favprimes::prefs::{PreferenceStore, PrefsError, Record};
use tempfile::TempDir;

/// Create a temp dir holding a `config.toml` that points the preference
/// file at `<dir>/preferences.toml`.
///
/// Returns `(dir, config_path, preferences_path)`.
pub fn temp_config() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let prefs_path = temp_dir.path().join("preferences.toml");

    let content = format!(
        r#"[storage]
preferences_path = "{}"
record_key = "state"

[logging]
level = "warn"
"#,
        prefs_path.display().to_string().replace('\\', "\\\\")
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path, prefs_path)
}

/// Preference store whose writes always fail. Reads return `initial`.
pub struct FailingStore {
    pub initial: Option<Record>,
}

impl PreferenceStore for FailingStore {
    fn read(&self, _key: &str) -> Result<Option<Record>, PrefsError> {
        Ok(self.initial.clone())
    }

    fn write(&self, _key: &str, _record: Record) -> Result<(), PrefsError> {
        Err(PrefsError::Write {
            path: PathBuf::from("/unwritable/preferences.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
