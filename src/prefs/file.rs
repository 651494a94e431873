//! TOML-file preference store.
//!
//! All records live in one document, one table per key. Every write takes an
//! exclusive lock on a sibling `.lock` file, rewrites the whole document into a
//! temporary file and renames it over the original.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use toml::Value;

use super::{PreferenceStore, PrefsError, Record};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the preference file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "preferences.toml".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn read_document(&self) -> Result<Option<Record>, PrefsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PrefsError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let document = toml::from_str::<Record>(&content).map_err(|e| PrefsError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(document))
    }

    fn lock(&self) -> Result<File, PrefsError> {
        let lock_path = self.sibling(".lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| PrefsError::Lock {
                path: lock_path.clone(),
                source: e,
            })?;
        lock.lock_exclusive().map_err(|e| PrefsError::Lock {
            path: lock_path,
            source: e,
        })?;
        Ok(lock)
    }

    fn write_error(&self, source: std::io::Error) -> PrefsError {
        PrefsError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Record>, PrefsError> {
        let Some(mut document) = self.read_document()? else {
            return Ok(None);
        };

        match document.remove(key) {
            Some(Value::Table(record)) => Ok(Some(record)),
            Some(other) => {
                tracing::warn!(
                    key = %key,
                    found = other.type_str(),
                    "Preference record is not a table, ignoring"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, record: Record) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let lock = self.lock()?;

        // Keep records stored under other keys. Only a document that no longer
        // parses is replaced; I/O failures abort the write.
        let mut document = match self.read_document() {
            Ok(document) => document.unwrap_or_default(),
            Err(err @ PrefsError::Parse { .. }) => {
                tracing::warn!(error = %err, "Replacing unparsable preference file");
                Record::new()
            }
            Err(err) => return Err(err),
        };
        document.insert(key.to_string(), Value::Table(record));

        let content = toml::to_string(&document)?;
        replace_file(&self.sibling(".tmp"), &self.path, content.as_bytes())
            .map_err(|e| self.write_error(e))?;

        FileExt::unlock(&lock).map_err(|e| PrefsError::Lock {
            path: self.sibling(".lock"),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), key = %key, "Preferences written");
        Ok(())
    }
}

/// Write `content` to `tmp_path`, then rename it over `path`.
///
/// The temporary file is removed if any step fails.
fn replace_file(tmp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let result = File::create(tmp_path)
        .and_then(|mut tmp| {
            tmp.write_all(content)?;
            tmp.sync_all()
        })
        .and_then(|()| fs::rename(tmp_path, path));

    if result.is_err() && tmp_path.is_file() {
        if let Err(err) = fs::remove_file(tmp_path) {
            tracing::warn!(
                path = %tmp_path.display(),
                error = %err,
                "Failed to remove temporary preference file"
            );
        }
    }
    result
}
