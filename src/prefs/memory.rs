use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{PreferenceStore, PrefsError, Record};

/// In-memory preference store.
///
/// Clones share the same records, so a caller can keep a handle and inspect
/// what another owner persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records written so far.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Record>, PrefsError> {
        Ok(self.records.lock().get(key).cloned())
    }

    fn write(&self, key: &str, record: Record) -> Result<(), PrefsError> {
        self.records.lock().insert(key.to_string(), record);
        Ok(())
    }
}
