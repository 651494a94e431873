//! Key-value preference storage.
//!
//! A preference store holds named records, each a TOML table. Writes always
//! replace a record wholesale; there are no partial updates.

mod error;
mod file;
mod memory;

pub use error::PrefsError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A single named preference record.
pub type Record = toml::Table;

/// Storage backend for named preference records.
pub trait PreferenceStore {
    /// Read the record stored under `key`. `Ok(None)` if there is none.
    fn read(&self, key: &str) -> Result<Option<Record>, PrefsError>;

    /// Replace the record stored under `key`.
    fn write(&self, key: &str, record: Record) -> Result<(), PrefsError>;
}
