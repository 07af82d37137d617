//! Local key-value storage for player progress
//!
//! Every aggregate is persisted as one JSON document under a string key.
//! Two backends are provided:
//!
//! - [`SqliteStore`]: a single-table SQLite file (`~/.skyquiz/progress.db`)
//! - [`MemoryStore`]: a process-local map, used by tests and throwaway sessions
//!
//! Multi-key writes are atomic in both backends, so a caller can commit several
//! documents as one unit.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A string-keyed document store.
///
/// Missing keys read as `None`. `multi_set` and `multi_remove` either apply
/// every entry or none of them.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// All keys currently present, in ascending order
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    fn multi_set(&self, entries: &[(String, String)]) -> Result<(), StorageError>;

    fn multi_remove(&self, keys: &[String]) -> Result<(), StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.multi_set(&[(key.to_string(), value.to_string())])
    }
}
