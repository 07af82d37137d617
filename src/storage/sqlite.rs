//! SQLite-backed key-value store
//!
//! One table, one row per key. Values are opaque text (JSON documents or raw
//! strings); the store never inspects them.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::{KeyValueStore, StorageError};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;

/// Key-value store on a SQLite connection shared between clones
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the store at a specific path
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    fn multi_set(&self, entries: &[(String, String)]) -> Result<(), StorageError> {
        let now = Utc::now().timestamp_millis();
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for (key, value) in entries {
            tx.execute(
                r#"INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                   ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3"#,
                params![key, value, now],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn multi_remove(&self, keys: &[String]) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for key in keys {
            tx.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_parent_dir_and_table() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("progress.db");
        let store = SqliteStore::open(&db_path).unwrap();

        assert!(db_path.exists());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("progress.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            store
                .multi_set(&[
                    ("leaderboard".to_string(), "[]".to_string()),
                    ("current_player".to_string(), "Ana".to_string()),
                ])
                .unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("current_player").unwrap().as_deref(), Some("Ana"));
        assert_eq!(
            store.keys().unwrap(),
            vec!["current_player".to_string(), "leaderboard".to_string()]
        );
    }

    #[test]
    fn test_multi_remove_ignores_missing_keys() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("game_results", "[]").unwrap();
        store
            .multi_remove(&["game_results".to_string(), "never_written".to_string()])
            .unwrap();
        assert_eq!(store.get("game_results").unwrap(), None);
    }
}
