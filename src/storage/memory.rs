//! In-memory key-value store

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries()?.keys().cloned().collect())
    }

    fn multi_set(&self, entries: &[(String, String)]) -> Result<(), StorageError> {
        let mut map = self.entries()?;
        for (key, value) in entries {
            map.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn multi_remove(&self, keys: &[String]) -> Result<(), StorageError> {
        let mut map = self.entries()?;
        for key in keys {
            map.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("leaderboard").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_and_remove_clears() {
        let store = MemoryStore::new();
        store.set("current_player", "Ana").unwrap();
        store.set("current_player", "Bo").unwrap();
        assert_eq!(store.get("current_player").unwrap().as_deref(), Some("Bo"));

        store.multi_remove(&["current_player".to_string()]).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }
}
