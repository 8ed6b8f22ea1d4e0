use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError, StorageKey};

/// In-process storage. Clones share the same map.
///
/// Can be switched offline to exercise the storage-failure path.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<StorageKey, String>>>,
    available: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Toggle availability; while unavailable every call fails.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable("memory store is offline".to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStore {
    fn load_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(values.get(&key).cloned())
    }

    fn save_raw(&self, key: StorageKey, json: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?
            .insert(key, json.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save_raw(StorageKey::Timer, "{}").unwrap();
        assert_eq!(
            other.load_raw(StorageKey::Timer).unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn offline_store_fails_reads_and_writes() {
        let store = MemoryStore::new();
        store.set_available(false);
        assert!(matches!(
            store.save_raw(StorageKey::Timer, "{}"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.load_raw(StorageKey::Timer).is_err());
        store.set_available(true);
        assert!(store.load_raw(StorageKey::Timer).unwrap().is_none());
    }
}
