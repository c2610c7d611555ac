//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{KeyValueStore, StoreError};

/// Non-persistent [`KeyValueStore`] backed by a shared hash map.
///
/// Clones share the same underlying map, so a session store and a test
/// can observe each other's writes through separate handles.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::keys;

    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(keys::TOKEN).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let store = MemoryStore::new();
        store.set(keys::TOKEN, "abc123").unwrap();
        assert_eq!(store.get(keys::TOKEN).unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set(keys::USER_ROLE, "student").unwrap();
        store.set(keys::USER_ROLE, "teacher").unwrap();
        assert_eq!(
            store.get(keys::USER_ROLE).unwrap().as_deref(),
            Some("teacher")
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set(keys::USER, "{}").unwrap();
        store.remove(keys::USER).unwrap();
        store.remove(keys::USER).unwrap();
        assert_eq!(store.get(keys::USER).unwrap(), None);
    }

    #[test]
    fn test_clones_share_the_same_map() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(keys::TOKEN, "shared").unwrap();
        assert_eq!(other.get(keys::TOKEN).unwrap().as_deref(), Some("shared"));
    }
}
