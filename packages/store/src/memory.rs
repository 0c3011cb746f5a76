use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreResult;
use crate::session::KeyValueStore;

/// In-memory KeyValueStore for testing and as a fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds usable strings.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("token", "t1").unwrap();
        assert_eq!(other.get("token").unwrap().as_deref(), Some("t1"));

        other.remove("token").unwrap();
        assert!(store.get("token").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("user").is_ok());
    }
}
