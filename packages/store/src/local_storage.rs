//! `window.localStorage` backend for the browser build.

use crate::error::{StoreError, StoreResult};
use crate::session::KeyValueStore;

/// KeyValueStore over the browser's `localStorage`.
///
/// The storage handle is looked up on every call, so the store itself holds
/// no JS objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
