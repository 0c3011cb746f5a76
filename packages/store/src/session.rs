//! # Persisted session
//!
//! The client keeps exactly two values across restarts: the opaque `token`
//! and the serialized `user`. They live in a [`KeyValueStore`] under the
//! well-known keys [`TOKEN_KEY`] and [`USER_KEY`] and are always written and
//! cleared together through [`SessionStorage`].
//!
//! Backends:
//!
//! | Store | Platform |
//! |-------|----------|
//! | [`crate::MemoryStore`] | tests, fallback |
//! | [`crate::FileStore`] | desktop (one file per key) |
//! | `LocalStorageStore` | browser (`window.localStorage`) |

use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::{Session, UserInfo};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Typed access to the persisted session.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage").finish_non_exhaustive()
    }
}

impl PartialEq for SessionStorage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl SessionStorage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Current token, read fresh from the backing store.
    ///
    /// Empty strings count as absent. Read failures are logged and treated as
    /// "no token" so the request goes out unauthenticated.
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::error!("Failed to read session token: {}", e);
                None
            }
        }
    }

    /// Stored user, if present and readable.
    pub fn user(&self) -> Option<UserInfo> {
        let raw = match self.store.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!("Failed to read stored user: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Full session when both token and user are present.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { token, user })
    }

    /// Write user and token. The token goes last, and any failed write clears
    /// both keys, so a stored token always has a stored user next to it.
    pub fn save(&self, session: &Session) -> StoreResult<()> {
        let user = serde_json::to_string(&session.user)?;
        let written = self
            .store
            .set(USER_KEY, &user)
            .and_then(|()| self.store.set(TOKEN_KEY, &session.token));

        if let Err(e) = written {
            if let Err(clear_err) = self.clear() {
                tracing::error!("Failed to roll back partial session: {}", clear_err);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove token and user. Both removals are attempted even if the first fails.
    pub fn clear(&self) -> StoreResult<()> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::EntryId;
    use crate::MemoryStore;

    /// Memory store that refuses writes to one key.
    struct RefusingStore {
        inner: MemoryStore,
        refused: &'static str,
    }

    impl KeyValueStore for RefusingStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if key == self.refused {
                return Err(StoreError::Unavailable(format!("{key} is read-only")));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }
    }

    fn sample_session() -> Session {
        Session {
            token: "abc.def.ghi".to_string(),
            user: UserInfo {
                id: EntryId::from("42"),
                username: Some("journaler".to_string()),
                email: "journaler@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let memory = MemoryStore::new();
        let storage = SessionStorage::new(memory.clone());

        assert!(storage.token().is_none());
        assert!(storage.load().is_none());

        storage.save(&sample_session()).unwrap();
        assert_eq!(storage.token().as_deref(), Some("abc.def.ghi"));
        assert_eq!(storage.load(), Some(sample_session()));
        assert!(memory.get(USER_KEY).unwrap().unwrap().contains("journaler"));

        storage.clear().unwrap();
        assert!(storage.token().is_none());
        assert!(storage.user().is_none());
        assert!(memory.get(USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let memory = MemoryStore::new();
        memory.set(TOKEN_KEY, "").unwrap();
        let storage = SessionStorage::new(memory);
        assert!(storage.token().is_none());
    }

    #[test]
    fn test_token_without_user_still_counts() {
        let memory = MemoryStore::new();
        memory.set(TOKEN_KEY, "t").unwrap();
        memory.set(USER_KEY, "{not json").unwrap();
        let storage = SessionStorage::new(memory);
        assert_eq!(storage.token().as_deref(), Some("t"));
        assert!(storage.user().is_none());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_failed_user_write_leaves_no_token() {
        let memory = MemoryStore::new();
        let storage = SessionStorage::new(RefusingStore {
            inner: memory.clone(),
            refused: USER_KEY,
        });

        assert!(storage.save(&sample_session()).is_err());
        assert!(storage.token().is_none());
        assert!(memory.get(TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn test_failed_token_write_removes_user() {
        let memory = MemoryStore::new();
        let storage = SessionStorage::new(RefusingStore {
            inner: memory.clone(),
            refused: TOKEN_KEY,
        });

        assert!(storage.save(&sample_session()).is_err());
        assert!(storage.token().is_none());
        assert!(memory.get(USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_failed_save_replaces_previous_session() {
        let memory = MemoryStore::new();
        SessionStorage::new(memory.clone())
            .save(&sample_session())
            .unwrap();

        let storage = SessionStorage::new(RefusingStore {
            inner: memory.clone(),
            refused: TOKEN_KEY,
        });
        assert!(storage.save(&sample_session()).is_err());
        assert!(storage.load().is_none());
    }
}
