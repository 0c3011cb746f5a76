//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists the
//! session to the local filesystem. It is used on desktop to keep the user
//! signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── kv/
//!     ├── token      # raw token string
//!     └── user       # JSON-serialized user
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/smart-diary/` |
//! | Linux | `~/.local/share/smart-diary/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\smart-diary\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreResult;
use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn kv_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.kv_dir().join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::create_dir_all(self.kv_dir())?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, Session, UserInfo};
    use crate::session::SessionStorage;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let storage = SessionStorage::new(FileStore::new(dir.path().to_path_buf()));
        let session = Session {
            token: "persisted-token".to_string(),
            user: UserInfo {
                id: EntryId::from(3),
                username: Some("wren".to_string()),
                email: "wren@example.com".to_string(),
            },
        };
        storage.save(&session).unwrap();

        // Re-open from same directory
        let reopened = SessionStorage::new(FileStore::new(dir.path().to_path_buf()));
        assert_eq!(reopened.load(), Some(session));

        reopened.clear().unwrap();
        assert!(!dir.path().join("kv").join("token").exists());
        assert!(!dir.path().join("kv").join("user").exists());
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get("token").unwrap().is_none());
        assert!(store.remove("token").is_ok());
    }
}
