//! Shared session storage constructor for all platforms.
//!
//! Returns a [`store::SessionStorage`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`] under `<data_dir>/smart-diary/`
//! - anything else: [`store::MemoryStore`], which forgets the session on exit

/// Directory name used under the platform data directory.
pub const APP_DIR: &str = "smart-diary";

/// Create platform-appropriate session storage.
pub fn make_session_storage() -> store::SessionStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStorage::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::SessionStorage::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        store::SessionStorage::new(store::FileStore::new(base))
    }
}
