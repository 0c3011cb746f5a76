pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod session;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::DiaryConfig;
pub use error::{StoreError, StoreResult};
pub use models::{DiaryEntry, EntryId, MoodTrendPoint, Session, UserInfo, WordFrequency};
pub use session::{KeyValueStore, SessionStorage};
pub use validation::ValidationError;
