//! # Local Storage Handle
//!
//! Opening the configured backend and handing out typed snapshot slots.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Local Storage                                      │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageConfig::new(dir) / StorageConfig::ephemeral()                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LocalStorage::open(&config)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │      Arc<dyn KeyValueStore>             │                           │
//! │  │   FileStore (dir/storage.json)          │                           │
//! │  │   or MemoryStore (ephemeral)            │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ├──► user_snapshot()  → JsonSlot<User>          key "user"       │
//! │       └──► cart_snapshot()  → JsonSlot<Vec<LineItem>> key "cart"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bouticlick_core::{LineItem, User};
use tracing::info;

use crate::error::StorageResult;
use crate::file::FileStore;
use crate::kv::{KeyValueStore, MemoryStore};
use crate::snapshot::JsonSlot;

// =============================================================================
// Well-Known Keys
// =============================================================================

/// Key of the authenticated identity snapshot.
pub const USER_KEY: &str = "user";

/// Key of the cart contents snapshot.
pub const CART_KEY: &str = "cart";

/// Default file name inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "storage.json";

// =============================================================================
// Configuration
// =============================================================================

/// Local storage configuration.
///
/// ## Example
/// ```rust
/// use bouticlick_storage::StorageConfig;
///
/// let config = StorageConfig::new("/tmp/bouticlick").file_name("dev.json");
/// assert!(config.file_path().unwrap().ends_with("dev.json"));
///
/// let scratch = StorageConfig::ephemeral();
/// assert!(scratch.file_path().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the store file. `None` means in-memory only.
    pub data_dir: Option<PathBuf>,

    /// File name inside `data_dir`.
    /// Default: `storage.json`
    pub file_name: String,
}

impl StorageConfig {
    /// File-backed storage in `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StorageConfig {
            data_dir: Some(data_dir.into()),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// In-memory storage (for tests and throwaway sessions).
    pub fn ephemeral() -> Self {
        StorageConfig {
            data_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Sets the file name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Full path of the store file, if file-backed.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(&self.file_name))
    }
}

// =============================================================================
// LocalStorage
// =============================================================================

/// Handle to the opened store.
///
/// Cheap to clone; every clone shares the same backend.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    /// Opens the backend described by `config`.
    ///
    /// ## Returns
    /// * `Ok(LocalStorage)` - ready to use
    /// * `Err(StorageError::Io)` - the data directory could not be created
    ///   or the existing file could not be read
    pub fn open(config: &StorageConfig) -> StorageResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.file_path() {
            Some(path) => {
                info!(path = %path.display(), "Opening local store");
                Arc::new(FileStore::open(path)?)
            }
            None => {
                info!("Using in-memory local store");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(LocalStorage { store })
    }

    /// Wraps an existing backend (tests inject doubles here).
    pub fn from_store(store: Arc<dyn KeyValueStore>) -> Self {
        LocalStorage { store }
    }

    /// In-memory storage.
    pub fn in_memory() -> Self {
        LocalStorage::from_store(Arc::new(MemoryStore::new()))
    }

    /// The raw key-value backend.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Slot for the authenticated identity.
    pub fn user_snapshot(&self) -> JsonSlot<User> {
        JsonSlot::new(self.store(), USER_KEY)
    }

    /// Slot for the cart contents.
    pub fn cart_snapshot(&self) -> JsonSlot<Vec<LineItem>> {
        JsonSlot::new(self.store(), CART_KEY)
    }
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotStore;
    use bouticlick_core::{Money, Role};

    #[test]
    fn test_slots_share_one_backend() {
        let storage = LocalStorage::in_memory();
        let user = User {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        };
        storage.user_snapshot().save(&user).unwrap();

        let clone = storage.clone();
        assert_eq!(clone.user_snapshot().load(), Some(user));
        assert!(clone.store().get(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn test_cart_slot_round_trips_line_items() {
        let storage = LocalStorage::in_memory();
        let items = vec![LineItem {
            id: "p1".to_string(),
            name: "Wireless Mouse".to_string(),
            image: String::new(),
            price: Money::from_cents(3999),
            quantity: 1,
            stock: 4,
        }];

        storage.cart_snapshot().save(&items).unwrap();
        assert_eq!(storage.cart_snapshot().load(), Some(items));
    }

    #[test]
    fn test_open_file_backed() {
        let dir = std::env::temp_dir().join(format!(
            "bouticlick-store-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let config = StorageConfig::new(&dir);

        let storage = LocalStorage::open(&config).unwrap();
        storage.store().set(CART_KEY, "[]").unwrap();
        assert!(config.file_path().unwrap().exists());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
