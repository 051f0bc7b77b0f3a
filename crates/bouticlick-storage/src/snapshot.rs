//! # Typed Snapshots
//!
//! `SnapshotStore<T>` is the persistence seam used by the app's state
//! containers: `load()` on startup, `save()` after every mutation, `clear()`
//! on sign-out. `JsonSlot<T>` implements it for one key of any
//! [`KeyValueStore`].
//!
//! ## Load Semantics
//! ```text
//! load()
//!   ├── key absent ───────────────► None
//!   ├── store read failed ────────► None   (warn!)
//!   ├── value is not valid JSON T ► None   (warn!, value left in place)
//!   └── ok ───────────────────────► Some(T)
//! ```
//! Callers never see a parse failure; there is no schema versioning.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StorageResult;
use crate::kv::KeyValueStore;

/// Load/save interface for one persisted value.
pub trait SnapshotStore<T>: Send + Sync {
    /// Returns the saved value, or `None` when there is nothing usable.
    fn load(&self) -> Option<T>;

    /// Replaces the saved value.
    fn save(&self, value: &T) -> StorageResult<()>;

    /// Deletes the saved value.
    fn clear(&self) -> StorageResult<()>;
}

/// A JSON-encoded value stored under a single key.
pub struct JsonSlot<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSlot<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        JsonSlot {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The key this slot reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> Clone for JsonSlot<T> {
    fn clone(&self) -> Self {
        JsonSlot {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSlot").field("key", &self.key).finish()
    }
}

impl<T> SnapshotStore<T> for JsonSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Option<T> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No saved snapshot");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Could not read saved snapshot");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding malformed snapshot");
                None
            }
        }
    }

    fn save(&self, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(&self.key, &json)
    }

    fn clear(&self) -> StorageResult<()> {
        self.store.remove(&self.key)
    }
}
