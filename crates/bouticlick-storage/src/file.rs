//! # File Store
//!
//! A [`KeyValueStore`] persisted as one JSON object on disk.
//!
//! ## On-Disk Format
//! ```text
//! ~/.local/share/bouticlick/storage.json
//! {
//!   "cart": "[{\"id\":\"p1\",\"quantity\":2,...}]",
//!   "user": "{\"id\":\"2\",\"email\":\"user@example.com\",...}"
//! }
//! ```
//! Values are the raw strings handed to `set`, so the file mirrors what a
//! browser's local storage would hold.
//!
//! ## Write Path
//! ```text
//! set("cart", v)
//!    │
//!    ├── 1. copy the in-memory map with v applied (under write lock)
//!    ├── 2. serialize the copy → storage.json.<uuid>.tmp
//!    ├── 3. rename tmp → storage.json   (atomic on POSIX)
//!    └── 4. swap the copy in
//! ```
//! A crash mid-write leaves the previous file intact, and a failed write
//! leaves the in-memory map as it was.
//!
//! ## Corrupt Files
//! A file that is not a JSON object of strings is treated as empty (and
//! logged). It is replaced on the next successful write.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;

/// File-backed store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or lazily creates) the store file at `path`.
    ///
    /// The parent directory is created if missing. The file itself is not
    /// created until the first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let entries = Self::read_entries(&path)?;
        debug!(path = %path.display(), keys = entries.len(), "File store opened");

        Ok(FileStore {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> StorageResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::io(path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Local store file is not a JSON object of strings; starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(entries)?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        let tmp = self
            .path
            .with_file_name(format!("{}.{}.tmp", file_name, Uuid::new_v4().simple()));

        fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(&self.path, e));
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_entries(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.write_entries(&next)?;
        *entries = next;
        Ok(())
    }
}
