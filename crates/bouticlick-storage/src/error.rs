//! # Storage Error Types
//!
//! Error types for local store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the file path                       │
//! │       │                                                                 │
//! │       ├──► CartStore / AuthStore: logged at warn, state stays in memory │
//! │       │                                                                 │
//! │       └──► Startup (opening the store): ApiError → CLI exit code       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed snapshot is NOT an error at this level: `JsonSlot::load`
//! reports it as "no saved state".

use std::path::PathBuf;
use thiserror::Error;

/// Local store errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the store's lock.
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// Backend refused the operation (quota, read-only, test double).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
