//! # bouticlick-storage: Local Storage for Bouticlick
//!
//! This crate is the storefront's local, string-keyed store, the same role
//! browser local storage plays for a web storefront. It persists two
//! snapshots: the signed-in identity and the cart contents.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bouticlick Data Flow                             │
//! │                                                                         │
//! │  CartStore::add_item / AuthStore::login                                │
//! │       │  (best-effort save after each mutation)                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                bouticlick-storage (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ LocalStorage  │    │   JsonSlot    │    │   Backends   │  │   │
//! │  │   │  (store.rs)   │───►│ (snapshot.rs) │───►│ MemoryStore  │  │   │
//! │  │   │               │    │ load / save   │    │ FileStore    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/bouticlick/storage.json                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - `KeyValueStore` trait and `MemoryStore`
//! - [`file`] - `FileStore`, one JSON object file
//! - [`snapshot`] - `SnapshotStore` trait and `JsonSlot`
//! - [`store`] - `StorageConfig` and the `LocalStorage` handle
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use bouticlick_storage::{LocalStorage, SnapshotStore, StorageConfig};
//!
//! let storage = LocalStorage::open(&StorageConfig::ephemeral()).unwrap();
//! let cart = storage.cart_snapshot();
//!
//! assert_eq!(cart.load(), None);
//! cart.save(&Vec::new()).unwrap();
//! assert_eq!(cart.load(), Some(Vec::new()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod kv;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use snapshot::{JsonSlot, SnapshotStore};
pub use store::{LocalStorage, StorageConfig, CART_KEY, USER_KEY};
