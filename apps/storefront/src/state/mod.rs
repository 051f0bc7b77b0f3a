//! # State Module
//!
//! The storefront's state containers, constructed once at startup and
//! passed explicitly to commands (there are no globals).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  AppState::open(config)                                         │   │
//! │  │    LocalStorage::open(config.storage())                         │   │
//! │  │    CartStore::with_persistence(storage.cart_snapshot())         │   │
//! │  │    AuthStore::with_persistence(storage.user_snapshot())         │   │
//! │  │    auth.restore()                                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌────────────┬───────────┼────────────┬──────────────┐             │
//! │     ▼            ▼           ▼            ▼              ▼              │
//! │  ┌────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌───────────┐  │
//! │  │AppConfig│ │ Catalog  │ │CartStore │ │  AuthStore   │ │  Order    │  │
//! │  │        │ │          │ │ Arc,     │ │  Arc,        │ │  History  │  │
//! │  │read-only│ │read-only │ │ observed │ │  observed    │ │ in memory │  │
//! │  └────────┘ └──────────┘ └──────────┘ └──────────────┘ └───────────┘  │
//! │                                                                         │
//! │  PERSISTED: cart → key "cart", identity → key "user"                   │
//! │  NOT PERSISTED: order history                                           │
//! │  CATALOG: demo products, or a JSON file via --catalog                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod catalog;
mod config;
mod observers;
mod orders;

use std::path::Path;
use std::sync::Arc;

use bouticlick_core::Product;
use bouticlick_storage::{LocalStorage, StorageError};
use tracing::info;

use crate::error::ApiError;

pub use auth::{AuthState, AuthStore};
pub use cart::CartStore;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use observers::SubscriptionId;
pub use orders::OrderHistory;

/// Everything a command may need.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub cart: Arc<CartStore>,
    pub auth: Arc<AuthStore>,
    pub orders: OrderHistory,
}

impl AppState {
    /// Opens local storage per `config` and restores the saved session.
    ///
    /// When `config.catalog_path` is set the catalog is read from that
    /// file instead of the demo products.
    pub fn open(config: AppConfig) -> Result<Self, ApiError> {
        let catalog = match &config.catalog_path {
            Some(path) => Some(load_catalog(path)?),
            None => None,
        };
        let storage = LocalStorage::open(&config.storage())?;

        let mut state = AppState::with_storage(config, &storage);
        if let Some(catalog) = catalog {
            state.catalog = catalog;
        }
        Ok(state)
    }

    /// Builds the state on an already opened store.
    pub fn with_storage(config: AppConfig, storage: &LocalStorage) -> Self {
        let cart = Arc::new(CartStore::with_persistence(storage.cart_snapshot()));
        let auth = Arc::new(AuthStore::with_persistence(storage.user_snapshot()));
        auth.restore();

        info!(
            store = %config.store_name,
            cart_items = cart.item_count(),
            signed_in = auth.current_user().is_some(),
            "State initialized"
        );

        AppState {
            config,
            catalog: Catalog::demo(),
            cart,
            auth,
            orders: OrderHistory::with_mock_orders(),
        }
    }

    /// Fresh in-memory state.
    pub fn in_memory() -> Self {
        AppState::with_storage(AppConfig::ephemeral(), &LocalStorage::in_memory())
    }
}

/// Reads a catalog file: a JSON array of products with prices in cents.
pub fn load_catalog(path: &Path) -> Result<Catalog, ApiError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
        ApiError::validation(format!("Catalog file {} is not valid: {}", path.display(), e))
    })?;
    let catalog = Catalog::try_new(products)?;

    info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let name = format!("bouticlick-catalog-{}.json", uuid::Uuid::new_v4().simple());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_file() {
        let json = serde_json::to_string(Catalog::demo().all()).unwrap();
        let path = write_temp(&json);

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("p4").unwrap().price.cents(), 3999);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_catalog_errors() {
        let missing = std::env::temp_dir().join("bouticlick-no-such-catalog.json");
        assert_eq!(load_catalog(&missing).unwrap_err().code, ErrorCode::StorageError);

        let path = write_temp("{\"products\": []}");
        assert_eq!(load_catalog(&path).unwrap_err().code, ErrorCode::ValidationError);
        std::fs::remove_file(path).unwrap();

        let path = write_temp(r#"[{"id":"x","name":"X","price":-5,"image":"","rating":1.0,"stock":1,"category":"C"}]"#);
        assert_eq!(load_catalog(&path).unwrap_err().code, ErrorCode::ValidationError);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_open_with_catalog_file() {
        let path = write_temp(r#"[{"id":"t1","name":"Tea","price":450,"image":"","rating":4.9,"stock":3,"category":"Pantry"}]"#);
        let config = AppConfig {
            catalog_path: Some(path.clone()),
            ..AppConfig::ephemeral()
        };

        let state = AppState::open(config).unwrap();
        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.catalog.categories(), vec!["Pantry"]);

        std::fs::remove_file(path).unwrap();
    }
}
