//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`, `--ephemeral`, `--catalog`)
//! 2. Environment variables (`BOUTICLICK_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use bouticlick_core::{Money, STORE_NAME};
use bouticlick_storage::StorageConfig;
use directories::ProjectDirs;
use serde::Serialize;
use ts_rs::TS;

/// Application configuration.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Store name (shown in the navbar and receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Directory holding `storage.json`.
    /// `None` keeps everything in memory.
    #[ts(as = "Option<String>")]
    pub data_dir: Option<PathBuf>,

    /// Product catalog JSON file.
    /// `None` uses the built-in demo catalog.
    #[ts(as = "Option<String>")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Bouticlick"
    /// - Currency: USD ($)
    /// - Data dir: platform data directory, if one can be determined
    fn default() -> Self {
        AppConfig {
            store_name: STORE_NAME.to_string(),
            currency_symbol: "$".to_string(),
            data_dir: default_data_dir(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOUTICLICK_DATA_DIR`: Override the data directory
    /// - `BOUTICLICK_STORE_NAME`: Override store name
    /// - `BOUTICLICK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BOUTICLICK_CATALOG`: Load products from a JSON file
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(dir) = std::env::var("BOUTICLICK_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(store_name) = std::env::var("BOUTICLICK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("BOUTICLICK_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(path) = std::env::var("BOUTICLICK_CATALOG") {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        config
    }

    /// In-memory configuration (nothing touches disk).
    pub fn ephemeral() -> Self {
        AppConfig {
            data_dir: None,
            ..AppConfig::default()
        }
    }

    /// Storage settings derived from this configuration.
    pub fn storage(&self) -> StorageConfig {
        match &self.data_dir {
            Some(dir) => StorageConfig::new(dir),
            None => StorageConfig::ephemeral(),
        }
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bouticlick_core::Money;
    /// use bouticlick_storefront::state::AppConfig;
    ///
    /// let config = AppConfig::ephemeral();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part().abs()
        )
    }
}

/// Platform data directory.
///
/// - **macOS**: `~/Library/Application Support/com.bouticlick.storefront`
/// - **Windows**: `%APPDATA%\bouticlick\storefront\data`
/// - **Linux**: `~/.local/share/storefront`
fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "bouticlick", "storefront").map(|dirs| dirs.data_dir().to_path_buf())
}
