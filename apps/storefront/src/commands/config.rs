//! # Config Commands
//!
//! Command for retrieving application configuration.

use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration.
///
/// ## When Used
/// - Navbar (store name)
/// - Currency formatting
/// - `bouticlick config` (where the data lives)
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}
