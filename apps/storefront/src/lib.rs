//! # Bouticlick Storefront Library
//!
//! The storefront's state containers, commands, and the CLI that drives them.
//!
//! ## Module Organization
//! ```text
//! bouticlick_storefront/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── cli.rs          ◄─── clap definitions and dispatch
//! ├── output.rs       ◄─── Text / JSON rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (explicit construction)
//! │   ├── cart.rs     ◄─── Observable cart store
//! │   ├── auth.rs     ◄─── Observable session store
//! │   ├── observers.rs◄─── Subscriber registry
//! │   ├── orders.rs   ◄─── Order history
//! │   ├── catalog.rs  ◄─── Product catalog
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog browsing
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── auth.rs     ◄─── Session commands
//! │   ├── orders.rs   ◄─── Checkout and history
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Observing the Cart
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use bouticlick_storefront::state::CartStore;
//! use bouticlick_storefront::state::Catalog;
//!
//! let cart = CartStore::new();
//! let badge = Arc::new(Mutex::new(0));
//!
//! let sink = Arc::clone(&badge);
//! cart.subscribe(move |snapshot| *sink.lock().unwrap() = snapshot.item_count);
//!
//! let catalog = Catalog::demo();
//! cart.add_item(&catalog.get("p1").unwrap().to_candidate());
//! assert_eq!(*badge.lock().unwrap(), 1);
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod state;

use tracing::info;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ApiError;
use output::Output;
use state::AppState;

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • BOUTICLICK_* environment variables over defaults                  │
/// │     • --data-dir / --ephemeral / --catalog override both                │
/// │                                                                         │
/// │  2. Open Local Storage ───────────────────────────────────────────────► │
/// │     • <data dir>/storage.json, created on first write                   │
/// │     • Corrupt file: warn! and start empty                               │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • CartStore restored from key "cart"                                │
/// │     • AuthStore restored from key "user"                                │
/// │     • Catalog from --catalog file, else demo products                   │
/// │     • OrderHistory seeded with mock orders                              │
/// │                                                                         │
/// │  4. Execute Command ──────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli, out: &Output) -> Result<(), ApiError> {
    let config = cli.app_config();
    info!(
        store = %config.store_name,
        data_dir = ?config.data_dir,
        catalog = ?config.catalog_path,
        "Starting Bouticlick storefront"
    );

    let out = out.clone().with_config(&config);
    let state = AppState::open(config)?;
    cli::execute(cli.command, &state, &out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so that `--json` output stays parseable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bouticlick=trace` - Show trace for bouticlick crates only
/// - Default: warnings, plus info from bouticlick crates (`--verbose`: debug)
pub fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let default = if verbose {
        "info,bouticlick=debug"
    } else {
        "warn,bouticlick=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}
