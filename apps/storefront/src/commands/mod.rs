//! # Commands Module
//!
//! Everything the storefront UI (or the CLI) can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog browsing
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── auth.rs     ◄─── Sign in / sign up / sign out
//! ├── orders.rs   ◄─── Checkout and order history
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs, borrowed from `AppState`:
//! ```rust
//! use bouticlick_storefront::commands::{cart, orders};
//! use bouticlick_storefront::state::AppState;
//!
//! let state = AppState::in_memory();
//!
//! // Only needs the cart
//! let _ = cart::get_cart(&state.cart);
//!
//! // Needs catalog and cart
//! cart::add_to_cart(&state.catalog, &state.cart, "p1").unwrap();
//!
//! // Needs session, cart and history
//! assert!(orders::checkout(&state.auth, &state.cart, &state.orders).is_err());
//! ```
//!
//! Every command logs `debug!("<name> command")` on entry and returns either
//! a serializable response or an [`ApiError`](crate::error::ApiError).

pub mod auth;
pub mod cart;
pub mod config;
pub mod orders;
pub mod product;
