//! # bouticlick-core: Pure Storefront Logic
//!
//! This crate is the **heart** of the Bouticlick storefront. It contains the
//! cart reducer, money arithmetic, domain types and the mock identity
//! directory, all with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bouticlick Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 UI consumers (web views / CLI)                  │   │
//! │  │   Product grid ──► Navbar badge ──► Cart page ──► Orders page   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            storefront app: CartStore / AuthStore                │   │
//! │  │      (locking, persistence, subscriber notification)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bouticlick-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   auth    │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   Mock    │  │   │
//! │  │   │  User     │  │           │  │ LineItem  │  │ Directory │  │   │
//! │  │   │  Order    │  │           │  │ Snapshot  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart reducer and its snapshot
//! - [`types`] - Domain types (Product, User, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`auth`] - Mock identity directory
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bouticlick_core::{Cart, CartCandidate, Money};
//!
//! let mut cart = Cart::new();
//! let mouse = CartCandidate {
//!     id: "p1".to_string(),
//!     name: "Wireless Mouse".to_string(),
//!     price: Money::from_cents(1000),
//!     image: String::new(),
//!     stock: 2,
//! };
//!
//! cart.add_item(&mouse);
//! cart.add_item(&mouse);
//! cart.add_item(&mouse); // stock is 2: silently capped
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::MockDirectory;
pub use cart::{Cart, CartChange, CartSnapshot, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storefront name shown in the navigation bar and CLI banners.
pub const STORE_NAME: &str = "Bouticlick";

/// Prefix of customer-facing order numbers (`ORD-001`).
pub const ORDER_NUMBER_PREFIX: &str = "ORD-";
