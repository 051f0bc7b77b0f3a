//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ (signed  │     │ Confirmed│       │
//! │  └──────────┘     └──────────┘     │   in)    │     └──────────┘       │
//! │                        │           └──────────┘           │             │
//! │                   add_to_cart                              │             │
//! │                   update_cart_item                         │             │
//! │                   remove_from_cart                         │             │
//! │                        │                                   │             │
//! │                        ▼                                   ▼             │
//! │                   clear_cart ◄───────────────────── (orders.rs)         │
//! │                                                      back to empty     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of the mutating commands fail on cart contents: stock limits clamp
//! and unknown ids do nothing. `change` in the response says what happened.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use bouticlick_core::validation::validate_product_id;
use bouticlick_core::{CartChange, CartSnapshot, CoreError, LineItem, Money};

use crate::error::ApiError;
use crate::state::{CartStore, Catalog};

/// Cart response including items and derived totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub item_count: i64,
    pub total: Money,
    /// What the command did; absent for reads.
    pub change: Option<CartChange>,
}

impl CartResponse {
    fn new(snapshot: CartSnapshot, change: Option<CartChange>) -> Self {
        CartResponse {
            items: snapshot.items,
            item_count: snapshot.item_count,
            total: snapshot.total,
            change,
        }
    }
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        CartResponse::new(snapshot, None)
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Page                                                              │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Shopping Cart                                     3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Wireless Mouse          [-] 2 [+]  (max 25)     $79.98       │    │
/// │  │  Smartphone Case         [-] 1 [+]  (max 50)     $24.99       │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL                                           $104.97      │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.snapshot())
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity goes up by one, capped at the stock recorded
///   when it was first added
/// - Not in cart: added with quantity 1 and the current catalog price
/// - Out of stock: nothing changes (`change: "unchanged"`)
///
/// ## Returns
/// * `Ok(CartResponse)` - the cart after the change
/// * `Err(ApiError)` - the id is malformed or not in the catalog
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartStore,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let id = validate_product_id(product_id).map_err(CoreError::from)?;
    let product = catalog
        .get(&id)
        .ok_or_else(|| CoreError::ProductNotFound(id.clone()))?;

    let change = cart.add_item(&product.to_candidate());
    Ok(CartResponse::new(cart.snapshot(), Some(change)))
}

/// Sets the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the item
/// - Quantity above stock: capped at stock
/// - Item not in cart: nothing changes
pub fn update_cart_item(cart: &CartStore, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let change = cart.update_quantity(product_id.trim(), quantity);
    CartResponse::new(cart.snapshot(), Some(change))
}

/// Removes an item from the cart.
pub fn remove_from_cart(cart: &CartStore, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    let change = cart.remove_item(product_id.trim());
    CartResponse::new(cart.snapshot(), Some(change))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");

    let change = cart.clear();
    CartResponse::new(cart.snapshot(), Some(change))
}
