//! # Order Commands
//!
//! Checkout and the "My Orders" page.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout                                             │
//! │                                                                         │
//! │  signed in? ──no──► UNAUTHORIZED                                       │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  cart empty? ──yes──► CART_ERROR                                       │
//! │       │no                                                               │
//! │       ▼                                                                 │
//! │  mint ORD-nnnnnn ──► OrderHistory::confirm (front, "processing")       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::clear ──► subscribers see an empty cart                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CheckoutResponse { order, message }                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! No payment is taken.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use bouticlick_core::{CoreError, Order};

use crate::error::ApiError;
use crate::state::{AuthStore, CartStore, OrderHistory};

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CheckoutResponse {
    pub order: Order,
    /// Confirmation text shown to the shopper.
    pub message: String,
}

/// The order history page.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Places an order for everything in the cart.
///
/// ## Returns
/// * `Ok(CheckoutResponse)` - the confirmed order; the cart is now empty
/// * `Err(ApiError)` - `UNAUTHORIZED` when signed out, `CART_ERROR` when the
///   cart is empty; nothing changes in either case
pub fn checkout(
    auth: &AuthStore,
    cart: &CartStore,
    orders: &OrderHistory,
) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let user = auth
        .current_user()
        .ok_or_else(|| CoreError::not_authenticated("check out"))?;

    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let number = orders.next_order_number();
    let order = orders.confirm(
        number,
        snapshot.order_lines(),
        snapshot.total,
        Utc::now().date_naive(),
    );
    cart.clear();

    info!(
        user_id = %user.id,
        number = %order.number,
        items = snapshot.item_count,
        "Checkout complete"
    );

    let message = format!(
        "Thank you, {}! Your order #{} has been placed successfully.",
        user.name, order.number
    );
    Ok(CheckoutResponse { order, message })
}

/// Lists the signed-in user's orders, newest first.
pub fn list_orders(auth: &AuthStore, orders: &OrderHistory) -> Result<OrdersResponse, ApiError> {
    debug!("list_orders command");

    require_sign_in(auth, "view your orders")?;
    Ok(OrdersResponse {
        orders: orders.orders(),
    })
}

/// Gets one order by its number (e.g. `ORD-001`).
pub fn get_order(auth: &AuthStore, orders: &OrderHistory, number: &str) -> Result<Order, ApiError> {
    debug!(number = %number, "get_order command");

    require_sign_in(auth, "view your orders")?;
    let number = number.trim().to_uppercase();
    orders
        .find(&number)
        .ok_or_else(|| CoreError::OrderNotFound(number).into())
}

fn require_sign_in(auth: &AuthStore, action: &str) -> Result<(), ApiError> {
    match auth.current_user() {
        Some(_) => Ok(()),
        None => Err(CoreError::not_authenticated(action).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bouticlick_core::{CartCandidate, Money, OrderStatus};

    fn mouse() -> CartCandidate {
        CartCandidate {
            id: "p4".to_string(),
            name: "Wireless Mouse".to_string(),
            price: Money::from_cents(3999),
            image: String::new(),
            stock: 25,
        }
    }

    fn signed_in() -> AuthStore {
        let auth = AuthStore::new();
        auth.login("user@example.com", "user").unwrap();
        auth
    }

    #[test]
    fn test_checkout_requires_sign_in() {
        let (auth, cart, orders) = (AuthStore::new(), CartStore::new(), OrderHistory::with_mock_orders());
        cart.add_item(&mouse());

        let err = checkout(&auth, &cart, &orders).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let (auth, cart, orders) = (signed_in(), CartStore::new(), OrderHistory::new());
        let err = checkout(&auth, &cart, &orders).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_checkout_places_order_and_clears_cart() {
        let (auth, cart, orders) = (signed_in(), CartStore::new(), OrderHistory::with_mock_orders());
        cart.add_item(&mouse());
        cart.add_item(&mouse());

        let confirmation = checkout(&auth, &cart, &orders).unwrap();
        let order = &confirmation.order;

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total, Money::from_cents(7998));
        assert_eq!(order.items[0].quantity, 2);
        assert!(confirmation.message.contains(&order.number));
        assert!(cart.snapshot().is_empty());

        let listed = list_orders(&auth, &orders).unwrap().orders;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].number, order.number);
    }

    #[test]
    fn test_get_order() {
        let (auth, orders) = (signed_in(), OrderHistory::with_mock_orders());
        assert_eq!(get_order(&auth, &orders, "ord-002").unwrap().items.len(), 2);
        assert_eq!(
            get_order(&auth, &orders, "ORD-777").unwrap_err().code,
            ErrorCode::NotFound
        );

        auth.logout();
        assert_eq!(
            get_order(&auth, &orders, "ORD-001").unwrap_err().code,
            ErrorCode::Unauthorized
        );
    }
}
