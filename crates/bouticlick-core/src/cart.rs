//! # Cart Reducer
//!
//! The shopping cart as a pure reducer over five operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(candidate)                                                    │
//! │    ├── id present?  quantity += 1, capped at the item's stock           │
//! │    └── id absent?   push { quantity: 1 }   (ignored when stock < 1)     │
//! │                                                                         │
//! │  update_quantity(id, n)                                                 │
//! │    ├── n <= 0       same as remove_item(id)                             │
//! │    └── n >= 1       quantity = clamp(n, 1, stock)                       │
//! │                                                                         │
//! │  remove_item(id)    retain everything else (order preserved)            │
//! │  clear()            items = []                                          │
//! │                                                                         │
//! │  item_count()       Σ quantity          ┐ recomputed from `items`       │
//! │  total()            Σ price × quantity  ┘ on every read                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`; insertion order is display order
//! - `1 <= quantity <= stock` for every item
//! - `0 <= price <= MAX_PRICE_CENTS` and `stock <= MAX_STOCK`, so totals
//!   stay far from `i64` overflow
//! - There are no stored counters, so totals cannot drift from `items`
//!
//! Nothing here returns an error. Unknown ids are no-ops and out-of-range
//! quantities are clamped. Each operation reports a [`CartChange`] so callers
//! can log what happened.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartCandidate, OrderLine};
use crate::validation::{validate_price_cents, validate_stock, MAX_STOCK};

// =============================================================================
// Line Item
// =============================================================================

/// One product in the cart.
///
/// `price` and `stock` are frozen when the item is first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Unit price at time of adding.
    pub price: Money,
    /// Always within `1..=stock`.
    pub quantity: i64,
    /// Maximum allowed quantity, as known at add-time.
    pub stock: i64,
}

impl LineItem {
    fn from_candidate(candidate: &CartCandidate) -> Self {
        LineItem {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            image: candidate.image.clone(),
            price: candidate.price,
            quantity: 1,
            stock: candidate.stock,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Frozen copy for an order.
    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Change Report
// =============================================================================

/// What a reducer call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CartChange {
    /// A new line item was appended.
    Added,
    /// An existing line item went up by one.
    Incremented,
    /// The requested quantity exceeded stock and was capped.
    Clamped,
    /// Quantity set exactly as requested.
    Updated,
    Removed,
    Cleared,
    /// Unknown id, or a new candidate with no stock.
    Unchanged,
}

// =============================================================================
// Cart
// =============================================================================

/// The cart reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from an untrusted snapshot, restoring every invariant.
    ///
    /// ## Repairs
    /// - items with `stock < 1` or `quantity < 1` are dropped
    /// - items whose price or stock is out of range are dropped
    /// - `quantity` above `stock` is capped to `stock`
    /// - a repeated `id` keeps its first occurrence
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Cart::new();
        for mut item in items {
            if item.stock < 1 || item.quantity < 1 {
                continue;
            }
            if validate_price_cents(item.price.cents()).is_err()
                || validate_stock(item.stock).is_err()
            {
                continue;
            }
            if cart.get(&item.id).is_some() {
                continue;
            }
            item.quantity = item.quantity.min(item.stock);
            cart.items.push(item);
        }
        cart
    }

    /// Adds one unit of `candidate`.
    ///
    /// ## Behavior
    /// - Already in cart: quantity goes up by one unless it already equals the
    ///   item's recorded stock, in which case nothing changes (`Clamped`)
    /// - Not in cart: appended with quantity 1
    /// - Not in cart and `candidate.stock < 1`: ignored (`Unchanged`)
    /// - Not in cart with a negative or out-of-range price: ignored
    ///   (`Unchanged`); recorded stock is capped at [`MAX_STOCK`]
    ///
    /// Exhausted stock is never reported as an error.
    pub fn add_item(&mut self, candidate: &CartCandidate) -> CartChange {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == candidate.id) {
            if item.quantity < item.stock {
                item.quantity += 1;
                return CartChange::Incremented;
            }
            return CartChange::Clamped;
        }

        if candidate.stock < 1 || validate_price_cents(candidate.price.cents()).is_err() {
            return CartChange::Unchanged;
        }

        let mut item = LineItem::from_candidate(candidate);
        item.stock = item.stock.min(MAX_STOCK);
        self.items.push(item);
        CartChange::Added
    }

    /// Removes the item with `id`. No-op when absent.
    pub fn remove_item(&mut self, id: &str) -> CartChange {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == before {
            CartChange::Unchanged
        } else {
            CartChange::Removed
        }
    }

    /// Sets the quantity of `id`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - otherwise clamped to `1..=stock`
    /// - unknown id: no-op
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                let clamped = quantity.min(item.stock).max(1);
                item.quantity = clamped;
                if clamped < quantity {
                    CartChange::Clamped
                } else {
                    CartChange::Updated
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> CartChange {
        self.items.clear();
        CartChange::Cleared
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by product id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Sum of quantities (the navbar badge).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Immutable view handed to consumers.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The cart state as emitted to consumers after every mutation.
///
/// `item_count` and `total` are computed from `items` when the snapshot is
/// taken; a snapshot is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub item_count: i64,
    pub total: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines for an order placed from this snapshot.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items.iter().map(LineItem::to_order_line).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, price_cents: i64, stock: i64) -> CartCandidate {
        CartCandidate {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            image: format!("https://img.example/{}.jpg", id),
            stock,
        }
    }

    fn assert_totals_consistent(cart: &Cart) {
        let count: i64 = cart.items().iter().map(|i| i.quantity).sum();
        let total: i64 = cart
            .items()
            .iter()
            .map(|i| i.price.cents() * i.quantity)
            .sum();
        assert_eq!(cart.item_count(), count);
        assert_eq!(cart.total().cents(), total);
        for item in cart.items() {
            assert!(item.quantity >= 1 && item.quantity <= item.stock);
        }
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.snapshot(), CartSnapshot::default());
    }

    #[test]
    fn test_add_twice_then_clamp_at_stock() {
        let mut cart = Cart::new();
        let p1 = candidate("p1", 1000, 2);

        assert_eq!(cart.add_item(&p1), CartChange::Added);
        assert_eq!(cart.add_item(&p1), CartChange::Incremented);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2000));

        assert_eq!(cart.add_item(&p1), CartChange::Clamped);
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_repeated_adds_never_exceed_stock() {
        for stock in 1..=6 {
            let mut cart = Cart::new();
            let item = candidate("p1", 250, stock);
            for _ in 0..20 {
                cart.add_item(&item);
                assert!(cart.get("p1").unwrap().quantity <= stock);
                assert_totals_consistent(&cart);
            }
            assert_eq!(cart.get("p1").unwrap().quantity, stock);
        }
    }

    #[test]
    fn test_add_uses_recorded_stock_not_candidate_stock() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 100, 1));
        // A later candidate claiming more stock does not lift the cap.
        assert_eq!(cart.add_item(&candidate("p1", 100, 50)), CartChange::Clamped);
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_out_of_stock_new_item_is_ignored() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(&candidate("p1", 100, 0)), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_to_stock() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 500, 5));

        assert_eq!(cart.update_quantity("p1", 10), CartChange::Clamped);
        assert_eq!(cart.get("p1").unwrap().quantity, 5);
        assert_eq!(cart.total(), Money::from_cents(2500));

        assert_eq!(cart.update_quantity("p1", 3), CartChange::Updated);
        assert_eq!(cart.get("p1").unwrap().quantity, 3);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut updated = Cart::new();
        let mut removed = Cart::new();
        for cart in [&mut updated, &mut removed] {
            cart.add_item(&candidate("p1", 100, 3));
            cart.add_item(&candidate("p2", 200, 3));
        }

        assert_eq!(updated.update_quantity("p1", 0), CartChange::Removed);
        assert_eq!(removed.remove_item("p1"), CartChange::Removed);
        assert_eq!(updated, removed);

        assert_eq!(updated.update_quantity("p2", -4), CartChange::Removed);
        assert!(updated.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 100, 3));
        let before = cart.clone();

        assert_eq!(cart.update_quantity("nope", 2), CartChange::Unchanged);
        assert_eq!(cart.update_quantity("nope", 0), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent_and_preserves_order() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 100, 3));
        cart.add_item(&candidate("p2", 200, 3));
        cart.add_item(&candidate("p3", 300, 3));

        assert_eq!(cart.remove_item("p1"), CartChange::Removed);
        let after_first = cart.clone();
        assert_eq!(cart.remove_item("p1"), CartChange::Unchanged);
        assert_eq!(cart, after_first);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 100, 3));

        cart.clear();
        assert!(cart.items().is_empty());
        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_mixed_sequence_keeps_totals_consistent() {
        let mut cart = Cart::new();
        let a = candidate("a", 7999, 3);
        let b = candidate("b", 2499, 10);

        cart.add_item(&a);
        assert_totals_consistent(&cart);
        cart.add_item(&b);
        cart.add_item(&b);
        assert_totals_consistent(&cart);
        cart.update_quantity("b", 7);
        assert_totals_consistent(&cart);
        cart.add_item(&a);
        cart.remove_item("zzz");
        assert_totals_consistent(&cart);

        assert_eq!(cart.item_count(), 9);
        assert_eq!(cart.total(), Money::from_cents(7999 * 2 + 2499 * 7));
    }

    #[test]
    fn test_from_items_repairs_invariants() {
        let item = |id: &str, cents: i64, quantity: i64, stock: i64| LineItem {
            id: id.to_string(),
            name: id.to_string(),
            image: String::new(),
            price: Money::from_cents(cents),
            quantity,
            stock,
        };

        let cart = Cart::from_items(vec![
            item("a", 100, 9, 4),                // capped to 4
            item("b", 100, 0, 4),                // dropped
            item("c", 100, 1, 0),                // dropped
            item("a", 100, 1, 10),               // duplicate, dropped
            item("neg", -500, 2, 5),             // negative price, dropped
            item("big", i64::MAX / 2, 3, 5),     // price out of range, dropped
            item("deep", 100, 1, MAX_STOCK + 1), // stock out of range, dropped
            item("d", 100, 2, 2),
        ]);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(cart.get("a").unwrap().quantity, 4);
        assert_eq!(cart.total(), Money::from_cents(600));
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_from_items_huge_price_does_not_overflow() {
        let cart = Cart::from_items(vec![LineItem {
            id: "big".to_string(),
            name: "Big".to_string(),
            image: String::new(),
            price: Money::from_cents(i64::MAX / 2),
            quantity: 3,
            stock: 5,
        }]);

        assert!(cart.is_empty());
        assert_eq!(cart.snapshot().total, Money::zero());
    }

    #[test]
    fn test_add_out_of_range_price_is_ignored() {
        let mut cart = Cart::new();
        let big = candidate("big", i64::MAX / 2 + 1, 3);

        assert_eq!(cart.add_item(&big), CartChange::Unchanged);
        assert_eq!(cart.add_item(&big), CartChange::Unchanged);
        assert_eq!(cart.add_item(&candidate("neg", -1, 3)), CartChange::Unchanged);

        let snapshot = cart.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total, Money::zero());
    }

    #[test]
    fn test_add_caps_recorded_stock() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 100, i64::MAX));
        assert_eq!(cart.get("p1").unwrap().stock, MAX_STOCK);

        cart.update_quantity("p1", i64::MAX);
        assert_eq!(cart.item_count(), MAX_STOCK);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 1000, 2));

        let json = serde_json::to_value(cart.snapshot()).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 1000);
        assert_eq!(json["items"][0]["id"], "p1");
        assert_eq!(json["items"][0]["quantity"], 1);
    }

    #[test]
    fn test_snapshot_order_lines() {
        let mut cart = Cart::new();
        cart.add_item(&candidate("p1", 2499, 5));
        cart.update_quantity("p1", 2);

        let lines = cart.snapshot().order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total(), Money::from_cents(4998));
    }
}
