//! # Cart State
//!
//! The single observable cart store shared by every storefront view.
//!
//! ## Thread Safety
//! The cart sits behind a `Mutex` because:
//! 1. Every view (navbar badge, product cards, cart page) holds the same store
//! 2. Only one operation should modify the cart at a time
//! 3. Listeners must be able to read the store while being notified
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  User Action              Store Method            Reducer               │
//! │  ───────────              ────────────            ───────               │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ──────────► Cart::add_item       │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► Cart::update_quantity│
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► Cart::remove_item    │
//! │                                                                         │
//! │  Checkout ───────────────► clear() ─────────────► Cart::clear          │
//! │                                                                         │
//! │  After every mutation (lock already released):                          │
//! │    1. save snapshot       (best effort, warn! on failure)               │
//! │    2. publish on watch channel                                          │
//! │    3. notify subscribers  (synchronously, in subscription order)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is meant to be driven from one thread at a time, the way a UI
//! event loop drives it. Concurrent mutators stay memory safe but may deliver
//! their notifications out of order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use bouticlick_core::{Cart, CartCandidate, CartChange, CartSnapshot, LineItem, Money};
use bouticlick_storage::SnapshotStore;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::observers::{Subscribers, SubscriptionId};

type CartPersistence = Box<dyn SnapshotStore<Vec<LineItem>>>;

/// Observable, optionally persisted cart.
pub struct CartStore {
    cart: Mutex<Cart>,
    persistence: Option<CartPersistence>,
    subscribers: Subscribers<CartSnapshot>,
    feed: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates an empty cart that is never saved.
    pub fn new() -> Self {
        Self::from_parts(Cart::new(), None)
    }

    /// Creates a cart backed by `slot`, restoring whatever it holds.
    ///
    /// Malformed or inconsistent saved items are repaired or dropped by
    /// [`Cart::from_items`]; a missing or unreadable snapshot gives an
    /// empty cart.
    pub fn with_persistence(slot: impl SnapshotStore<Vec<LineItem>> + 'static) -> Self {
        let cart = match slot.load() {
            Some(items) => {
                let saved = items.len();
                let cart = Cart::from_items(items);
                if cart.len() != saved {
                    warn!(
                        saved = saved,
                        kept = cart.len(),
                        "Dropped invalid line items from saved cart"
                    );
                }
                info!(items = cart.len(), "Restored saved cart");
                cart
            }
            None => Cart::new(),
        };

        Self::from_parts(cart, Some(Box::new(slot)))
    }

    fn from_parts(cart: Cart, persistence: Option<CartPersistence>) -> Self {
        let (feed, _) = watch::channel(cart.snapshot());
        CartStore {
            cart: Mutex::new(cart),
            persistence,
            subscribers: Subscribers::new(),
            feed,
        }
    }

    // Reducer calls leave the cart valid even if a later step panics.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `candidate` (see [`Cart::add_item`]).
    pub fn add_item(&self, candidate: &CartCandidate) -> CartChange {
        self.apply("add_item", |cart| cart.add_item(candidate))
    }

    /// Removes the line item for `id`. Unknown ids are a no-op.
    pub fn remove_item(&self, id: &str) -> CartChange {
        self.apply("remove_item", |cart| cart.remove_item(id))
    }

    /// Sets the quantity of `id`; `quantity <= 0` removes it.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> CartChange {
        self.apply("update_quantity", |cart| cart.update_quantity(id, quantity))
    }

    /// Empties the cart.
    pub fn clear(&self) -> CartChange {
        self.apply("clear", Cart::clear)
    }

    fn apply(&self, op: &'static str, reduce: impl FnOnce(&mut Cart) -> CartChange) -> CartChange {
        let (change, snapshot) = {
            let mut cart = self.lock();
            let change = reduce(&mut cart);
            (change, cart.snapshot())
        };

        debug!(
            op = op,
            change = ?change,
            item_count = snapshot.item_count,
            total = %snapshot.total,
            "Cart updated"
        );

        self.persist(&snapshot);
        // Publish before notifying so a listener that mutates the store
        // leaves its own snapshot as the latest value.
        self.feed.send_replace(snapshot.clone());
        self.subscribers.notify(&snapshot);

        change
    }

    fn persist(&self, snapshot: &CartSnapshot) {
        if let Some(slot) = &self.persistence {
            if let Err(e) = slot.save(&snapshot.items) {
                warn!(error = %e, "Failed to save cart; keeping in-memory state");
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current state with freshly derived count and total.
    pub fn snapshot(&self) -> CartSnapshot {
        self.lock().snapshot()
    }

    /// Sum of quantities (the navbar badge).
    pub fn item_count(&self) -> i64 {
        self.lock().item_count()
    }

    pub fn total(&self) -> Money {
        self.lock().total()
    }

    /// Executes a read-only function with the cart.
    ///
    /// Do not call back into the store from `f`; the lock is held.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Registers `listener` to receive every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartSnapshot) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Channel form of [`CartStore::subscribe`] for async consumers.
    ///
    /// The receiver starts at the current snapshot and only ever sees the
    /// latest value.
    pub fn watch(&self) -> watch::Receiver<CartSnapshot> {
        self.feed.subscribe()
    }

    /// Whether mutations are being saved.
    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.lock())
            .field("persistent", &self.is_persistent())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn candidate(id: &str, cents: i64, stock: i64) -> CartCandidate {
        CartCandidate {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(cents),
            image: String::new(),
            stock,
        }
    }

    #[test]
    fn test_notifies_with_new_state() {
        let store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |snap: &CartSnapshot| {
            sink.lock().unwrap().push((snap.item_count, snap.total));
        });

        store.add_item(&candidate("a", 1000, 3));
        store.add_item(&candidate("a", 1000, 3));
        store.update_quantity("a", 10);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (1, Money::from_cents(1000)),
                (2, Money::from_cents(2000)),
                (3, Money::from_cents(3000)),
            ]
        );
    }

    #[test]
    fn test_no_op_still_notifies() {
        let store = CartStore::new();
        let calls = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert_eq!(store.remove_item("missing"), CartChange::Unchanged);
        assert_eq!(store.clear(), CartChange::Cleared);
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = Arc::new(CartStore::new());
        let observed = Arc::new(Mutex::new(None));

        let (inner, sink) = (Arc::clone(&store), Arc::clone(&observed));
        store.subscribe(move |_| {
            *sink.lock().unwrap() = Some(inner.item_count());
        });

        store.add_item(&candidate("a", 500, 2));
        assert_eq!(*observed.lock().unwrap(), Some(1));
    }

    #[test]
    fn test_unsubscribed_listener_is_silent() {
        let store = CartStore::new();
        let calls = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);
        store.add_item(&candidate("a", 500, 2));
        assert!(store.unsubscribe(id));
        store.add_item(&candidate("a", 500, 2));

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_with_cart_reads_items() {
        let store = CartStore::new();
        store.add_item(&candidate("a", 500, 2));
        store.add_item(&candidate("b", 250, 1));

        let ids: Vec<String> = store.with_cart(|cart| cart.items().iter().map(|i| i.id.clone()).collect());
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.total(), Money::from_cents(750));
        assert!(!store.is_persistent());
    }
}
