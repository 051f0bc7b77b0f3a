//! End-to-end shopping flows over `AppState` and the command layer.

use std::sync::{Arc, Mutex};

use bouticlick_core::{Money, OrderStatus, Role};
use bouticlick_storage::{KeyValueStore, LocalStorage, MemoryStore, USER_KEY};
use bouticlick_storefront::commands::{auth, cart, orders, product};
use bouticlick_storefront::error::ErrorCode;
use bouticlick_storefront::state::{AppConfig, AppState, AuthState};

fn state_on(storage: &LocalStorage) -> AppState {
    AppState::with_storage(AppConfig::ephemeral(), storage)
}

#[test]
fn browse_add_checkout() {
    let state = AppState::in_memory();

    let electronics = product::list_products(&state.catalog, Some("Electronics"), None, None);
    assert!(electronics.iter().all(|p| p.category == "Electronics"));

    cart::add_to_cart(&state.catalog, &state.cart, "p1").unwrap();
    cart::add_to_cart(&state.catalog, &state.cart, "p2").unwrap();
    cart::update_cart_item(&state.cart, "p2", 2);
    let cart_view = cart::get_cart(&state.cart);
    assert_eq!(cart_view.item_count, 3);
    assert_eq!(cart_view.total, Money::from_cents(7999 + 2 * 2499));

    auth::login(&state.auth, "user@example.com", "user").unwrap();
    let confirmation = orders::checkout(&state.auth, &state.cart, &state.orders).unwrap();

    assert_eq!(confirmation.order.total, Money::from_cents(12997));
    assert_eq!(confirmation.order.status, OrderStatus::Processing);
    assert_eq!(confirmation.order.items.len(), 2);
    assert!(cart::get_cart(&state.cart).items.is_empty());

    let history = orders::list_orders(&state.auth, &state.orders).unwrap();
    assert_eq!(history.orders[0].number, confirmation.order.number);
    assert_eq!(history.orders[1].number, "ORD-001");
}

#[test]
fn checkout_notifies_cart_observers_with_empty_cart() {
    let state = AppState::in_memory();
    let counts = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&counts);
    state
        .cart
        .subscribe(move |snap| sink.lock().unwrap().push(snap.item_count));

    cart::add_to_cart(&state.catalog, &state.cart, "p4").unwrap();
    auth::login(&state.auth, "admin@example.com", "admin").unwrap();
    orders::checkout(&state.auth, &state.cart, &state.orders).unwrap();

    assert_eq!(*counts.lock().unwrap(), vec![1, 0]);
}

#[test]
fn session_and_cart_restored_on_next_launch() {
    let storage = LocalStorage::in_memory();

    {
        let state = state_on(&storage);
        auth::login(&state.auth, "admin@example.com", "admin").unwrap();
        cart::add_to_cart(&state.catalog, &state.cart, "p3").unwrap();
    }

    let state = state_on(&storage);
    assert!(!state.auth.is_loading());
    let user = state.auth.current_user().unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(state.cart.item_count(), 1);

    auth::logout(&state.auth);
    assert!(storage.store().get(USER_KEY).unwrap().is_none());
    // Signing out does not empty the cart.
    assert_eq!(state_on(&storage).cart.item_count(), 1);
}

#[test]
fn malformed_saved_session_is_signed_out() {
    let store = Arc::new(MemoryStore::new());
    store.set(USER_KEY, "not json").unwrap();
    let storage = LocalStorage::from_store(store);

    let state = state_on(&storage);
    assert!(state.auth.current_user().is_none());
    assert!(!state.auth.is_loading());
}

#[test]
fn auth_observers_see_login_and_logout() {
    let state = AppState::in_memory();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let id = state.auth.subscribe(move |s: &AuthState| {
        sink.lock().unwrap().push(s.user.as_ref().map(|u| u.is_admin()));
    });

    auth::login(&state.auth, "admin@example.com", "admin").unwrap();
    assert!(auth::login(&state.auth, "admin@example.com", "nope").is_err());
    auth::logout(&state.auth);
    assert!(state.auth.unsubscribe(id));
    auth::login(&state.auth, "user@example.com", "user").unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Some(true), None]);
}

#[test]
fn signed_out_checkout_keeps_cart() {
    let state = AppState::in_memory();
    cart::add_to_cart(&state.catalog, &state.cart, "p7").unwrap();

    let err = orders::checkout(&state.auth, &state.cart, &state.orders).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthorized);
    assert_eq!(state.cart.item_count(), 1);
    assert_eq!(state.orders.len(), 2);
}

#[test]
fn stock_limits_hold_across_commands() {
    let state = AppState::in_memory();

    for _ in 0..5 {
        cart::add_to_cart(&state.catalog, &state.cart, "p6").unwrap();
    }
    assert_eq!(state.cart.item_count(), 2);

    cart::update_cart_item(&state.cart, "p6", 50);
    assert_eq!(state.cart.item_count(), 2);

    let sold_out = cart::add_to_cart(&state.catalog, &state.cart, "p5").unwrap();
    assert_eq!(sold_out.item_count, 2);
}
