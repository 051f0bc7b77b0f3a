//! # Domain Types
//!
//! Core domain types used throughout the Bouticlick storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id, number     │       │
//! │  │  name, image    │   │  email, name    │   │  date, status   │       │
//! │  │  price (Money)  │   │  role           │   │  total (Money)  │       │
//! │  │  stock, rating  │   └─────────────────┘   │  items          │       │
//! │  └────────┬────────┘                         └─────────────────┘       │
//! │           │ to_candidate()                                              │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CartCandidate   │   │      Role       │   │  OrderStatus    │       │
//! │  │  (addItem arg)  │   │  User | Admin   │   │  Processing     │       │
//! │  └─────────────────┘   └─────────────────┘   │  Shipped        │       │
//! │                                              │  Delivered      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart line items live in [`crate::cart`] next to the reducer that owns them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Opaque product identifier.
    pub id: String,

    /// Display name shown on the product card.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Image URL (opaque, not validated).
    pub image: String,

    /// Average review rating, 0.0 - 5.0.
    pub rating: f32,

    /// Units currently available.
    pub stock: i64,

    /// Category label, e.g. "Electronics".
    pub category: String,
}

impl Product {
    /// Whether the "Add to Cart" button should be enabled.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Number of filled stars on the product card (rating rounded down).
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }

    /// Builds the `add_item` argument for this product.
    ///
    /// `stock` is captured now; the cart never re-reads it.
    pub fn to_candidate(&self) -> CartCandidate {
        CartCandidate {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            stock: self.stock,
        }
    }
}

// =============================================================================
// Cart Candidate
// =============================================================================

/// What a product card hands to the cart when "Add to Cart" is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartCandidate {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    /// Maximum quantity the cart may hold for this product.
    pub stock: i64,
}

// =============================================================================
// Identity
// =============================================================================

/// Role of an authenticated identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The currently authenticated identity.
///
/// ## Persisted Shape
/// Stored under the `user` key exactly as:
/// ```json
/// {"id":"1","email":"admin@example.com","name":"Admin User","role":"admin"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    /// Admins see the Admin link in the navigation bar.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Just placed, not shipped yet.
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Capitalised status name.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// One-line explanation shown under the order.
    pub fn description(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Being prepared for shipment",
            OrderStatus::Shipped => "Out for delivery",
            OrderStatus::Delivered => "Successfully delivered",
        }
    }
}

/// One line of a placed order (frozen name and unit price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

impl OrderLine {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    /// Customer-facing number, e.g. `ORD-001`.
    pub number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
    pub items: Vec<OrderLine>,
}

// =============================================================================
// Unit Tests
// =============================================================================
