//! # Product Commands
//!
//! Commands for browsing the catalog.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Browse Flow                                  │
//! │                                                                         │
//! │  bouticlick products --category electronics --search wireless          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::search("wireless")   (everything if omitted)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  keep category == "electronics" (case-insensitive), price <= max       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto>  ──► product cards: price, stars, "Out of Stock"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use bouticlick_core::validation::validate_product_id;
use bouticlick_core::{CoreError, Money, Product};

use crate::error::ApiError;
use crate::state::Catalog;

/// Product card data for the frontend.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub rating: f32,
    /// Filled stars on the card.
    pub full_stars: u8,
    pub stock: i64,
    pub category: String,
    /// Whether "Add to Cart" is enabled.
    pub in_stock: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            image: p.image.clone(),
            rating: p.rating,
            full_stars: p.full_stars(),
            stock: p.stock,
            category: p.category.clone(),
            in_stock: p.in_stock(),
        }
    }
}

/// Lists catalog products, optionally narrowed by category, search text
/// and a price ceiling (inclusive).
pub fn list_products(
    catalog: &Catalog,
    category: Option<&str>,
    query: Option<&str>,
    max_price: Option<Money>,
) -> Vec<ProductDto> {
    debug!(category = ?category, query = ?query, max_price = ?max_price, "list_products command");

    catalog
        .search(query.unwrap_or_default())
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category.eq_ignore_ascii_case(c)))
        .filter(|p| max_price.map_or(true, |max| p.price <= max))
        .map(ProductDto::from)
        .collect()
}

/// Gets one product by id.
///
/// ## Returns
/// * `Ok(ProductDto)` - Product found
/// * `Err(ApiError)` - `VALIDATION_ERROR` for a malformed id, `NOT_FOUND`
///   otherwise
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    let id = validate_product_id(product_id).map_err(CoreError::from)?;
    catalog
        .get(&id)
        .map(ProductDto::from)
        .ok_or_else(|| CoreError::ProductNotFound(id).into())
}

/// Distinct category names for the filter bar.
pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    debug!("list_categories command");
    catalog.categories().into_iter().map(str::to_string).collect()
}
