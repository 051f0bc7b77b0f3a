//! # Catalog
//!
//! The product list browsed by the storefront. Read-only after construction.

use std::collections::HashSet;

use bouticlick_core::validation::{validate_price_cents, validate_product_id, validate_stock};
use bouticlick_core::{CoreResult, Money, Product, ValidationError};

/// Products in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Builds a catalog from untrusted input, such as a catalog file.
    ///
    /// Every product needs a well-formed unique id, a price within
    /// `0..=MAX_PRICE_CENTS` and stock within `0..=MAX_STOCK`.
    pub fn try_new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for p in &products {
            let id = validate_product_id(&p.id)?;
            if id != p.id {
                return Err(ValidationError::InvalidFormat {
                    field: "product id".to_string(),
                    reason: format!("{:?} has surrounding whitespace", p.id),
                }
                .into());
            }
            validate_price_cents(p.price.cents())?;
            validate_stock(p.stock)?;
            if !seen.insert(p.id.as_str()) {
                return Err(ValidationError::InvalidFormat {
                    field: "product id".to_string(),
                    reason: format!("{} appears more than once", p.id),
                }
                .into());
            }
        }
        Ok(Catalog::new(products))
    }

    /// The demo catalog: the products from the demo orders plus a few more,
    /// one of them sold out.
    pub fn demo() -> Self {
        Catalog::new(vec![
            product("p1", "Wireless Bluetooth Headphones", 7999, 4.5, 15, "Electronics"),
            product("p2", "Smartphone Case", 2499, 4.2, 50, "Accessories"),
            product("p3", "Mechanical Keyboard", 12999, 4.8, 8, "Electronics"),
            product("p4", "Wireless Mouse", 3999, 4.4, 25, "Electronics"),
            product("p5", "USB-C Charging Cable", 1299, 4.0, 0, "Accessories"),
            product("p6", "Laptop Stand", 4999, 4.6, 2, "Accessories"),
            product("p7", "Smart Watch", 19999, 4.3, 5, "Wearables"),
        ])
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Products whose category matches `category`, ignoring case.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Case-insensitive substring search over name and category.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product(id: &str, name: &str, cents: i64, rating: f32, stock: i64, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_cents(cents),
        image: format!("https://images.bouticlick.example/products/{}.jpg", id),
        rating,
        stock,
        category: category.to_string(),
    }
}
