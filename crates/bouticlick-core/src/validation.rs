//! # Validation Module
//!
//! Input validation for the few places where the storefront accepts free
//! text: registration, sign-in and product lookups.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form fields (web UI / CLI arguments)                         │
//! │  ├── Required fields, basic shape                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trimmed, length-bounded, typed errors                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart reducer                                                 │
//! │  └── Never rejects; clamps quantities instead                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bouticlick_core::validation::{validate_email, validate_display_name};
//!
//! assert!(validate_email("user@example.com").is_ok());
//! assert!(validate_display_name("").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates a display name for registration.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_display_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(name.to_string())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with something on both sides
/// - The domain part contains a `.` that is not its first or last character
/// - No whitespace, at most 254 characters
///
/// ## Returns
/// The trimmed, lowercased address.
///
/// ## Example
/// ```rust
/// use bouticlick_core::validation::validate_email;
///
/// assert_eq!(validate_email(" User@Example.com ").unwrap(), "user@example.com");
/// assert!(validate_email("no-at-sign").is_err());
/// assert!(validate_email("a@b").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.find('.') {
        Some(dot) if dot > 0 && !domain.ends_with('.') => {}
        _ => return Err(invalid()),
    }

    Ok(email.to_lowercase())
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - At most 128 characters
///
/// The mock directory's demo accounts use four- and five-letter passwords,
/// so no minimum length beyond "non-empty" is imposed.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() > 128 {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: 128,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product id typed by the user.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 64 characters
/// - Letters, digits, `-` and `_` only
///
/// ## Returns
/// The trimmed id.
pub fn validate_product_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(id.to_string())
}

/// Highest accepted unit price: $100,000,000.00.
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Highest accepted stock level for one product.
pub const MAX_STOCK: i64 = 1_000_000;

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_PRICE_CENTS`], so a line total fits in an `i64`
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a stock level: `0..=MAX_STOCK`.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
