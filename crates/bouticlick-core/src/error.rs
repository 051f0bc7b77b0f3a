//! # Error Types
//!
//! Domain-specific error types for bouticlick-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bouticlick-core errors (this file)                                    │
//! │  ├── CoreError        - Auth / checkout / lookup failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bouticlick-storage errors (separate crate)                            │
//! │  └── StorageError     - Local store read/write failures                │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  └── ApiError         - What the UI / CLI sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Operations Never Fail
//! The cart reducer has no error type at all. Unknown ids are no-ops and
//! out-of-range quantities are clamped, so nothing in `cart` returns `Result`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Email/password pair is not in the mock directory.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order number is not in the order history.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Operation needs a signed-in user.
    ///
    /// ## When This Occurs
    /// - Checkout while signed out
    /// - Viewing order history while signed out
    #[error("You must be signed in to {action}")]
    NotAuthenticated { action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotAuthenticated error for the given action.
    pub fn not_authenticated(action: impl Into<String>) -> Self {
        CoreError::NotAuthenticated {
            action: action.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., email without `@`, malformed price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            CoreError::not_authenticated("check out").to_string(),
            "You must be signed in to check out"
        );
        assert_eq!(
            CoreError::ProductNotFound("p9".to_string()).to_string(),
            "Product not found: p9"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "name must be at least 2 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
