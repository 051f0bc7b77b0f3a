//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bouticlick                             │
//! │                                                                         │
//! │  Caller                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  bouticlick checkout                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Signed out? ──── CoreError::NotAuthenticated ────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Bad input? ───── CoreError::Validation ──────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  --json:  {"code":"UNAUTHORIZED","message":"You must be signed in..."} │
//! │  default: error: You must be signed in to check out                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail: out-of-stock and unknown ids are
//! silent no-ops. Errors come from lookups, sign-in, checkout and startup.

use bouticlick_core::CoreError;
use bouticlick_storage::StorageError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: p42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or order not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Bad credentials or not signed in
    Unauthorized,

    /// Cart cannot be used for the requested operation
    CartError,

    /// Local storage could not be opened
    StorageError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OrderNotFound(number) => ApiError::not_found("Order", &number),
            CoreError::InvalidCredentials | CoreError::NotAuthenticated { .. } => {
                ApiError::unauthorized(err.to_string())
            }
            CoreError::EmptyCart => ApiError::cart(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts storage errors to API errors.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io { .. } | StorageError::Unavailable(_) => {
                ApiError::new(ErrorCode::StorageError, err.to_string())
            }
            StorageError::Serialization(e) => {
                tracing::error!("Snapshot serialization failed: {}", e);
                ApiError::internal("Could not encode saved state")
            }
            StorageError::LockPoisoned => {
                tracing::error!("Local store lock poisoned");
                ApiError::new(ErrorCode::StorageError, "Local storage is unavailable")
            }
        }
    }
}
