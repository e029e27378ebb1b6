//! # Store Error Type
//!
//! Unified error type for store operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vela POS                       │
//! │                                                                 │
//! │  Operation                                                      │
//! │     │                                                           │
//! │     ├── permission gate false ──► AccessDenied ───────┐         │
//! │     │                                                 │         │
//! │     ├── CoreError (validation, ──► mapped ErrorCode ──┤         │
//! │     │   stock, empty cart, ...)                       ▼         │
//! │     │                                      StoreError {code,    │
//! │     └── success ────────────────────────►  message} serialized  │
//! │                                            for the renderer     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The renderer receives both a machine-readable `code` (for choosing a
//! toast vs. an inline form error) and a human-readable `message`.

use serde::Serialize;
use vela_core::CoreError;

use crate::session::Permission;

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable error codes for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item, cart line, or transaction lookup failed.
    NotFound,

    /// Input validation failed (empty field, negative number).
    ValidationError,

    /// Requested cart quantity exceeds available stock.
    InsufficientStock,

    /// Checkout attempted with an empty cart.
    EmptyCart,

    /// The session lacks the permission for this operation.
    AccessDenied,
}

// =============================================================================
// Store Error
// =============================================================================

/// Error returned from store operations.
///
/// ## Serialization
/// ```json
/// { "code": "ACCESS_DENIED",
///   "message": "Access denied: missing permission Delete_Item" }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// The distinct access-denied outcome the permission gate produces,
    /// independent of whether the input was otherwise valid.
    pub fn access_denied(permission: Permission) -> Self {
        StoreError::new(
            ErrorCode::AccessDenied,
            format!("Access denied: missing permission {permission}"),
        )
    }
}

/// Converts core errors to store errors, preserving the error kind.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_)
            | CoreError::LineNotFound { .. }
            | CoreError::TransactionNotFound(_) => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        StoreError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: StoreError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Cart is empty");

        let err: StoreError = CoreError::ItemNotFound(7).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: StoreError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = StoreError::access_denied(Permission::DeleteItem);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "ACCESS_DENIED");
        assert_eq!(
            json["message"],
            "Access denied: missing permission Delete_Item"
        );
    }
}
