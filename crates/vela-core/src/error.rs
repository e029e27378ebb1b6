//! # Error Types
//!
//! Domain-specific error types for vela-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  vela-core errors (this file)                                   │
//! │  ├── CoreError        - Business rule violations                │
//! │  └── ValidationError  - Input validation failures               │
//! │                                                                 │
//! │  vela-store errors (separate crate)                             │
//! │  └── StoreError       - What the renderer sees (serialized),    │
//! │                         adds AccessDenied from the permission   │
//! │                         gate                                    │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → StoreError → Renderer      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, stock counts, ...)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable: the failing operation leaves all
//!    state unchanged and the user can simply retry

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or failed lookups.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog item with the given id.
    ///
    /// ## When This Occurs
    /// - A renderer passes a stale item id after a delete
    /// - A cart line references an item removed from the catalog
    ///   between add-to-cart and checkout
    #[error("Item not found: {0}")]
    ItemNotFound(u32),

    /// A positional cart index is out of range.
    ///
    /// Cart lines are addressed by their current position, so any index
    /// captured before a removal may be stale. Stale indices fail here
    /// instead of touching the wrong line.
    #[error("No cart line at index {index} (cart has {len} lines)")]
    LineNotFound { index: usize, len: usize },

    /// Requested cart quantity exceeds the item's current stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "+" on cart line (qty: 10)
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Laptop", available: 10, requested: 11 }
    ///      │
    ///      ▼
    /// UI shows: "Not enough stock available"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// No ledger entry with the given transaction id.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value could not be parsed as a number.
    #[error("{field} is not a valid number")]
    NotANumber { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Laptop".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Laptop: available 3, requested 5"
        );

        let err = CoreError::LineNotFound { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No cart line at index 4 (cart has 2 lines)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
