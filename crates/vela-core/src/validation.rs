//! # Validation Module
//!
//! Input validation for catalog mutations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: Renderer / form layer                                 │
//! │  ├── Immediate feedback (empty field, bad number)               │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: THIS MODULE (authoritative)                           │
//! │  ├── Re-checks everything the form claims to have checked       │
//! │  └── An add-item with bad input is a no-op, never a partial add │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deliberately minimal: required-field and non-negative-number checks
//! only. This layer is not an input sanitizer.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// Returns the trimmed name.
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name(" Laptop ").unwrap(), "Laptop");
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates an item category.
///
/// Same rules as [`validate_item_name`]; returns the trimmed category.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(category.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity for a new or edited item.
///
/// ## Rules
/// - Must be zero or greater (zero-stock items are listable, they just
///   cannot be added to a cart)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be zero or greater (free items are allowed)
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_price;
/// use vela_core::Money;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Coffee Beans").unwrap(), "Coffee Beans");
        assert_eq!(validate_item_name("  Desk Lamp  ").unwrap(), "Desk Lamp");

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("Food").unwrap(), "Food");
        assert!(validate_category(" ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }
}
