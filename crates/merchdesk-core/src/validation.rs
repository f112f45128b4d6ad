//! # Validation Module
//!
//! Input validation utilities for Merchdesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard UI (TypeScript)                                     │
//! │  ├── Basic format checks (empty, non-numeric input)                     │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command surface (Rust, merchdesk-store)                       │
//! │  └── THIS MODULE: business rule validation before any mutation          │
//! │                                                                         │
//! │  Entity methods below the command surface assume validated input and    │
//! │  do not re-validate.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use merchdesk_core::validation::{validate_amount_cents, validate_quantity};
//!
//! // Validate a posting amount before it reaches the ledger
//! validate_amount_cents(120_000).unwrap();
//!
//! // Validate an item quantity before accepting a return
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_RETURN_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a vendor display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use merchdesk_core::validation::validate_vendor_name;
///
/// assert!(validate_vendor_name("Fresh Farms Ltd.").is_ok());
/// assert!(validate_vendor_name("").is_err());
/// ```
pub fn validate_vendor_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a caller-supplied entity id.
///
/// Ids are opaque (the vendor list predates UUID ids), so the only rule is
/// that they are not blank.
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a ledger posting amount in cents.
///
/// ## Rules
/// - Must be positive (> 0); the posting direction comes from its kind,
///   never from a signed amount
pub fn validate_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates an item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items can be returned too)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items on a return.
///
/// ## Rules
/// - At least one item (an empty return is meaningless)
/// - At most MAX_RETURN_ITEMS (50)
pub fn validate_return_items_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if count > MAX_RETURN_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_RETURN_ITEMS as i64,
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
    fn test_validate_vendor_name() {
        assert!(validate_vendor_name("Fresh Farms Ltd.").is_ok());
        assert!(validate_vendor_name("").is_err());
        assert!(validate_vendor_name("   ").is_err());
        assert!(validate_vendor_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_entity_id() {
        assert!(validate_entity_id("1").is_ok());
        assert!(validate_entity_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_entity_id("").is_err());
        assert!(validate_entity_id("  ").is_err());
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents(1).is_ok());
        assert!(validate_amount_cents(500_000).is_ok());
        assert!(validate_amount_cents(0).is_err());
        assert!(validate_amount_cents(-100).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(11272).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_return_items_count() {
        assert!(validate_return_items_count(1).is_ok());
        assert!(validate_return_items_count(50).is_ok());
        assert!(validate_return_items_count(0).is_err());
        assert!(validate_return_items_count(51).is_err());
    }
}
