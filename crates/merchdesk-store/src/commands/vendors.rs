//! # Vendor Commands
//!
//! Vendor CRUD and ledger postings.
//!
//! ## Ledger Posting Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User records a payment of $5,000 against "Fresh Farms Ltd."            │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  add_transaction(&state, "1", { amount: 500000, kind: PAYMENT })        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Validate: amount positive, vendor id non-blank             │    │
//! │  │  2. Lock the ledger, find the vendor                           │    │
//! │  │  3. Prepend the posting, update both balances                  │    │
//! │  │     total_paid += 500000                                       │    │
//! │  │     amount_payable = max(0, amount_payable - 500000)           │    │
//! │  │  4. Return the updated vendor                                  │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Vendor detail page re-renders with the new balances                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::VendorLedgerState;
use merchdesk_core::validation::{validate_amount_cents, validate_entity_id, validate_vendor_name};
use merchdesk_core::{CoreError, PaymentTransaction, Vendor};

/// Lists all vendors in insertion order.
///
/// ## Returns
/// A snapshot of the vendor collection for rendering
pub fn list_vendors(state: &VendorLedgerState) -> Vec<Vendor> {
    debug!("list_vendors command");
    state.with_ledger(|ledger| ledger.vendors().to_vec())
}

/// Gets a single vendor by id.
///
/// ## Arguments
/// * `id` - Vendor id to look up
///
/// ## Returns
/// The vendor, or a NOT_FOUND error
pub fn get_vendor(state: &VendorLedgerState, id: &str) -> Result<Vendor, ApiError> {
    debug!(id = %id, "get_vendor command");

    state.with_ledger(|ledger| {
        ledger
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Vendor", id))
    })
}

/// Adds a vendor.
///
/// ## Behavior
/// The id is caller-supplied and not checked for uniqueness; reusing an id
/// yields a duplicate entry. This mirrors the dashboard's contract, where
/// the vendor form owns id assignment.
///
/// ## Arguments
/// * `vendor` - Full vendor record, usually with zero balances and an
///   empty posting history
///
/// ## Returns
/// The stored vendor
pub fn add_vendor(state: &VendorLedgerState, vendor: Vendor) -> Result<Vendor, ApiError> {
    debug!(id = %vendor.id, name = %vendor.name, "add_vendor command");

    validate_entity_id(&vendor.id).map_err(CoreError::from)?;
    validate_vendor_name(&vendor.name).map_err(CoreError::from)?;

    state.with_ledger_mut(|ledger| {
        ledger.add(vendor.clone());
    });

    Ok(vendor)
}

/// Replaces the vendor record matching `vendor.id`.
///
/// ## Returns
/// The stored vendor, or a NOT_FOUND error
pub fn update_vendor(state: &VendorLedgerState, vendor: Vendor) -> Result<Vendor, ApiError> {
    debug!(id = %vendor.id, "update_vendor command");

    validate_vendor_name(&vendor.name).map_err(CoreError::from)?;

    state.with_ledger_mut(|ledger| {
        let updated = ledger.update(vendor)?;
        Ok(updated.clone())
    })
}

/// Deletes a vendor and its posting history.
///
/// ## Returns
/// Unit on success, or a NOT_FOUND error
pub fn delete_vendor(state: &VendorLedgerState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_vendor command");

    state.with_ledger_mut(|ledger| ledger.remove(id))?;
    Ok(())
}

/// Posts a payment or bill against a vendor.
///
/// ## Arguments
/// * `vendor_id` - Vendor to post against
/// * `transaction` - The posting; its amount must be positive, the
///   direction comes from its kind
///
/// ## Returns
/// The vendor with updated balances, or a NOT_FOUND/VALIDATION error
pub fn add_transaction(
    state: &VendorLedgerState,
    vendor_id: &str,
    transaction: PaymentTransaction,
) -> Result<Vendor, ApiError> {
    debug!(
        vendor_id = %vendor_id,
        amount_cents = %transaction.amount_cents,
        kind = ?transaction.kind,
        "add_transaction command"
    );

    validate_entity_id(vendor_id).map_err(CoreError::from)?;
    validate_amount_cents(transaction.amount_cents).map_err(CoreError::from)?;

    state.with_ledger_mut(|ledger| {
        let updated = ledger.post_transaction(vendor_id, transaction)?;
        Ok(updated.clone())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use merchdesk_core::{TransactionKind, VendorStatus};

    fn test_vendor(id: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {}", id),
            email: format!("vendor{}@example.com", id),
            phone: "+1 555 000 0000".to_string(),
            address: "1 Supply Road".to_string(),
            logo: "/placeholder.svg".to_string(),
            description: None,
            status: VendorStatus::Active,
            total_paid_cents: 0,
            amount_payable_cents: 0,
            transactions: Vec::new(),
        }
    }

    fn posting(amount_cents: i64, kind: TransactionKind) -> PaymentTransaction {
        PaymentTransaction {
            id: "t1".to_string(),
            amount_cents,
            date: Utc::now(),
            kind,
            note: Some("Initial payment".to_string()),
        }
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let state = VendorLedgerState::new();

        add_vendor(&state, test_vendor("1")).unwrap();

        let fetched = get_vendor(&state, "1").unwrap();
        assert_eq!(fetched.name, "Vendor 1");
        assert_eq!(list_vendors(&state).len(), 1);
    }

    #[test]
    fn test_add_vendor_rejects_blank_name() {
        let state = VendorLedgerState::new();
        let mut vendor = test_vendor("1");
        vendor.name = "  ".to_string();

        let err = add_vendor(&state, vendor).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_vendors(&state).is_empty());
    }

    #[test]
    fn test_add_transaction_updates_totals() {
        let state = VendorLedgerState::new();
        add_vendor(&state, test_vendor("1")).unwrap();

        let vendor =
            add_transaction(&state, "1", posting(120_000, TransactionKind::Bill)).unwrap();
        assert_eq!(vendor.amount_payable_cents, 120_000);

        let vendor =
            add_transaction(&state, "1", posting(20_000, TransactionKind::Payment)).unwrap();
        assert_eq!(vendor.total_paid_cents, 20_000);
        assert_eq!(vendor.amount_payable_cents, 100_000);
    }

    #[test]
    fn test_add_transaction_rejects_non_positive_amount() {
        let state = VendorLedgerState::new();
        add_vendor(&state, test_vendor("1")).unwrap();

        let err =
            add_transaction(&state, "1", posting(0, TransactionKind::Payment)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Nothing was posted
        let vendor = get_vendor(&state, "1").unwrap();
        assert!(vendor.transactions.is_empty());
    }

    #[test]
    fn test_add_transaction_unknown_vendor_maps_to_not_found() {
        let state = VendorLedgerState::new();

        let err =
            add_transaction(&state, "999", posting(100, TransactionKind::Bill)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_vendor_then_get_is_absent() {
        let state = VendorLedgerState::new();
        add_vendor(&state, test_vendor("1")).unwrap();
        add_transaction(&state, "1", posting(100, TransactionKind::Bill)).unwrap();

        delete_vendor(&state, "1").unwrap();

        let err = get_vendor(&state, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_update_vendor_full_replace() {
        let state = VendorLedgerState::new();
        add_vendor(&state, test_vendor("1")).unwrap();

        let mut edited = test_vendor("1");
        edited.email = "new@example.com".to_string();
        let updated = update_vendor(&state, edited).unwrap();

        assert_eq!(updated.email, "new@example.com");
    }
}
