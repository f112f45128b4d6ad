//! # Vendor Return Commands
//!
//! Returns of goods back to vendors and their shipment lifecycle.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{VendorReturnState, VendorReturnStats};
use merchdesk_core::validation::{
    validate_price_cents, validate_quantity, validate_return_items_count,
};
use merchdesk_core::{
    CoreError, NewVendorReturn, ValidationError, VendorReturn, VendorReturnItem,
    VendorReturnPatch, VendorReturnStatus,
};

fn validate_items(items: &[VendorReturnItem]) -> Result<(), ValidationError> {
    validate_return_items_count(items.len())?;
    for item in items {
        validate_quantity(item.quantity)?;
        validate_price_cents(item.unit_price_cents)?;
        validate_price_cents(item.total_price_cents)?;
    }
    Ok(())
}

/// Lists all vendor returns, newest first.
pub fn list_returns(state: &VendorReturnState) -> Vec<VendorReturn> {
    debug!("list_returns command");
    state.with_log(|log| log.returns().to_vec())
}

/// Gets a single return by id.
pub fn get_return(state: &VendorReturnState, id: &str) -> Result<VendorReturn, ApiError> {
    debug!(id = %id, "get_return command");

    state.with_log(|log| {
        log.get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Return", id))
    })
}

/// Lists the returns destined for one vendor, newest first.
pub fn get_returns_by_vendor(state: &VendorReturnState, vendor_id: &str) -> Vec<VendorReturn> {
    debug!(vendor_id = %vendor_id, "get_returns_by_vendor command");

    state.with_log(|log| log.by_vendor(vendor_id).into_iter().cloned().collect())
}

/// Creates a vendor return.
///
/// ## Behavior
/// - Assigns a v4 id, the next `VRT-` number, and `return_date = now`
/// - New returns always start out pending
/// - Item line totals (`total_price_cents`) and `total_amount_cents` are
///   taken as supplied; the form computes them before submitting
///
/// ## Returns
/// The stored return, or a VALIDATION error
pub fn add_return(
    state: &VendorReturnState,
    payload: NewVendorReturn,
) -> Result<VendorReturn, ApiError> {
    debug!(
        vendor_id = %payload.vendor_id,
        items = %payload.items.len(),
        "add_return command"
    );

    validate_items(&payload.items).map_err(CoreError::from)?;

    let stored = state.with_log_mut(|log| log.add(payload).clone());

    // TODO: deduct the returned quantities once the inventory integration lands

    Ok(stored)
}

/// Applies a partial patch to a return (administrative correction).
///
/// A status change through a patch is a raw field write and does not stamp
/// `completed_date`; use [`update_status`] for the stamping transition.
pub fn update_return(
    state: &VendorReturnState,
    id: &str,
    patch: VendorReturnPatch,
) -> Result<VendorReturn, ApiError> {
    debug!(id = %id, "update_return command");

    if let Some(items) = &patch.items {
        validate_items(items).map_err(CoreError::from)?;
    }

    state.with_log_mut(|log| {
        let updated = log.patch(id, patch)?;
        Ok(updated.clone())
    })
}

/// Deletes a return.
pub fn delete_return(state: &VendorReturnState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_return command");

    state.with_log_mut(|log| log.remove(id))?;
    Ok(())
}

/// Moves a return to a new status.
///
/// ## Behavior
/// Any target status is accepted, including backward jumps; the nominal
/// order (`pending -> shipped -> received_by_vendor -> completed`) is a
/// convention of the UI, not a rule of this surface. Reaching completed
/// stamps `completed_date`; moving away leaves the old stamp for audit.
///
/// ## Returns
/// The updated return, or a NOT_FOUND error
pub fn update_status(
    state: &VendorReturnState,
    id: &str,
    status: VendorReturnStatus,
) -> Result<VendorReturn, ApiError> {
    debug!(id = %id, status = ?status, "update_status command");

    let updated = state.with_log_mut(|log| {
        let updated = log.update_status(id, status)?;
        Ok::<VendorReturn, CoreError>(updated.clone())
    })?;

    // TODO: post the settled credit to the vendor ledger once that
    // integration lands (completed returns only)

    Ok(updated)
}

/// Aggregate counts plus the credit total over completed returns.
pub fn get_return_stats(state: &VendorReturnState) -> VendorReturnStats {
    debug!("get_return_stats command");
    state.with_log(|log| log.stats())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use merchdesk_core::CreditType;

    fn payload(vendor_id: &str, total_cents: i64) -> NewVendorReturn {
        NewVendorReturn {
            vendor_id: vendor_id.to_string(),
            vendor_name: format!("Vendor {}", vendor_id),
            items: vec![VendorReturnItem {
                product_id: "2".to_string(),
                product_name: "Himalaya Powder".to_string(),
                variant_id: None,
                variant_name: None,
                quantity: 5,
                unit_price_cents: total_cents / 5,
                total_price_cents: total_cents,
                reason: "Expired products".to_string(),
            }],
            total_amount_cents: total_cents,
            credit_type: CreditType::Refund,
            notes: Some("Awaiting vendor confirmation".to_string()),
            created_by: "Admin".to_string(),
        }
    }

    #[test]
    fn test_add_return_assigns_identity() {
        let state = VendorReturnState::new();

        let ret = add_return(&state, payload("1", 87_485)).unwrap();

        assert_eq!(ret.return_number, "VRT-00001");
        assert_eq!(ret.status, VendorReturnStatus::Pending);
        assert!(ret.completed_date.is_none());
    }

    #[test]
    fn test_add_return_rejects_bad_quantity() {
        let state = VendorReturnState::new();
        let mut bad = payload("1", 87_485);
        bad.items[0].quantity = 0;

        let err = add_return(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_status_walk_to_completed() {
        let state = VendorReturnState::new();
        let id = add_return(&state, payload("1", 112_720)).unwrap().id;

        update_status(&state, &id, VendorReturnStatus::Shipped).unwrap();
        update_status(&state, &id, VendorReturnStatus::ReceivedByVendor).unwrap();
        let done = update_status(&state, &id, VendorReturnStatus::Completed).unwrap();

        assert_eq!(done.status, VendorReturnStatus::Completed);
        assert!(done.completed_date.is_some());
    }

    #[test]
    fn test_backward_jump_is_permitted_and_keeps_stamp() {
        let state = VendorReturnState::new();
        let id = add_return(&state, payload("1", 112_720)).unwrap().id;
        let done = update_status(&state, &id, VendorReturnStatus::Completed).unwrap();
        let stamp = done.completed_date;

        let reverted = update_status(&state, &id, VendorReturnStatus::Pending).unwrap();

        assert_eq!(reverted.status, VendorReturnStatus::Pending);
        assert_eq!(reverted.completed_date, stamp);
    }

    #[test]
    fn test_update_status_unknown_id_maps_to_not_found() {
        let state = VendorReturnState::new();

        let err = update_status(&state, "missing", VendorReturnStatus::Shipped).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_stats_credit_counts_completed_only() {
        let state = VendorReturnState::new();
        let completed = add_return(&state, payload("1", 50_000)).unwrap().id;
        let shipped = add_return(&state, payload("2", 30_000)).unwrap().id;

        update_status(&state, &completed, VendorReturnStatus::Completed).unwrap();
        update_status(&state, &shipped, VendorReturnStatus::Shipped).unwrap();

        let stats = get_return_stats(&state);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.shipped, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_credit_cents, 50_000);
    }

    #[test]
    fn test_get_returns_by_vendor() {
        let state = VendorReturnState::new();
        add_return(&state, payload("1", 1_000)).unwrap();
        add_return(&state, payload("2", 2_000)).unwrap();
        add_return(&state, payload("1", 3_000)).unwrap();

        assert_eq!(get_returns_by_vendor(&state, "1").len(), 2);
    }

    #[test]
    fn test_delete_return() {
        let state = VendorReturnState::new();
        let id = add_return(&state, payload("1", 1_000)).unwrap().id;

        delete_return(&state, &id).unwrap();
        assert_eq!(get_return(&state, &id).unwrap_err().code, ErrorCode::NotFound);
    }
}
