//! # Customer Return Commands
//!
//! Intake and processing of customer return requests.
//!
//! ## Approval Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Returns page: staff reviews a pending request                          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  approve_return(&state, id, "Admin")                                    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Lock the log, find the return                              │    │
//! │  │  2. status = approved                                          │    │
//! │  │  3. processed_date = now, processed_by = "Admin"               │    │
//! │  │  4. Return the updated request                                 │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Stats card re-renders: approved count and refund total move            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CustomerReturnState, CustomerReturnStats};
use merchdesk_core::validation::{
    validate_price_cents, validate_quantity, validate_return_items_count,
};
use merchdesk_core::{
    CoreError, CustomerReturn, CustomerReturnItem, CustomerReturnPatch, NewCustomerReturn,
    ValidationError,
};

fn validate_items(items: &[CustomerReturnItem]) -> Result<(), ValidationError> {
    validate_return_items_count(items.len())?;
    for item in items {
        validate_quantity(item.quantity)?;
        validate_price_cents(item.price_cents)?;
    }
    Ok(())
}

/// Lists all customer returns, newest first.
pub fn list_returns(state: &CustomerReturnState) -> Vec<CustomerReturn> {
    debug!("list_returns command");
    state.with_log(|log| log.returns().to_vec())
}

/// Gets a single return by id.
pub fn get_return(state: &CustomerReturnState, id: &str) -> Result<CustomerReturn, ApiError> {
    debug!(id = %id, "get_return command");

    state.with_log(|log| {
        log.get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Return", id))
    })
}

/// Lists the returns filed by one customer, newest first.
pub fn get_returns_by_customer(
    state: &CustomerReturnState,
    customer_id: &str,
) -> Vec<CustomerReturn> {
    debug!(customer_id = %customer_id, "get_returns_by_customer command");

    state.with_log(|log| {
        log.by_customer(customer_id)
            .into_iter()
            .cloned()
            .collect()
    })
}

/// Creates a customer return request.
///
/// ## Behavior
/// - Assigns a v4 id, the next `RET-` number, and `request_date = now`
/// - New requests always start out pending
/// - `total_amount_cents` is taken as supplied; the form computes it from
///   the items before submitting
///
/// ## Returns
/// The stored return, or a VALIDATION error
pub fn add_return(
    state: &CustomerReturnState,
    payload: NewCustomerReturn,
) -> Result<CustomerReturn, ApiError> {
    debug!(
        customer_id = %payload.customer_id,
        items = %payload.items.len(),
        "add_return command"
    );

    validate_items(&payload.items).map_err(CoreError::from)?;

    Ok(state.with_log_mut(|log| log.add(payload).clone()))
}

/// Applies a partial patch to a return (administrative correction).
///
/// Any patchable field can change, including status; `request_date` and
/// `processed_date` stay under the store's control.
pub fn update_return(
    state: &CustomerReturnState,
    id: &str,
    patch: CustomerReturnPatch,
) -> Result<CustomerReturn, ApiError> {
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
pub fn delete_return(state: &CustomerReturnState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_return command");

    state.with_log_mut(|log| log.remove(id))?;
    Ok(())
}

/// Approves a pending return.
///
/// ## Behavior
/// - status = approved, `processed_date`/`processed_by` stamped
/// - Re-invoking on an already approved return re-stamps the processing
///   fields; the resulting status is the same
///
/// ## Returns
/// The updated return, or a NOT_FOUND error
pub fn approve_return(
    state: &CustomerReturnState,
    id: &str,
    processed_by: &str,
) -> Result<CustomerReturn, ApiError> {
    debug!(id = %id, processed_by = %processed_by, "approve_return command");

    let approved = state.with_log_mut(|log| {
        let updated = log.approve(id, processed_by)?;
        Ok::<CustomerReturn, CoreError>(updated.clone())
    })?;

    // TODO: restock the returned items once the inventory integration lands
    // TODO: hand the refund to the payment integration once it lands

    Ok(approved)
}

/// Rejects a pending return.
///
/// `notes` overwrites the stored notes only when supplied; rejecting
/// without notes preserves what the request already carried.
pub fn reject_return(
    state: &CustomerReturnState,
    id: &str,
    processed_by: &str,
    notes: Option<String>,
) -> Result<CustomerReturn, ApiError> {
    debug!(id = %id, processed_by = %processed_by, "reject_return command");

    state.with_log_mut(|log| {
        let updated = log.reject(id, processed_by, notes)?;
        Ok(updated.clone())
    })
}

/// Aggregate counts plus the refund total over approved and completed
/// returns.
pub fn get_return_stats(state: &CustomerReturnState) -> CustomerReturnStats {
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
    use merchdesk_core::{CustomerReturnStatus, RefundMethod};

    fn payload(customer_id: &str, total_cents: i64) -> NewCustomerReturn {
        NewCustomerReturn {
            customer_id: customer_id.to_string(),
            customer_name: format!("Customer {}", customer_id),
            order_id: Some("12342".to_string()),
            order_number: Some("12342".to_string()),
            items: vec![CustomerReturnItem {
                product_id: "1".to_string(),
                product_name: "Premium T-Shirt".to_string(),
                variant_id: Some("v1".to_string()),
                variant_name: Some("Small / Red".to_string()),
                quantity: 1,
                price_cents: total_cents,
                reason: "Wrong size".to_string(),
            }],
            total_amount_cents: total_cents,
            refund_method: RefundMethod::OriginalPayment,
            notes: None,
        }
    }

    #[test]
    fn test_add_return_assigns_identity() {
        let state = CustomerReturnState::new();

        let ret = add_return(&state, payload("1", 45_000)).unwrap();

        assert_eq!(ret.return_number, "RET-00001");
        assert_eq!(ret.status, CustomerReturnStatus::Pending);
        assert!(!ret.id.is_empty());
    }

    #[test]
    fn test_add_return_rejects_empty_items() {
        let state = CustomerReturnState::new();
        let mut bad = payload("1", 45_000);
        bad.items.clear();

        let err = add_return(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_returns(&state).is_empty());
    }

    #[test]
    fn test_approve_then_reject_flow() {
        let state = CustomerReturnState::new();
        let id = add_return(&state, payload("1", 45_000)).unwrap().id;

        let approved = approve_return(&state, &id, "Admin").unwrap();
        assert_eq!(approved.status, CustomerReturnStatus::Approved);
        assert!(approved.processed_date.is_some());

        // Administrative override back through reject
        let rejected =
            reject_return(&state, &id, "Manager", Some("Fraud flag".to_string())).unwrap();
        assert_eq!(rejected.status, CustomerReturnStatus::Rejected);
        assert_eq!(rejected.notes.as_deref(), Some("Fraud flag"));
    }

    #[test]
    fn test_approve_unknown_id_maps_to_not_found() {
        let state = CustomerReturnState::new();

        let err = approve_return(&state, "missing", "Admin").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_stats_across_commands() {
        let state = CustomerReturnState::new();
        let pending = add_return(&state, payload("1", 10_000)).unwrap().id;
        let approved = add_return(&state, payload("2", 20_000)).unwrap().id;
        let rejected = add_return(&state, payload("3", 5_000)).unwrap().id;

        let _ = pending;
        approve_return(&state, &approved, "Admin").unwrap();
        reject_return(&state, &rejected, "Admin", None).unwrap();

        let stats = get_return_stats(&state);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_refund_cents, 20_000);
    }

    #[test]
    fn test_update_and_delete() {
        let state = CustomerReturnState::new();
        let id = add_return(&state, payload("1", 10_000)).unwrap().id;

        let updated = update_return(
            &state,
            &id,
            CustomerReturnPatch {
                status: Some(CustomerReturnStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.status, CustomerReturnStatus::Completed);

        delete_return(&state, &id).unwrap();
        assert_eq!(get_return(&state, &id).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_get_returns_by_customer() {
        let state = CustomerReturnState::new();
        add_return(&state, payload("1", 1_000)).unwrap();
        add_return(&state, payload("2", 2_000)).unwrap();
        add_return(&state, payload("1", 3_000)).unwrap();

        let mine = get_returns_by_customer(&state, "1");
        assert_eq!(mine.len(), 2);
    }
}
