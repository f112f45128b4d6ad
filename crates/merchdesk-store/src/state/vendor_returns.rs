//! # Vendor Return State
//!
//! Owns returns of goods back to vendors.
//!
//! The nominal flow is `pending -> shipped -> received_by_vendor ->
//! completed`, driven by a single status command that accepts any target
//! status. Reaching completed stamps `completed_date`; leaving it does not
//! clear the stamp.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use merchdesk_core::error::{CoreError, CoreResult};
use merchdesk_core::sequence::{next_return_number, VENDOR_RETURN_PREFIX};
use merchdesk_core::{NewVendorReturn, VendorReturn, VendorReturnPatch, VendorReturnStatus};

/// The vendor return collection, newest first.
#[derive(Debug, Clone, Default)]
pub struct VendorReturnLog {
    returns: Vec<VendorReturn>,
}

impl VendorReturnLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        VendorReturnLog {
            returns: Vec::new(),
        }
    }

    /// All returns, newest first.
    pub fn returns(&self) -> &[VendorReturn] {
        &self.returns
    }

    /// Number of returns.
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Checks if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Creates a return from the payload: assigns a v4 id, the next
    /// `VRT-` number, and the return timestamp, then prepends it.
    ///
    /// Same atomicity note as the customer log: the state wrapper's mutex
    /// covers the number scan and the insert together.
    pub fn add(&mut self, payload: NewVendorReturn) -> &VendorReturn {
        let id = Uuid::new_v4().to_string();
        let number = next_return_number(
            VENDOR_RETURN_PREFIX,
            self.returns.iter().map(|r| r.return_number.as_str()),
        );

        self.returns.insert(0, payload.into_return(id, number));
        &self.returns[0]
    }

    /// Looks up a return by id.
    pub fn get(&self, id: &str) -> Option<&VendorReturn> {
        self.returns.iter().find(|r| r.id == id)
    }

    /// All returns destined for one vendor, newest first.
    pub fn by_vendor(&self, vendor_id: &str) -> Vec<&VendorReturn> {
        self.returns
            .iter()
            .filter(|r| r.vendor_id == vendor_id)
            .collect()
    }

    /// Applies a partial patch to a return.
    pub fn patch(&mut self, id: &str, patch: VendorReturnPatch) -> CoreResult<&VendorReturn> {
        let idx = self.position(id)?;
        self.returns[idx].apply_patch(patch);
        Ok(&self.returns[idx])
    }

    /// Removes a return.
    pub fn remove(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.returns.len();
        self.returns.retain(|r| r.id != id);

        if self.returns.len() == initial_len {
            Err(CoreError::ReturnNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Moves a return to `status`; reaching completed stamps
    /// `completed_date`.
    pub fn update_status(
        &mut self,
        id: &str,
        status: VendorReturnStatus,
    ) -> CoreResult<&VendorReturn> {
        let idx = self.position(id)?;
        self.returns[idx].set_status(status);
        Ok(&self.returns[idx])
    }

    /// Aggregate counts and credit total.
    pub fn stats(&self) -> VendorReturnStats {
        VendorReturnStats::from(self)
    }

    fn position(&self, id: &str) -> CoreResult<usize> {
        self.returns
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::ReturnNotFound(id.to_string()))
    }
}

/// Aggregate statistics over vendor returns.
///
/// `total_credit_cents` sums completed returns only: credit is counted once
/// the vendor has actually settled, not when goods ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorReturnStats {
    pub total: usize,
    pub pending: usize,
    pub shipped: usize,
    pub received_by_vendor: usize,
    pub completed: usize,
    pub total_credit_cents: i64,
}

impl From<&VendorReturnLog> for VendorReturnStats {
    fn from(log: &VendorReturnLog) -> Self {
        let count =
            |status: VendorReturnStatus| log.returns.iter().filter(|r| r.status == status).count();

        VendorReturnStats {
            total: log.returns.len(),
            pending: count(VendorReturnStatus::Pending),
            shipped: count(VendorReturnStatus::Shipped),
            received_by_vendor: count(VendorReturnStatus::ReceivedByVendor),
            completed: count(VendorReturnStatus::Completed),
            total_credit_cents: log
                .returns
                .iter()
                .filter(|r| r.status == VendorReturnStatus::Completed)
                .map(|r| r.total_amount_cents)
                .sum(),
        }
    }
}

/// Shared vendor return state.
#[derive(Debug, Clone, Default)]
pub struct VendorReturnState {
    log: Arc<Mutex<VendorReturnLog>>,
}

impl VendorReturnState {
    /// Creates a new empty return state.
    pub fn new() -> Self {
        VendorReturnState {
            log: Arc::new(Mutex::new(VendorReturnLog::new())),
        }
    }

    /// Executes a function with read access to the log.
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VendorReturnLog) -> R,
    {
        let log = self.log.lock().expect("Vendor return mutex poisoned");
        f(&log)
    }

    /// Executes a function with write access to the log.
    pub fn with_log_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VendorReturnLog) -> R,
    {
        let mut log = self.log.lock().expect("Vendor return mutex poisoned");
        f(&mut log)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
