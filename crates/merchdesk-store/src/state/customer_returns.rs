//! # Customer Return State
//!
//! Owns customer return requests and their approval lifecycle.
//!
//! ## Status Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Customer Return Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐   approve    ┌──────────┐                                │
//! │  │ pending  │─────────────►│ approved │──┐                             │
//! │  │          │              └──────────┘  │ patch                       │
//! │  │          │   reject     ┌──────────┐  ▼                             │
//! │  │          │─────────────►│ rejected │ ┌───────────┐                  │
//! │  └──────────┘              └──────────┘ │ completed │                  │
//! │                                         └───────────┘                  │
//! │                                                                         │
//! │  completed is only reachable through the generic patch; there is no    │
//! │  dedicated command for it.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use merchdesk_core::error::{CoreError, CoreResult};
use merchdesk_core::sequence::{next_return_number, CUSTOMER_RETURN_PREFIX};
use merchdesk_core::{CustomerReturn, CustomerReturnPatch, CustomerReturnStatus, NewCustomerReturn};

/// The customer return collection, newest first.
#[derive(Debug, Clone, Default)]
pub struct CustomerReturnLog {
    returns: Vec<CustomerReturn>,
}

impl CustomerReturnLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        CustomerReturnLog {
            returns: Vec::new(),
        }
    }

    /// All returns, newest first.
    pub fn returns(&self) -> &[CustomerReturn] {
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
    /// `RET-` number, and the request timestamp, then prepends it.
    ///
    /// The caller of this method must hold the log exclusively for the
    /// whole call (the state wrapper's mutex does this), which is what
    /// makes the number scan-then-insert pair atomic.
    pub fn add(&mut self, payload: NewCustomerReturn) -> &CustomerReturn {
        let id = Uuid::new_v4().to_string();
        let number = next_return_number(
            CUSTOMER_RETURN_PREFIX,
            self.returns.iter().map(|r| r.return_number.as_str()),
        );

        self.returns.insert(0, payload.into_return(id, number));
        &self.returns[0]
    }

    /// Looks up a return by id.
    pub fn get(&self, id: &str) -> Option<&CustomerReturn> {
        self.returns.iter().find(|r| r.id == id)
    }

    /// All returns filed by one customer, newest first.
    pub fn by_customer(&self, customer_id: &str) -> Vec<&CustomerReturn> {
        self.returns
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .collect()
    }

    /// Applies a partial patch to a return.
    pub fn patch(&mut self, id: &str, patch: CustomerReturnPatch) -> CoreResult<&CustomerReturn> {
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

    /// Approves a return, stamping the processing fields.
    pub fn approve(&mut self, id: &str, processed_by: &str) -> CoreResult<&CustomerReturn> {
        let idx = self.position(id)?;
        self.returns[idx].approve(processed_by);
        Ok(&self.returns[idx])
    }

    /// Rejects a return, stamping the processing fields; `notes` overwrites
    /// the stored notes only when supplied.
    pub fn reject(
        &mut self,
        id: &str,
        processed_by: &str,
        notes: Option<String>,
    ) -> CoreResult<&CustomerReturn> {
        let idx = self.position(id)?;
        self.returns[idx].reject(processed_by, notes);
        Ok(&self.returns[idx])
    }

    /// Aggregate counts and refund total.
    pub fn stats(&self) -> CustomerReturnStats {
        CustomerReturnStats::from(self)
    }

    fn position(&self, id: &str) -> CoreResult<usize> {
        self.returns
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::ReturnNotFound(id.to_string()))
    }
}

/// Aggregate statistics over customer returns.
///
/// `total_refund_cents` sums approved and completed returns only: pending
/// requests are not yet a liability and rejected ones never became one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReturnStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub completed: usize,
    pub total_refund_cents: i64,
}

impl From<&CustomerReturnLog> for CustomerReturnStats {
    fn from(log: &CustomerReturnLog) -> Self {
        let count =
            |status: CustomerReturnStatus| log.returns.iter().filter(|r| r.status == status).count();

        CustomerReturnStats {
            total: log.returns.len(),
            pending: count(CustomerReturnStatus::Pending),
            approved: count(CustomerReturnStatus::Approved),
            rejected: count(CustomerReturnStatus::Rejected),
            completed: count(CustomerReturnStatus::Completed),
            total_refund_cents: log
                .returns
                .iter()
                .filter(|r| {
                    matches!(
                        r.status,
                        CustomerReturnStatus::Approved | CustomerReturnStatus::Completed
                    )
                })
                .map(|r| r.total_amount_cents)
                .sum(),
        }
    }
}

/// Shared customer return state.
///
/// Same locking discipline as the vendor ledger: `Arc<Mutex<_>>`, one
/// command holds the lock for the whole mutation.
#[derive(Debug, Clone, Default)]
pub struct CustomerReturnState {
    log: Arc<Mutex<CustomerReturnLog>>,
}

impl CustomerReturnState {
    /// Creates a new empty return state.
    pub fn new() -> Self {
        CustomerReturnState {
            log: Arc::new(Mutex::new(CustomerReturnLog::new())),
        }
    }

    /// Executes a function with read access to the log.
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CustomerReturnLog) -> R,
    {
        let log = self.log.lock().expect("Customer return mutex poisoned");
        f(&log)
    }

    /// Executes a function with write access to the log.
    pub fn with_log_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CustomerReturnLog) -> R,
    {
        let mut log = self.log.lock().expect("Customer return mutex poisoned");
        f(&mut log)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
