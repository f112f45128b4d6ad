//! # Vendor Ledger State
//!
//! Owns the vendor collection and its payment/bill posting history.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Vendor Ledger Operations                               │
//! │                                                                         │
//! │  Dashboard Action          Command                  Ledger Change       │
//! │  ────────────────          ───────                  ─────────────       │
//! │                                                                         │
//! │  Save vendor form ───────► add_vendor() ──────────► vendors.push(v)    │
//! │                                                                         │
//! │  Edit vendor ────────────► update_vendor() ───────► vendors[i] = v     │
//! │                                                                         │
//! │  Delete vendor ──────────► delete_vendor() ───────► vendors.remove(i)  │
//! │                                                     (postings go too)  │
//! │                                                                         │
//! │  Record payment/bill ────► add_transaction() ─────► postings prepend,  │
//! │                                                     balances update    │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use merchdesk_core::error::{CoreError, CoreResult};
use merchdesk_core::{PaymentTransaction, Vendor};

/// The vendor collection.
///
/// ## Invariants
/// - Every vendor's `amount_payable` stays non-negative (enforced by the
///   posting rule on [`Vendor`])
/// - Deleting a vendor removes its posting history with it; there is no
///   ledger elsewhere to cascade into
/// - Vendor ids are unique by caller discipline only; `add` performs no
///   uniqueness scan, so a reused id yields a duplicate entry (known gap,
///   kept for parity with the dashboard's behavior)
#[derive(Debug, Clone, Default)]
pub struct VendorLedger {
    vendors: Vec<Vendor>,
}

impl VendorLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        VendorLedger {
            vendors: Vec::new(),
        }
    }

    /// All vendors, in insertion order.
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Number of vendors.
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Checks if the ledger has no vendors.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Inserts a vendor with its caller-supplied id.
    pub fn add(&mut self, vendor: Vendor) {
        self.vendors.push(vendor);
    }

    /// Full replace of the vendor record matching `vendor.id`.
    pub fn update(&mut self, vendor: Vendor) -> CoreResult<&Vendor> {
        let idx = self
            .vendors
            .iter()
            .position(|v| v.id == vendor.id)
            .ok_or_else(|| CoreError::VendorNotFound(vendor.id.clone()))?;

        self.vendors[idx] = vendor;
        Ok(&self.vendors[idx])
    }

    /// Removes the vendor and its transactions.
    pub fn remove(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.vendors.len();
        self.vendors.retain(|v| v.id != id);

        if self.vendors.len() == initial_len {
            Err(CoreError::VendorNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Looks up a vendor by id.
    pub fn get(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Posts a transaction against a vendor: prepends it to the history and
    /// updates the running balances.
    ///
    /// Returns the updated vendor so the caller can render the new state.
    pub fn post_transaction(
        &mut self,
        vendor_id: &str,
        transaction: PaymentTransaction,
    ) -> CoreResult<&Vendor> {
        let idx = self
            .vendors
            .iter()
            .position(|v| v.id == vendor_id)
            .ok_or_else(|| CoreError::VendorNotFound(vendor_id.to_string()))?;

        self.vendors[idx].apply_transaction(transaction);
        Ok(&self.vendors[idx])
    }
}

/// Shared vendor ledger state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<VendorLedger>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command modifies the ledger at a time
///
/// ## Why Not RwLock?
/// Ledger operations are quick and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct VendorLedgerState {
    ledger: Arc<Mutex<VendorLedger>>,
}

impl VendorLedgerState {
    /// Creates a new empty ledger state.
    pub fn new() -> Self {
        VendorLedgerState {
            ledger: Arc::new(Mutex::new(VendorLedger::new())),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_ledger(|ledger| ledger.len());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VendorLedger) -> R,
    {
        let ledger = self.ledger.lock().expect("Vendor ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_ledger_mut(|ledger| ledger.add(vendor));
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VendorLedger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Vendor ledger mutex poisoned");
        f(&mut ledger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
