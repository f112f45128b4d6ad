//! # Commands Module
//!
//! The command/query surface exposed to the dashboard UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs              ◄─── You are here (exports)
//! ├── vendors.rs          ◄─── Vendor CRUD + ledger postings
//! ├── customer_returns.rs ◄─── Customer return workflow
//! └── vendor_returns.rs   ◄─── Vendor return workflow
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Flow                                      │
//! │                                                                         │
//! │  Dashboard UI                                                           │
//! │  ─────────────                                                          │
//! │  user clicks "Approve" on a pending return                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::customer_returns::approve_return(&state, id, "Admin")        │
//! │         │                                                               │
//! │         │ 1. validate the payload (merchdesk_core::validation)          │
//! │         │ 2. lock the container, run the mutation                       │
//! │         │ 3. return the updated entity for rendering                    │
//! │         ▼                                                               │
//! │  Result<CustomerReturn, ApiError>                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs; the caller constructs the
//! containers once at session start and passes them by reference:
//! ```rust,ignore
//! // Only needs the ledger
//! fn add_transaction(state: &VendorLedgerState, ...)
//!
//! // Only needs the customer return log
//! fn get_return_stats(state: &CustomerReturnState)
//! ```
//!
//! Every mutating command completes atomically from the caller's point of
//! view: one lock acquisition, one mutation, then the new state is returned.

pub mod customer_returns;
pub mod vendor_returns;
pub mod vendors;
