//! # merchdesk-store: State Containers & Command Surface
//!
//! This crate owns the mutable back-office state and exposes the
//! command/query surface the dashboard UI calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Merchdesk Data Flow                               │
//! │                                                                         │
//! │  Dashboard action (approve return, post payment, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  merchdesk-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   commands    │    │     state      │   │    error     │  │   │
//! │  │   │ add_vendor    │───►│ VendorLedger   │   │  ApiError    │  │   │
//! │  │   │ approve_return│    │ CustomerReturn │   │  ErrorCode   │  │   │
//! │  │   │ update_status │    │ VendorReturn   │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  merchdesk-core: ledger postings, status transitions, validation        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`state`] - Owned collections and their Mutex-guarded state wrappers
//! - [`commands`] - The command/query functions the UI invokes
//! - [`error`] - Serializable API error type
//!
//! ## Usage
//!
//! ```rust
//! use merchdesk_store::commands;
//! use merchdesk_store::state::CustomerReturnState;
//!
//! let returns = CustomerReturnState::new();
//!
//! let stats = commands::customer_returns::get_return_stats(&returns);
//! assert_eq!(stats.total, 0);
//! ```
//!
//! There is no persistence: every state container is process-local and
//! resets on restart, which is the contract the dashboard was built around.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod commands;
pub mod error;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ErrorCode};
pub use state::{
    CustomerReturnLog, CustomerReturnState, CustomerReturnStats, VendorLedger, VendorLedgerState,
    VendorReturnLog, VendorReturnState, VendorReturnStats,
};
