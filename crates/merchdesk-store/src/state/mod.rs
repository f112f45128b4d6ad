//! # State Module
//!
//! Owned state containers for the back office.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each slice
//! of business state gets its own container. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Constructed once at session start, passed by reference to consumers:  │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌─────────────────────┐  ┌───────────────────┐  │
//! │  │ VendorLedgerState│  │ CustomerReturnState │  │ VendorReturnState │  │
//! │  │                  │  │                     │  │                   │  │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<         │  │  Arc<Mutex<       │  │
//! │  │   VendorLedger>> │  │   CustomerReturnLog>│  │   VendorReturnLog>│  │
//! │  └──────────────────┘  └─────────────────────┘  └───────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY: every container is protected by Arc<Mutex<T>>; a       │
//! │  command holds the lock for the whole mutation, which also makes the   │
//! │  return-number scan-then-insert pair atomic per container.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No container depends on another at runtime; cross-entity relations are by
//! identifier only.

mod customer_returns;
mod vendor_returns;
mod vendors;

pub use customer_returns::{CustomerReturnLog, CustomerReturnState, CustomerReturnStats};
pub use vendor_returns::{VendorReturnLog, VendorReturnState, VendorReturnStats};
pub use vendors::{VendorLedger, VendorLedgerState};
