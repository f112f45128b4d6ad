//! # merchdesk-core: Pure Business Logic for Merchdesk
//!
//! This crate is the **heart** of the Merchdesk back office. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Merchdesk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard UI (external)                        │   │
//! │  │   Vendors page ──► Customer Returns ──► Vendor Returns          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command / query calls                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 merchdesk-store (state layer)                   │   │
//! │  │   VendorLedgerState, CustomerReturnState, VendorReturnState     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ merchdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │ sequence  │  │ validation│   │   │
//! │  │   │  Vendor   │  │   Money   │  │ RET-00001 │  │   rules   │   │   │
//! │  │   │  Returns  │  │  (cents)  │  │ VRT-00001 │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vendor, PaymentTransaction, returns, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`sequence`] - Human-readable return-number generation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic where possible;
//!    the only ambient inputs are `Utc::now()` timestamps on transitions
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use merchdesk_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let payable = Money::from_cents(120_000); // $1,200.00
//! let payment = Money::from_cents(500_000); // $5,000.00
//!
//! // Overpayment is absorbed: the payable balance floors at zero
//! assert_eq!(payable.saturating_sub_floor_zero(payment), Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod sequence;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use merchdesk_core::Money` instead of
// `use merchdesk_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single return request
///
/// ## Business Reason
/// Prevents runaway return forms; a customer or vendor return that touches
/// more than 50 distinct products should be split into multiple requests.
pub const MAX_RETURN_ITEMS: usize = 50;

/// Maximum quantity of a single item on a return
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
