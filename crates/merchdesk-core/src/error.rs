//! # Error Types
//!
//! Domain-specific error types for merchdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  merchdesk-core errors (this file)                                      │
//! │  ├── CoreError        - Lookup failures and domain errors               │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  merchdesk-store errors (separate crate)                                │
//! │  └── ApiError         - What the dashboard sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Dashboard UI            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (vendor id, return id, etc.)
//! 3. Errors are enum variants, never String
//! 4. A missing id is an error the caller may choose to ignore; it is never
//!    a process abort

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent lookup failures or business rule violations.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vendor cannot be found.
    ///
    /// ## When This Occurs
    /// - Posting a transaction against an unknown vendor id
    /// - Updating or deleting a vendor that was already removed
    ///
    /// Callers that want the permissive lookup-or-skip behavior simply
    /// discard this error; the store guarantees nothing changed.
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// Return request cannot be found.
    ///
    /// Covers both customer and vendor returns; the message carries the id
    /// that missed.
    #[error("Return not found: {0}")]
    ReturnNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a command payload doesn't meet requirements.
/// Used for early validation at the command boundary, before any state is
/// touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
