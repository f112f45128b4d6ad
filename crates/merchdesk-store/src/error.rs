//! # API Error Type
//!
//! Unified error type for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Merchdesk                              │
//! │                                                                         │
//! │  Dashboard UI                 Rust Backend                              │
//! │  ────────────                 ────────────                              │
//! │                                                                         │
//! │  commands::vendors::add_transaction(...)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ──── CoreError::VendorNotFound ──┐                  │  │
//! │  │         │                                     ▼                  │  │
//! │  │  Bad payload? ─── ValidationError ───────── ApiError ──────────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  A NotFound is recoverable: the store guarantees nothing changed, so   │
//! │  a caller that wants the old silent-skip behavior just discards it.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors cross the UI boundary as JSON, so we implement `Serialize` and
//! include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use merchdesk_core::CoreError;

/// API error returned from command functions.
///
/// ## Serialization
/// This is what the dashboard receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Vendor not found: v-42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Anything else (should not happen on this surface)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VendorNotFound(id) => ApiError::not_found("Vendor", &id),
            CoreError::ReturnNotFound(id) => ApiError::not_found("Return", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use merchdesk_core::ValidationError;

    #[test]
    fn test_not_found_from_core_error() {
        let api: ApiError = CoreError::VendorNotFound("v-42".to_string()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Vendor not found: v-42");
    }

    #[test]
    fn test_validation_from_core_error() {
        let core: CoreError = ValidationError::MustBePositive {
            field: "amount".to_string(),
        }
        .into();
        let api: ApiError = core.into();
        assert_eq!(api.code, ErrorCode::ValidationError);
        assert!(api.message.contains("amount must be positive"));
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::not_found("Return", "ret_9");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Return not found: ret_9");
    }
}
