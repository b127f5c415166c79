//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<T, ApiError>                                                   │
//! │         │                                                               │
//! │         ├── Empty form field ───────► ApiError (VALIDATION_ERROR)      │
//! │         ├── Price does not parse ───► ApiError (VALIDATION_ERROR)      │
//! │         ├── CoreError ──── From ────► ApiError (NOT_FOUND / ...)       │
//! │         └── Success                                                    │
//! │                                                                         │
//! │  The shell prints `message` and carries on. Nothing here is fatal.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstore_core::CoreError;
use serde::Serialize;

/// Error returned from a command.
///
/// In JSON output mode this is printed as:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Invoice not found!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Lookup found nothing
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Rendering or other internal failure
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to the messages the order and invoice screens show.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CustomerNotFound(name) => {
                ApiError::not_found(format!("Customer not found: {}", name))
            }
            CoreError::StockNotFound(title) => {
                ApiError::not_found(format!("Book not found: {}", title))
            }
            CoreError::InvoiceNotFound(_) => ApiError::not_found("Invoice not found!"),
            CoreError::InvalidSelection { .. } => {
                ApiError::validation("Invalid customer or book selection!")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON rendering failed: {}", err);
        ApiError::internal("Could not render output")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
