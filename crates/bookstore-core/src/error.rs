//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup and selection failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the shell prints                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, invoice number, etc.)
//! 3. Errors are enum variants, never String
//! 4. No error is fatal: every variant maps to a message and the caller continues

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No registered customer carries this name.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// No registered book carries this title.
    #[error("Book not found: {0}")]
    StockNotFound(String),

    /// Invoice lookup came back empty.
    ///
    /// ## When This Occurs
    /// - The number was never issued
    /// - The number was typed with different case or padding ("inv001", "INV1")
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    /// The order form references a customer or book that no longer matches
    /// anything registered (stale selection).
    #[error("Invalid selection: customer '{customer}', book '{book}'")]
    InvalidSelection { customer: String, book: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any entity is constructed, so a rejected form leaves
/// nothing half-registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a price that does not parse).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvoiceNotFound("INV042".to_string());
        assert_eq!(err.to_string(), "Invoice not found: INV042");

        let err = CoreError::InvalidSelection {
            customer: "Jane".to_string(),
            book: "Rust".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid selection: customer 'Jane', book 'Rust'"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "price has invalid format: not a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
