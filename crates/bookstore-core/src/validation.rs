//! # Validation Module
//!
//! Form-field checks run before any entity is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Gets Checked                                  │
//! │                                                                         │
//! │  Text fields (name, phone, email, title, author, invoice number)       │
//! │  └── must not be empty after trimming                                  │
//! │                                                                         │
//! │  Price field                                                           │
//! │  └── must parse as a number (decimal or exponent form)                 │
//! │                                                                         │
//! │  Nothing else: no email/phone format rules, no sign check on price.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{parse_price, require};
//!
//! assert_eq!(require("name", "  Jane Smith ").unwrap(), "Jane Smith");
//! assert!(require("name", "   ").is_err());
//!
//! assert_eq!(parse_price("29.99").unwrap().cents(), 2999);
//! assert!(parse_price("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a text field has content and returns it trimmed.
pub fn require(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Parses the price field.
///
/// An empty field is a format error rather than a missing field: the price
/// is checked before the text fields, exactly like a number conversion that
/// fails on an empty string.
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    text.parse::<Money>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: e.to_string(),
        })
}
