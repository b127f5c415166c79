//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTORE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use bookstore_core::Money;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the shell banner
    pub store_name: String,

    /// Put in front of every rendered amount
    pub currency_symbol: String,

    /// How invoices and errors are printed
    pub output: OutputFormat,
}

/// Rendering mode for invoices and errors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable template
    #[default]
    Text,

    /// One JSON document per response
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("BOOKSTORE_OUTPUT".to_string())),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Book Ordering System".to_string(),
            currency_symbol: "£".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTORE_NAME`: Override store name
    /// - `BOOKSTORE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BOOKSTORE_OUTPUT`: `text` or `json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BOOKSTORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("BOOKSTORE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(output) = lookup("BOOKSTORE_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_cli::state::ConfigState;
    /// use bookstore_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(3544)), "£35.44");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.abs()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.store_name, "Book Ordering System");
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("BOOKSTORE_NAME", "Corner Books"),
            ("BOOKSTORE_CURRENCY_SYMBOL", "$"),
            ("BOOKSTORE_OUTPUT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.store_name, "Corner Books");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output_format() {
        let err = ConfigState::from_lookup(lookup_from(&[("BOOKSTORE_OUTPUT", "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("BOOKSTORE_OUTPUT".to_string()));
        assert_eq!(err.to_string(), "Invalid value for BOOKSTORE_OUTPUT");
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(3544)), "£35.44");
        assert_eq!(config.format_currency(Money::from_cents(395)), "£3.95");
        assert_eq!(config.format_currency(Money::from_cents(1)), "£0.01");
        assert_eq!(config.format_currency(Money::zero()), "£0.00");
        assert_eq!(config.format_currency(Money::from_cents(-550)), "-£5.50");
    }
}
