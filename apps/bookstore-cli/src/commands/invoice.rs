//! # Invoice Commands
//!
//! Invoice screen: look one up by number, list them all, render them.
//!
//! ## Text Template
//! ```text
//! Invoice Number: INV001
//! Customer: John Doe
//! Book: Python Programming
//! Author: John Smith
//! Price: £29.99
//! Shipping Cost: £5.45
//! Total Cost: £35.44
//! ==================================================
//! ```

use tracing::debug;

use bookstore_core::{BookStore, CoreError, InvoiceSummary, Money};

use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

pub const MISSING_NUMBER: &str = "Please enter an invoice number!";
pub const NONE_FOUND: &str = "No invoices found!";

/// Width of the line printed under every invoice.
pub const DIVIDER_WIDTH: usize = 50;

/// Looks up one invoice by its exact number.
pub fn search_invoice(store: &BookStore, invoice_number: &str) -> Result<InvoiceSummary, ApiError> {
    debug!(invoice_number = %invoice_number, "search_invoice command");

    if invoice_number.is_empty() {
        return Err(ApiError::validation(MISSING_NUMBER));
    }

    store
        .search_invoice(invoice_number)
        .map(InvoiceSummary::from)
        .ok_or_else(|| CoreError::InvoiceNotFound(invoice_number.to_string()).into())
}

/// Every invoice in the order it was filed. Empty when nothing has been
/// ordered yet.
pub fn view_all_invoices(store: &BookStore) -> Vec<InvoiceSummary> {
    debug!(count = store.get_invoice_count(), "view_all_invoices command");

    store
        .get_all_invoices()
        .iter()
        .map(InvoiceSummary::from)
        .collect()
}

/// Renders invoices in the configured output format.
///
/// Text output is one template block per invoice; JSON output is a single
/// array.
pub fn render_invoices(summaries: &[InvoiceSummary], config: &ConfigState) -> Result<String, ApiError> {
    match config.output {
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|summary| render_invoice_text(summary, config))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
    }
}

/// Fills in the text template for one invoice, divider included.
pub fn render_invoice_text(summary: &InvoiceSummary, config: &ConfigState) -> String {
    let money = |cents| config.format_currency(Money::from_cents(cents));

    format!(
        "Invoice Number: {}\n\
         Customer: {}\n\
         Book: {}\n\
         Author: {}\n\
         Price: {}\n\
         Shipping Cost: {}\n\
         Total Cost: {}\n\
         {}\n",
        summary.invoice_number,
        summary.customer_name,
        summary.book_title,
        summary.author,
        money(summary.price_cents),
        money(summary.shipping_cents),
        money(summary.total_cents),
        "=".repeat(DIVIDER_WIDTH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order::{place_order, OrderForm};
    use crate::error::ErrorCode;
    use crate::state::Catalog;
    use bookstore_core::{Customer, Stock};

    fn store_with_orders(urgent: &[bool]) -> BookStore {
        let mut catalog = Catalog::new();
        catalog.register_customer(Customer::new("John Doe", "123-456-7890", "john@example.com"));
        catalog.register_stock(Stock::new("Python Programming", "John Smith", Money::from_cents(2999)));

        let mut store = BookStore::new();
        for &is_urgent in urgent {
            let form = OrderForm {
                customer: "John Doe".to_string(),
                book: "Python Programming".to_string(),
                urgent: is_urgent,
            };
            place_order(&catalog, &mut store, &form).unwrap();
        }
        store
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = BookStore::new();
        let err = search_invoice(&store, "INV001").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Invoice not found!");
    }

    #[test]
    fn test_search_requires_a_number() {
        let store = store_with_orders(&[true]);
        let err = search_invoice(&store, "").unwrap_err();
        assert_eq!(err.message, MISSING_NUMBER);
    }

    #[test]
    fn test_search_finds_exact_number() {
        let store = store_with_orders(&[true, false, true]);

        let summary = search_invoice(&store, "INV002").unwrap();
        assert_eq!(summary.invoice_number, "INV002");
        assert_eq!(summary.total_cents, 3394);
        assert!(search_invoice(&store, "INV2").is_err());
    }

    #[test]
    fn test_view_all_in_order() {
        assert!(view_all_invoices(&BookStore::new()).is_empty());

        let store = store_with_orders(&[true, false, true]);
        let numbers: Vec<String> = view_all_invoices(&store)
            .into_iter()
            .map(|s| s.invoice_number)
            .collect();
        assert_eq!(numbers, vec!["INV001", "INV002", "INV003"]);
    }

    #[test]
    fn test_text_template() {
        let store = store_with_orders(&[true]);
        let summary = search_invoice(&store, "INV001").unwrap();

        let text = render_invoice_text(&summary, &ConfigState::default());
        let expected = format!(
            "Invoice Number: INV001\n\
             Customer: John Doe\n\
             Book: Python Programming\n\
             Author: John Smith\n\
             Price: £29.99\n\
             Shipping Cost: £5.45\n\
             Total Cost: £35.44\n\
             {}\n",
            "=".repeat(50)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_many_as_text_and_json() {
        let store = store_with_orders(&[true, false]);
        let summaries = view_all_invoices(&store);

        let text = render_invoices(&summaries, &ConfigState::default()).unwrap();
        assert_eq!(text.matches("Invoice Number: ").count(), 2);
        assert!(text.find("INV001").unwrap() < text.find("INV002").unwrap());

        let config = ConfigState {
            output: OutputFormat::Json,
            ..ConfigState::default()
        };
        let json = render_invoices(&summaries, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["invoiceNumber"], "INV002");
        assert_eq!(value[1]["totalCents"], 3394);
    }
}
