//! # Order Commands
//!
//! Turns a (customer, book, urgent?) selection into a stored invoice.
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(customer name, book title, urgent)                        │
//! │       │                                                                 │
//! │       ├── either selection empty? ──► "Please select both ..."         │
//! │       │                                                                 │
//! │       ├── no match in catalog? ─────► "Invalid customer or book ..."   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order(customer, book)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shipping(order, now).set_ship_cost(urgent)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Invoice(store.next_invoice_number(), book, shipping)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_total() ──► store.add_invoice()                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstore_core::{BookStore, CoreError, Invoice, Order, Shipping, ShippingTier};

use crate::error::ApiError;
use crate::state::Catalog;

pub const MISSING_SELECTION: &str = "Please select both customer and book!";
pub const PLACED: &str = "Order placed successfully!";

/// What the order form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderForm {
    /// Customer name as picked from the list
    pub customer: String,
    /// Book title as picked from the list
    pub book: String,
    /// The "urgent shipping" checkbox
    pub urgent: bool,
}

/// Confirmation shown after an order goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub invoice_number: String,
    pub shipping_tier: ShippingTier,
    pub total_cents: i64,
}

/// Places an order and files its invoice in the store.
pub fn place_order(
    catalog: &Catalog,
    store: &mut BookStore,
    form: &OrderForm,
) -> Result<OrderReceipt, ApiError> {
    debug!(customer = %form.customer, book = %form.book, urgent = form.urgent, "place_order command");

    let customer_name = form.customer.trim();
    let book_title = form.book.trim();

    if customer_name.is_empty() || book_title.is_empty() {
        return Err(ApiError::validation(MISSING_SELECTION));
    }

    let (customer, stock) = match (
        catalog.find_customer(customer_name),
        catalog.find_stock(book_title),
    ) {
        (Ok(customer), Ok(stock)) => (customer, stock),
        (customer, stock) => {
            warn!(
                customer_found = customer.is_ok(),
                book_found = stock.is_ok(),
                "Stale order selection"
            );
            return Err(CoreError::InvalidSelection {
                customer: customer_name.to_string(),
                book: book_title.to_string(),
            }
            .into());
        }
    };

    let mut shipping = Shipping::new(Order::new(customer, Arc::clone(&stock)), Utc::now());
    shipping.set_ship_cost(form.urgent);

    let invoice_number = store.next_invoice_number();
    let mut invoice = Invoice::new(invoice_number.clone(), stock, shipping);
    let total = invoice.calculate_total();
    store.add_invoice(invoice);

    info!(invoice_number = %invoice_number, total = %total, "Order placed");

    Ok(OrderReceipt {
        invoice_number,
        shipping_tier: ShippingTier::from_urgent(form.urgent),
        total_cents: total.cents(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::book::{add_book, BookForm};
    use crate::error::ErrorCode;
    use bookstore_core::money::MAX_PARSED_CENTS;
    use bookstore_core::{Contact, Customer, Money, Stock};

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_customer(Customer::new("John Doe", "123-456-7890", "john@example.com"));
        catalog.register_customer(Customer::new("Jane Smith", "098-765-4321", "jane@example.com"));
        catalog.register_stock(Stock::new("Python Programming", "John Smith", Money::from_cents(2999)));
        catalog.register_stock(Stock::new("Data Science Basics", "Mary Johnson", Money::from_cents(3999)));
        catalog
    }

    fn form(customer: &str, book: &str, urgent: bool) -> OrderForm {
        OrderForm {
            customer: customer.to_string(),
            book: book.to_string(),
            urgent,
        }
    }

    #[test]
    fn test_urgent_order() {
        let catalog = seeded_catalog();
        let mut store = BookStore::new();

        let receipt = place_order(&catalog, &mut store, &form("John Doe", "Python Programming", true)).unwrap();
        assert_eq!(receipt.invoice_number, "INV001");
        assert_eq!(receipt.shipping_tier, ShippingTier::Urgent);
        assert_eq!(receipt.total_cents, 3544);

        let invoice = store.search_invoice("INV001").unwrap();
        assert_eq!(invoice.shipping().count_urgent(), 1);
        assert_eq!(invoice.total_cost(), Money::from_cents(3544));
    }

    #[test]
    fn test_standard_order_and_numbering() {
        let catalog = seeded_catalog();
        let mut store = BookStore::new();

        place_order(&catalog, &mut store, &form("John Doe", "Python Programming", true)).unwrap();
        let receipt = place_order(&catalog, &mut store, &form("Jane Smith", "Python Programming", false)).unwrap();

        assert_eq!(receipt.invoice_number, "INV002");
        assert_eq!(receipt.total_cents, 3394);
        assert_eq!(store.get_invoice_count(), 2);

        let second = store.search_invoice("INV002").unwrap();
        assert_eq!(second.customer().email(), "jane@example.com");
    }

    #[test]
    fn test_largest_accepted_price_totals_without_overflow() {
        let mut catalog = seeded_catalog();
        let book = BookForm {
            title: "Priceless".to_string(),
            author: "Nobody".to_string(),
            price: "46116860184273879.03".to_string(),
        };
        add_book(&mut catalog, &book).unwrap();
        let mut store = BookStore::new();

        let receipt = place_order(&catalog, &mut store, &form("John Doe", "Priceless", true)).unwrap();
        assert_eq!(receipt.total_cents, MAX_PARSED_CENTS + 545);
    }

    #[test]
    fn test_missing_selection() {
        let catalog = seeded_catalog();
        let mut store = BookStore::new();

        for bad in [form("", "Python Programming", false), form("John Doe", "  ", true)] {
            let err = place_order(&catalog, &mut store, &bad).unwrap_err();
            assert_eq!(err.message, MISSING_SELECTION);
        }
        assert_eq!(store.get_invoice_count(), 0);
    }

    #[test]
    fn test_stale_selection() {
        let catalog = seeded_catalog();
        let mut store = BookStore::new();

        let err = place_order(&catalog, &mut store, &form("Ghost", "Python Programming", false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid customer or book selection!");

        let err = place_order(&catalog, &mut store, &form("John Doe", "Unwritten Book", false)).unwrap_err();
        assert_eq!(err.message, "Invalid customer or book selection!");
        assert_eq!(store.get_invoice_count(), 0);
    }
}
