//! # Invoice
//!
//! Bills one order: the book's price plus the delivery cost.
//!
//! ## Total Lifecycle
//! ```text
//! Invoice::new ──► total: None (reads as 0.00)
//!      │
//!      ▼
//! calculate_total() ──► total = stock.price + shipping.calc_ship_cost()
//!      │
//!      ▼
//! shipping_mut().set_ship_cost(..) ──► stored total is now stale
//!      │
//!      ▼
//! calculate_total() again to refresh it
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::money::Money;
use crate::shipping::{Shipping, ShippingTier};
use crate::types::{Contact, Customer, Product, Stock};

/// An invoice for a single order.
#[derive(Debug, Clone)]
pub struct Invoice {
    /// Caller-supplied identifier, expected (not enforced) to be unique.
    number: String,
    stock: Arc<Stock>,
    shipping: Shipping,
    /// `None` until `calculate_total` runs.
    total: Option<Money>,
}

impl Invoice {
    pub fn new(number: impl Into<String>, stock: Arc<Stock>, shipping: Shipping) -> Self {
        Invoice {
            number: number.into(),
            stock,
            shipping,
            total: None,
        }
    }

    /// Computes book price plus current delivery cost, stores it and
    /// returns it.
    ///
    /// Nothing is observed: if the shipping tier changes afterwards, call
    /// this again.
    pub fn calculate_total(&mut self) -> Money {
        let total = self.stock.price() + self.shipping.calc_ship_cost();
        self.total = Some(total);
        total
    }

    /// The last computed total; zero if never computed.
    pub fn total_cost(&self) -> Money {
        self.total.unwrap_or_default()
    }

    /// The last computed total, or `None` if never computed.
    pub fn total(&self) -> Option<Money> {
        self.total
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn stock(&self) -> &Arc<Stock> {
        &self.stock
    }

    pub fn shipping(&self) -> &Shipping {
        &self.shipping
    }

    /// Mutable access to the delivery details. The stored total is not
    /// refreshed by changes made through this reference.
    pub fn shipping_mut(&mut self) -> &mut Shipping {
        &mut self.shipping
    }

    /// The customer who placed the underlying order.
    pub fn customer(&self) -> &Customer {
        self.shipping.order().customer()
    }
}

// =============================================================================
// Invoice Summary (DTO)
// =============================================================================

/// Flat, serializable view of an invoice for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub invoice_number: String,
    pub customer_name: String,
    pub book_title: String,
    pub author: String,
    pub price_cents: i64,
    pub shipping_tier: Option<ShippingTier>,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        InvoiceSummary {
            invoice_number: invoice.number().to_string(),
            customer_name: invoice.customer().name().to_string(),
            book_title: invoice.stock().title().to_string(),
            author: invoice.stock().author().to_string(),
            price_cents: invoice.stock().price().cents(),
            shipping_tier: invoice.shipping().tier(),
            shipping_cents: invoice.shipping().calc_ship_cost().cents(),
            total_cents: invoice.total_cost().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;
    use chrono::Utc;

    fn python_book() -> Arc<Stock> {
        Arc::new(Stock::new("Python Programming", "John Smith", Money::from_cents(2999)))
    }

    fn test_invoice(number: &str, is_urgent: bool) -> Invoice {
        let customer = Arc::new(Customer::new("John Doe", "123-456-7890", "john@example.com"));
        let stock = python_book();
        let mut shipping = Shipping::new(Order::new(customer, Arc::clone(&stock)), Utc::now());
        shipping.set_ship_cost(is_urgent);
        Invoice::new(number, stock, shipping)
    }

    #[test]
    fn test_urgent_total() {
        let mut invoice = test_invoice("INV001", true);
        assert_eq!(invoice.calculate_total(), Money::from_cents(3544));
        assert_eq!(invoice.total_cost().to_string(), "35.44");
    }

    #[test]
    fn test_standard_total() {
        let mut invoice = test_invoice("INV001", false);
        assert_eq!(invoice.calculate_total(), Money::from_cents(3394));
        assert_eq!(invoice.total(), Some(Money::from_cents(3394)));
    }

    #[test]
    fn test_total_is_unset_until_calculated() {
        let invoice = test_invoice("INV001", true);
        assert_eq!(invoice.total(), None);
        assert_eq!(invoice.total_cost(), Money::zero());
    }

    #[test]
    fn test_total_without_shipping_tier_is_book_price() {
        let customer = Arc::new(Customer::new("Bob Wilson", "111-222-3333", "bob@example.com"));
        let stock = python_book();
        let shipping = Shipping::new(Order::new(customer, Arc::clone(&stock)), Utc::now());
        let mut invoice = Invoice::new("INV009", stock, shipping);

        assert_eq!(invoice.calculate_total(), Money::from_cents(2999));
    }

    #[test]
    fn test_total_goes_stale_until_recalculated() {
        let mut invoice = test_invoice("INV001", false);
        invoice.calculate_total();

        invoice.shipping_mut().set_ship_cost(true);
        // Stored value is untouched...
        assert_eq!(invoice.total_cost(), Money::from_cents(3394));
        // ...until asked again
        assert_eq!(invoice.calculate_total(), Money::from_cents(3544));
        assert_eq!(invoice.total_cost(), Money::from_cents(3544));
        assert_eq!(invoice.shipping().count_urgent(), 1);
    }

    #[test]
    fn test_calculate_total_is_idempotent() {
        let mut invoice = test_invoice("INV001", true);
        let first = invoice.calculate_total();
        let second = invoice.calculate_total();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_from_invoice() {
        let mut invoice = test_invoice("INV007", true);
        invoice.calculate_total();

        let summary = InvoiceSummary::from(&invoice);
        assert_eq!(summary.invoice_number, "INV007");
        assert_eq!(summary.customer_name, "John Doe");
        assert_eq!(summary.book_title, "Python Programming");
        assert_eq!(summary.author, "John Smith");
        assert_eq!(summary.price_cents, 2999);
        assert_eq!(summary.shipping_tier, Some(ShippingTier::Urgent));
        assert_eq!(summary.shipping_cents, 545);
        assert_eq!(summary.total_cents, 3544);
    }

    #[test]
    fn test_summary_json_shape() {
        let mut invoice = test_invoice("INV001", false);
        invoice.calculate_total();

        let value = serde_json::to_value(InvoiceSummary::from(&invoice)).unwrap();
        assert_eq!(value["invoiceNumber"], "INV001");
        assert_eq!(value["shippingTier"], "standard");
        assert_eq!(value["totalCents"], 3394);
    }
}
