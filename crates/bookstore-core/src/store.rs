//! # BookStore Repository
//!
//! Append-only, in-memory collection of invoices.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    BookStore                                            │
//! │                                                                         │
//! │  add_invoice(inv)        push to the end, O(1), no uniqueness check     │
//! │  search_invoice(nbr)     linear scan, FIRST exact match or None         │
//! │  get_all_invoices()      detached copy, insertion order                 │
//! │  get_invoice_count()     current length, never decreases                │
//! │  next_invoice_number()   "INV" + (count + 1) padded to 3 digits         │
//! │                                                                         │
//! │  There is no removal.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are not deduplicated. If two invoices share a number, search
//! always returns the one added first.

use tracing::debug;

use crate::invoice::Invoice;

/// Prefix of the numbers handed out by [`BookStore::next_invoice_number`].
pub const INVOICE_PREFIX: &str = "INV";

/// Repository of every invoice issued during the session.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    invoices: Vec<Invoice>,
}

impl BookStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BookStore {
            invoices: Vec::new(),
        }
    }

    /// Appends an invoice. Duplicated numbers are accepted.
    pub fn add_invoice(&mut self, invoice: Invoice) {
        debug!(
            invoice_number = %invoice.number(),
            position = self.invoices.len(),
            "Adding invoice"
        );
        self.invoices.push(invoice);
    }

    /// Finds the first invoice whose number equals `invoice_number`
    /// byte-for-byte.
    pub fn search_invoice(&self, invoice_number: &str) -> Option<&Invoice> {
        let found = self
            .invoices
            .iter()
            .find(|invoice| invoice.number() == invoice_number);

        debug!(invoice_number = %invoice_number, found = found.is_some(), "Searched invoices");
        found
    }

    /// Returns a copy of every invoice in insertion order.
    ///
    /// The copy is detached: changing it does not change the store.
    pub fn get_all_invoices(&self) -> Vec<Invoice> {
        self.invoices.clone()
    }

    pub fn get_invoice_count(&self) -> usize {
        self.invoices.len()
    }

    /// Borrowing iterator over the invoices, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// The number the order workflow gives the next invoice.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::BookStore;
    ///
    /// let store = BookStore::new();
    /// assert_eq!(store.next_invoice_number(), "INV001");
    /// ```
    pub fn next_invoice_number(&self) -> String {
        format!("{}{:03}", INVOICE_PREFIX, self.invoices.len() + 1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::shipping::Shipping;
    use crate::types::{Customer, Order, Product, Stock};
    use chrono::Utc;
    use std::sync::Arc;

    fn test_invoice(number: &str, price_cents: i64) -> Invoice {
        let customer = Arc::new(Customer::new("John Doe", "123-456-7890", "john@example.com"));
        let stock = Arc::new(Stock::new("Python Programming", "John Smith", Money::from_cents(price_cents)));
        let mut shipping = Shipping::new(Order::new(customer, Arc::clone(&stock)), Utc::now());
        shipping.set_ship_cost(false);
        let mut invoice = Invoice::new(number, stock, shipping);
        invoice.calculate_total();
        invoice
    }

    fn store_with(numbers: &[&str]) -> BookStore {
        let mut store = BookStore::new();
        for (i, number) in numbers.iter().enumerate() {
            store.add_invoice(test_invoice(number, 1000 + i as i64));
        }
        store
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = BookStore::new();
        assert!(store.search_invoice("INV001").is_none());
        assert_eq!(store.get_invoice_count(), 0);
        assert!(store.is_empty());
        assert!(store.get_all_invoices().is_empty());
    }

    #[test]
    fn test_add_and_search() {
        let store = store_with(&["INV001", "INV002", "INV003"]);

        assert_eq!(store.get_invoice_count(), 3);
        let found = store.search_invoice("INV002").unwrap();
        assert_eq!(found.number(), "INV002");
        assert_eq!(found.stock().price().cents(), 1001);
    }

    #[test]
    fn test_search_is_exact_match() {
        let store = store_with(&["INV001"]);
        assert!(store.search_invoice("inv001").is_none());
        assert!(store.search_invoice("INV001 ").is_none());
        assert!(store.search_invoice("INV00").is_none());
        assert!(store.search_invoice("").is_none());
    }

    #[test]
    fn test_duplicate_numbers_return_first_added() {
        let store = store_with(&["INV001", "DUP", "DUP"]);

        assert_eq!(store.get_invoice_count(), 3);
        let found = store.search_invoice("DUP").unwrap();
        assert_eq!(found.stock().price().cents(), 1001);
    }

    #[test]
    fn test_get_all_preserves_order_and_is_detached() {
        let store = store_with(&["INV001", "INV002", "INV003"]);

        let mut snapshot = store.get_all_invoices();
        let numbers: Vec<&str> = snapshot.iter().map(|i| i.number()).collect();
        assert_eq!(numbers, vec!["INV001", "INV002", "INV003"]);

        snapshot.clear();
        assert_eq!(store.get_invoice_count(), 3);
        assert_eq!(store.get_all_invoices().len(), 3);
    }

    #[test]
    fn test_changing_snapshot_invoice_leaves_store_alone() {
        let store = store_with(&["INV001"]);

        let mut snapshot = store.get_all_invoices();
        snapshot[0].shipping_mut().set_ship_cost(true);
        snapshot[0].calculate_total();

        let stored = store.search_invoice("INV001").unwrap();
        assert_eq!(stored.shipping().count_urgent(), 0);
        assert_eq!(stored.total_cost(), Money::from_cents(1000 + 395));
    }

    #[test]
    fn test_count_tracks_adds() {
        let mut store = BookStore::new();
        for n in 1..=5 {
            store.add_invoice(test_invoice("SAME", 100));
            assert_eq!(store.get_invoice_count(), n);
        }
        assert_eq!(store.iter().count(), 5);
    }

    #[test]
    fn test_next_invoice_number() {
        let mut store = BookStore::new();
        assert_eq!(store.next_invoice_number(), "INV001");

        let number = store.next_invoice_number();
        store.add_invoice(test_invoice(&number, 100));
        assert_eq!(store.next_invoice_number(), "INV002");

        let store = store_with(&["A"; 999]);
        assert_eq!(store.next_invoice_number(), "INV1000");
    }
}
