//! # Catalog State
//!
//! Customers and books registered during the session. These are what the
//! order screen lets you pick from.
//!
//! ## Selection by Name
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_customer(c) ──► customers.push(Arc<Customer>)                │
//! │  register_stock(s) ─────► stocks.push(Arc<Stock>)                      │
//! │                                                                         │
//! │  find_customer("Jane") ─► first customer named exactly "Jane"          │
//! │  find_stock("Rust") ────► first book titled exactly "Rust"             │
//! │                                                                         │
//! │  Names are not unique. Registering a second "Jane" keeps the first     │
//! │  one selectable by that name and the second one unreachable.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use bookstore_core::{Contact, CoreError, CoreResult, Customer, Stock};

#[derive(Debug, Default)]
pub struct Catalog {
    customers: Vec<Arc<Customer>>,
    stocks: Vec<Arc<Stock>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn register_customer(&mut self, customer: Customer) -> Arc<Customer> {
        let customer = Arc::new(customer);
        self.customers.push(Arc::clone(&customer));
        customer
    }

    pub fn register_stock(&mut self, stock: Stock) -> Arc<Stock> {
        let stock = Arc::new(stock);
        self.stocks.push(Arc::clone(&stock));
        stock
    }

    /// First registered customer with exactly this name.
    pub fn find_customer(&self, name: &str) -> CoreResult<Arc<Customer>> {
        self.customers
            .iter()
            .find(|c| c.name() == name)
            .cloned()
            .ok_or_else(|| CoreError::CustomerNotFound(name.to_string()))
    }

    /// First registered book with exactly this title.
    pub fn find_stock(&self, title: &str) -> CoreResult<Arc<Stock>> {
        self.stocks
            .iter()
            .find(|s| s.title() == title)
            .cloned()
            .ok_or_else(|| CoreError::StockNotFound(title.to_string()))
    }

    /// Customer names in registration order (the customer dropdown).
    pub fn customer_names(&self) -> Vec<String> {
        self.customers.iter().map(|c| c.name().to_string()).collect()
    }

    /// Book titles in registration order (the book dropdown).
    pub fn book_titles(&self) -> Vec<String> {
        self.stocks.iter().map(|s| s.title().to_string()).collect()
    }
}
