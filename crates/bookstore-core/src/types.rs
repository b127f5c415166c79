//! # Domain Types
//!
//! The people and things an order is made of.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Stock      │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  customer (Arc) │       │
//! │  │  name           │   │  title          │   │  stock (Arc)    │       │
//! │  │  phone          │   │  author         │   └─────────────────┘       │
//! │  │  email          │   │  price (Money)  │                              │
//! │  └────────┬────────┘   └────────┬────────┘                              │
//! │           │ impl                │ impl                                  │
//! │  ┌────────▼────────┐   ┌────────▼────────┐                              │
//! │  │ trait Contact   │   │ trait Product   │                              │
//! │  │ name/phone/email│   │ name/price      │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Customers and books carry:
//! - `id`: UUID v4, generated at construction, never shown to the user
//! - Business key: the name/title the order form selects by
//!
//! ## Sharing
//! One customer can place many orders and one book can be sold many times,
//! so orders and invoices hold `Arc<Customer>` / `Arc<Stock>` instead of
//! copies.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Capabilities
// =============================================================================

/// Anything that can be contacted: a name, a phone number, an email.
pub trait Contact {
    fn name(&self) -> &str;
    fn phone(&self) -> &str;
    fn email(&self) -> &str;
}

/// Anything that can be sold: a display name and a price.
pub trait Product {
    fn name(&self) -> &str;
    fn price(&self) -> Money;
}

// =============================================================================
// Customer
// =============================================================================

/// A person who places orders. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    phone: String,
    email: String,
}

impl Customer {
    /// Creates a customer with a fresh UUID.
    ///
    /// No validation happens here; the form layer checks presence first.
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Unique identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Contact for Customer {
    fn name(&self) -> &str {
        &self.name
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn email(&self) -> &str {
        &self.email
    }
}

// =============================================================================
// Stock
// =============================================================================

/// A book on the shelf: title, author and price.
///
/// There is no quantity; a `Stock` describes an item, not a count of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    id: String,
    title: String,
    author: String,
    /// Expected to be non-negative; not enforced.
    price: Money,
}

impl Stock {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: Money) -> Self {
        Stock {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Unique identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl Product for Stock {
    /// A book's product name is its title.
    fn name(&self) -> &str {
        &self.title
    }

    fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Order
// =============================================================================

/// One customer buying one book. Holds no state of its own.
#[derive(Debug, Clone)]
pub struct Order {
    customer: Arc<Customer>,
    stock: Arc<Stock>,
}

impl Order {
    pub fn new(customer: Arc<Customer>, stock: Arc<Stock>) -> Self {
        Order { customer, stock }
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn stock(&self) -> &Arc<Stock> {
        &self.stock
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_is_a_contact() {
        let customer = Customer::new("John Doe", "123-456-7890", "john@example.com");
        assert_eq!(customer.name(), "John Doe");
        assert_eq!(customer.phone(), "123-456-7890");
        assert_eq!(customer.email(), "john@example.com");
        assert!(Uuid::parse_str(customer.id()).is_ok());
    }

    #[test]
    fn test_stock_is_a_product() {
        let stock = Stock::new("Python Programming", "John Smith", Money::from_cents(2999));
        assert_eq!(stock.title(), "Python Programming");
        assert_eq!(stock.author(), "John Smith");

        // Through the capability, the title is the product name
        let product: &dyn Product = &stock;
        assert_eq!(product.name(), "Python Programming");
        assert_eq!(product.price(), Money::from_cents(2999));
    }

    #[test]
    fn test_ids_are_unique_per_instance() {
        let a = Customer::new("Jane", "1", "j@example.com");
        let b = Customer::new("Jane", "1", "j@example.com");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_orders_share_customer_and_stock() {
        let customer = Arc::new(Customer::new("Jane Smith", "098-765-4321", "jane@example.com"));
        let stock = Arc::new(Stock::new("Data Science Basics", "Mary Johnson", Money::from_cents(3999)));

        let first = Order::new(Arc::clone(&customer), Arc::clone(&stock));
        let second = Order::new(Arc::clone(&customer), Arc::clone(&stock));

        assert!(Arc::ptr_eq(first.customer(), second.customer()));
        assert!(Arc::ptr_eq(first.stock(), second.stock()));
        assert_eq!(Arc::strong_count(&stock), 3);
    }
}
