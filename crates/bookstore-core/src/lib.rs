//! # bookstore-core: Pure Business Logic for the Bookstore
//!
//! Customers, books, orders, shipping, invoices and the invoice repository.
//! No I/O: the terminal front end lives in `bookstore-cli`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Shell (bookstore-cli)                  │   │
//! │  │    customer ──► book ──► order ──► search / invoices            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  types   │  │ shipping │  │ invoice  │  │    store     │   │   │
//! │  │   │ Customer │  │ Shipping │  │ Invoice  │  │  BookStore   │   │   │
//! │  │   │  Stock   │  │   Tier   │  │ Summary  │  │              │   │   │
//! │  │   │  Order   │  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │   └──────────┘                                                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Customer, Stock, Order and the `Contact` / `Product` capabilities
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`shipping`] - Delivery tiers and the urgent counter
//! - [`invoice`] - Invoice totals and the flat summary view
//! - [`store`] - The append-only `BookStore` repository
//! - [`error`] - Domain error types
//! - [`validation`] - Form-field checks
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use bookstore_core::{BookStore, Customer, Invoice, Money, Order, Shipping, Stock};
//!
//! let customer = Arc::new(Customer::new("John Doe", "123-456-7890", "john@example.com"));
//! let stock = Arc::new(Stock::new("Python Programming", "John Smith", Money::from_cents(2999)));
//!
//! let mut shipping = Shipping::new(Order::new(customer, Arc::clone(&stock)), Utc::now());
//! shipping.set_ship_cost(true); // urgent: 5.45
//!
//! let mut invoice = Invoice::new("INV001", stock, shipping);
//! assert_eq!(invoice.calculate_total(), Money::from_cents(3544));
//!
//! let mut store = BookStore::new();
//! store.add_invoice(invoice);
//! assert!(store.search_invoice("INV001").is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod money;
pub mod shipping;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceSummary};
pub use money::Money;
pub use shipping::{Shipping, ShippingTier, STANDARD_COST, URGENT_COST};
pub use store::BookStore;
pub use types::*;
