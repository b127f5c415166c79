//! # Commands Module
//!
//! One handler per action the shell offers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── add_customer, list_customers
//! ├── book.rs      ◄─── add_book, list_books
//! ├── order.rs     ◄─── place_order
//! └── invoice.rs   ◄─── search_invoice, view_all_invoices, rendering
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn add_customer(catalog: &mut Catalog, form: &CustomerForm)
//!
//! // Only needs the store
//! fn search_invoice(store: &BookStore, invoice_number: &str)
//!
//! // Needs both
//! fn place_order(catalog: &Catalog, store: &mut BookStore, form: &OrderForm)
//! ```

pub mod book;
pub mod customer;
pub mod invoice;
pub mod order;
