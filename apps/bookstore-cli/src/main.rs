//! # Bookstore Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         bookstore (binary)                              │
//! │                                                                         │
//! │  main.rs ────► Hands off to bookstore_cli::run                         │
//! │                                                                         │
//! │  lib.rs ─────► Logging, configuration, shell                           │
//! │                                                                         │
//! │  commands/ ──► add_customer, add_book, place_order, search_invoice     │
//! │                                                                         │
//! │  bookstore-core ──► Customer, Stock, Order, Shipping, Invoice,         │
//! │                     BookStore                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Environment
//! - `BOOKSTORE_NAME` - banner text
//! - `BOOKSTORE_CURRENCY_SYMBOL` - prefix for amounts (default `£`)
//! - `BOOKSTORE_OUTPUT` - `text` or `json`
//! - `RUST_LOG` - log filter, logs go to stderr

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for testability
    bookstore_cli::run()
}
