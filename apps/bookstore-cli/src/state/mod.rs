//! # State Module
//!
//! Session state for the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Catalog    │  │  BookStore   │  │   ConfigState    │              │
//! │  │              │  │  (core)      │  │                  │              │
//! │  │  customers   │  │  invoices    │  │  store_name      │              │
//! │  │  books       │  │              │  │  currency_symbol │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Single thread: the shell owns everything and lends it to commands.    │
//! │  Each command takes only the pieces it needs.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::Catalog;
pub use config::{ConfigError, ConfigState, OutputFormat};

use bookstore_core::BookStore;

/// Everything a session accumulates. Lives as long as the process.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub store: BookStore,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(config: ConfigState) -> Self {
        AppState {
            catalog: Catalog::new(),
            store: BookStore::new(),
            config,
        }
    }
}
