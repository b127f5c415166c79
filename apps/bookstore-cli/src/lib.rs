//! # Bookstore CLI Library
//!
//! Core library for the bookstore ordering terminal application.
//! This is the main entry point that configures and runs the shell.
//!
//! ## Module Organization
//! ```text
//! bookstore_cli/
//! ├── lib.rs          ◄─── You are here (logging, config & run)
//! ├── shell.rs        ◄─── Prompt loop over stdin/stdout
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── catalog.rs  ◄─── Registered customers and books
//! │   └── config.rs   ◄─── Store name, currency, output format
//! ├── commands/
//! │   ├── customer.rs ◄─── add_customer, list_customers
//! │   ├── book.rs     ◄─── add_book, list_books
//! │   ├── order.rs    ◄─── place_order
//! │   └── invoice.rs  ◄─── search_invoice, view_all_invoices
//! └── error.rs        ◄─── ApiError shown to the user
//! ```
//!
//! ## Session State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState                                                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    Catalog       │ │    BookStore     │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Customers     │ │  • Invoices      │ │  • Store name        │   │
//! │  │  • Books         │ │  • Numbering     │ │  • Currency symbol   │   │
//! │  │                  │ │                  │ │  • Output format     │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Nothing outlives the process.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::Shell;
use state::{AppState, ConfigState};

/// Runs the application against the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • BOOKSTORE_NAME, BOOKSTORE_CURRENCY_SYMBOL, BOOKSTORE_OUTPUT       │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Empty catalog, empty BookStore                                    │
/// │                                                                         │
/// │  4. Run the Shell ────────────────────────────────────────────────────► │
/// │     • Until `quit` or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ConfigState::from_env().context("Failed to load configuration")?;
    info!(
        store_name = %config.store_name,
        output = ?config.output,
        "Starting bookstore shell"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), AppState::new(config));
    shell.run().context("Shell I/O failed")?;

    info!("Bookstore shell exited");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command as it runs
/// - `RUST_LOG=bookstore_core=debug` - Store operations only
/// - Default: WARN level, so rejected forms show up
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
