//! # Interactive Shell
//!
//! Line-oriented front end over any reader/writer pair.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer   ──► Name / Phone / Email             ──► add_customer      │
//! │  book       ──► Book Name / Author / Price       ──► add_book          │
//! │  order      ──► Customer / Book / Urgent? [y/N]  ──► place_order       │
//! │  search     ──► Invoice Number                   ──► search_invoice    │
//! │  invoices   ──────────────────────────────────────► view_all_invoices  │
//! │  customers, books ────────────────────────────────► pickers' contents  │
//! │  help, quit                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed command prints its message and the loop keeps going. End of
//! input, at any prompt, ends the session.
//!
//! Field input is passed on as typed, minus the line ending. Text fields and
//! selections are trimmed by their commands; the invoice number is matched
//! exactly, so `"INV001 "` does not find `INV001`.

use std::io::{self, BufRead, Write};

use bookstore_core::Money;
use serde::Serialize;
use tracing::debug;

use crate::commands::{book, customer, invoice, order};
use crate::error::ApiError;
use crate::state::{AppState, OutputFormat};

const HELP: &str = "\
Commands:
  customer    add a customer
  book        add a book
  order       place an order
  search      find an invoice by number
  invoices    show every invoice
  customers   list customer names
  books       list book titles
  help        show this list
  quit        leave";

/// Drives the session: reads commands, prompts for fields, prints results.
pub struct Shell<R, W> {
    input: R,
    output: W,
    state: AppState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, state: AppState) -> Self {
        Shell {
            input,
            output,
            state,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.state.config.store_name)?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        while let Some(line) = self.prompt("> ")? {
            let keep_going = match line.trim() {
                "" => true,
                "customer" => self.add_customer()?,
                "book" => self.add_book()?,
                "order" => self.place_order()?,
                "search" => self.search_invoice()?,
                "invoices" => self.view_all_invoices()?,
                "customers" => {
                    let names = customer::list_customers(&self.state.catalog);
                    self.print_list("Customers", &names)?;
                    true
                }
                "books" => {
                    let titles = book::list_books(&self.state.catalog);
                    self.print_list("Books", &titles)?;
                    true
                }
                "help" => {
                    writeln!(self.output, "{}", HELP)?;
                    true
                }
                "quit" | "exit" => false,
                other => {
                    writeln!(
                        self.output,
                        "Unknown command: {}. Type 'help' for a list of commands.",
                        other
                    )?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        debug!(
            invoices = self.state.store.get_invoice_count(),
            "Shell loop finished"
        );
        Ok(())
    }

    // =========================================================================
    // Screens
    // =========================================================================
    // Each returns Ok(false) when input ran out mid-form.

    fn add_customer(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Name: ")? else { return Ok(false) };
        let Some(phone) = self.prompt("Phone: ")? else { return Ok(false) };
        let Some(email) = self.prompt("Email: ")? else { return Ok(false) };

        let form = customer::CustomerForm { name, phone, email };
        match customer::add_customer(&mut self.state.catalog, &form) {
            Ok(dto) => self.success(customer::ADDED, &dto)?,
            Err(e) => self.error(&e)?,
        }
        Ok(true)
    }

    fn add_book(&mut self) -> io::Result<bool> {
        let Some(title) = self.prompt("Book Name: ")? else { return Ok(false) };
        let Some(author) = self.prompt("Author: ")? else { return Ok(false) };
        let Some(price) = self.prompt("Price: ")? else { return Ok(false) };

        let form = book::BookForm { title, author, price };
        match book::add_book(&mut self.state.catalog, &form) {
            Ok(dto) => self.success(book::ADDED, &dto)?,
            Err(e) => self.error(&e)?,
        }
        Ok(true)
    }

    fn place_order(&mut self) -> io::Result<bool> {
        let names = customer::list_customers(&self.state.catalog);
        self.print_list("Customers", &names)?;
        let Some(customer) = self.prompt("Select Customer: ")? else { return Ok(false) };

        let titles = book::list_books(&self.state.catalog);
        self.print_list("Books", &titles)?;
        let Some(book) = self.prompt("Select Book: ")? else { return Ok(false) };

        let Some(urgent) = self.prompt("Urgent Shipping? [y/N]: ")? else { return Ok(false) };

        let form = order::OrderForm {
            customer,
            book,
            urgent: parse_yes(&urgent),
        };
        match order::place_order(&self.state.catalog, &mut self.state.store, &form) {
            Ok(receipt) => {
                let total = self
                    .state
                    .config
                    .format_currency(Money::from_cents(receipt.total_cents));
                let message = format!(
                    "{}\nInvoice Number: {}\nTotal Cost: {}",
                    order::PLACED,
                    receipt.invoice_number,
                    total
                );
                self.success(&message, &receipt)?;
            }
            Err(e) => self.error(&e)?,
        }
        Ok(true)
    }

    fn search_invoice(&mut self) -> io::Result<bool> {
        let Some(number) = self.prompt("Invoice Number: ")? else { return Ok(false) };

        let rendered = invoice::search_invoice(&self.state.store, &number).and_then(|summary| {
            invoice::render_invoices(std::slice::from_ref(&summary), &self.state.config)
        });
        match rendered {
            Ok(text) => write!(self.output, "{}", text)?,
            Err(e) => self.error(&e)?,
        }
        Ok(true)
    }

    fn view_all_invoices(&mut self) -> io::Result<bool> {
        let summaries = invoice::view_all_invoices(&self.state.store);
        if summaries.is_empty() {
            writeln!(self.output, "Info: {}", invoice::NONE_FOUND)?;
            return Ok(true);
        }

        match invoice::render_invoices(&summaries, &self.state.config) {
            Ok(text) => write!(self.output, "{}", text)?,
            Err(e) => self.error(&e)?,
        }
        Ok(true)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Prints `label`, reads one line without its line ending. `None` at end
    /// of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let content_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(content_len);
        Ok(Some(line))
    }

    fn print_list(&mut self, heading: &str, items: &[String]) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(self.output, "{}: (none)", heading);
        }
        writeln!(self.output, "{}:", heading)?;
        for item in items {
            writeln!(self.output, "  {}", item)?;
        }
        Ok(())
    }

    /// Text mode prints the message; JSON mode prints what was created.
    fn success<T: Serialize>(&mut self, message: &str, created: &T) -> io::Result<()> {
        match self.state.config.output {
            OutputFormat::Text => writeln!(self.output, "Success: {}", message),
            OutputFormat::Json => {
                let json = serde_json::to_string(created).map_err(io::Error::from)?;
                writeln!(self.output, "{}", json)
            }
        }
    }

    fn error(&mut self, err: &ApiError) -> io::Result<()> {
        match self.state.config.output {
            OutputFormat::Text => writeln!(self.output, "Error: {}", err.message),
            OutputFormat::Json => {
                let json = serde_json::to_string(err).map_err(io::Error::from)?;
                writeln!(self.output, "{}", json)
            }
        }
    }
}

/// Reads a y/N answer; anything that is not a clear yes is no.
fn parse_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}
