//! # Book Commands
//!
//! Book entry screen: register a book, list the registered titles.
//!
//! The price is checked before the text fields, so a form with an empty
//! title AND a bad price reports the price.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstore_core::validation::{parse_price, require};
use bookstore_core::{Product, Stock};

use crate::error::ApiError;
use crate::state::Catalog;

pub const INVALID_PRICE: &str = "Please enter a valid price!";
pub const MISSING_DETAILS: &str = "Please fill all book details!";
pub const ADDED: &str = "Book added successfully!";

/// What the book form submits. The price arrives as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub price: String,
}

/// A registered book as shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
}

impl From<&Stock> for BookDto {
    fn from(stock: &Stock) -> Self {
        BookDto {
            id: stock.id().to_string(),
            title: stock.title().to_string(),
            author: stock.author().to_string(),
            price_cents: stock.price().cents(),
        }
    }
}

/// Registers a book.
pub fn add_book(catalog: &mut Catalog, form: &BookForm) -> Result<BookDto, ApiError> {
    debug!(title = %form.title, price = %form.price, "add_book command");

    let price = parse_price(&form.price).map_err(|e| {
        warn!(error = %e, "Book price rejected");
        ApiError::validation(INVALID_PRICE)
    })?;

    let details = require("title", &form.title)
        .and_then(|title| Ok((title, require("author", &form.author)?)));

    let (title, author) = details.map_err(|e| {
        warn!(error = %e, "Book form rejected");
        ApiError::validation(MISSING_DETAILS)
    })?;

    let stock = catalog.register_stock(Stock::new(title, author, price));
    info!(stock_id = %stock.id(), title = %stock.title(), price = %stock.price(), "Book registered");

    Ok(BookDto::from(stock.as_ref()))
}

/// Titles for the order screen's book picker.
pub fn list_books(catalog: &Catalog) -> Vec<String> {
    debug!("list_books command");
    catalog.book_titles()
}
