//! # Customer Commands
//!
//! Customer entry screen: register a customer, list the registered names.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstore_core::validation::require;
use bookstore_core::{Contact, Customer};

use crate::error::ApiError;
use crate::state::Catalog;

pub const MISSING_DETAILS: &str = "Please fill all customer details!";
pub const ADDED: &str = "Customer added successfully!";

/// What the customer form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A registered customer as shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        CustomerDto {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            phone: customer.phone().to_string(),
            email: customer.email().to_string(),
        }
    }
}

/// Registers a customer.
///
/// ## Rules
/// - Name, phone and email are all required (non-empty after trimming)
/// - Nothing is registered if any field is missing
pub fn add_customer(catalog: &mut Catalog, form: &CustomerForm) -> Result<CustomerDto, ApiError> {
    debug!(name = %form.name, "add_customer command");

    let details = require("name", &form.name).and_then(|name| {
        Ok((name, require("phone", &form.phone)?, require("email", &form.email)?))
    });

    let (name, phone, email) = details.map_err(|e| {
        warn!(error = %e, "Customer form rejected");
        ApiError::validation(MISSING_DETAILS)
    })?;

    let customer = catalog.register_customer(Customer::new(name, phone, email));
    info!(customer_id = %customer.id(), name = %customer.name(), "Customer registered");

    Ok(CustomerDto::from(customer.as_ref()))
}

/// Names for the order screen's customer picker.
pub fn list_customers(catalog: &Catalog) -> Vec<String> {
    debug!("list_customers command");
    catalog.customer_names()
}
