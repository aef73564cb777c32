//! Invoice Request Validation
//!
//! Field-level checks applied before anything is sent to the payment
//! processor. All failures are collected so the form can mark every bad
//! field at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::money::to_minor_units;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Incoming invoice submission
///
/// Every field is optional at the wire level so a missing field is
/// reported per field instead of failing the whole body.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub client_email: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A single field failure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedInvoice {
    pub amount: Decimal,

    /// `round(amount * 100)`
    pub amount_minor: i64,

    pub client_email: String,

    pub description: String,
}

impl CreateInvoiceRequest {
    /// Check every field, returning all failures together
    pub fn validate(self) -> Result<ValidatedInvoice, Vec<FieldError>> {
        let mut errors = Vec::new();

        let amount = match self.amount {
            None => {
                errors.push(FieldError::new("amount", "Amount is required"));
                None
            }
            Some(amount) if amount <= Decimal::ZERO => {
                errors.push(FieldError::new("amount", "Amount must be greater than 0"));
                None
            }
            Some(amount) => match to_minor_units(amount) {
                Some(minor) => Some((amount, minor)),
                None => {
                    errors.push(FieldError::new("amount", "Amount is too large"));
                    None
                }
            },
        };

        let client_email = match self.client_email {
            None => {
                errors.push(FieldError::new("clientEmail", "Email is required"));
                None
            }
            Some(email) if !email.validate_email() => {
                errors.push(FieldError::new("clientEmail", "Invalid email address"));
                None
            }
            Some(email) => Some(email),
        };

        let description = match self.description {
            None => {
                errors.push(FieldError::new("description", "Description is required"));
                None
            }
            Some(text) if text.is_empty() => {
                errors.push(FieldError::new("description", "Description is required"));
                None
            }
            Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
                errors.push(FieldError::new("description", "Description too long"));
                None
            }
            Some(text) => Some(text),
        };

        match (amount, client_email, description) {
            (Some((amount, amount_minor)), Some(client_email), Some(description))
                if errors.is_empty() =>
            {
                Ok(ValidatedInvoice {
                    amount,
                    amount_minor,
                    client_email,
                    description,
                })
            }
            _ => Err(errors),
        }
    }
}
