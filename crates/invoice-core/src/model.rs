//! Invoice Model
//!
//! The single persisted entity: an invoice and the hosted payment link
//! issued for it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvoiceError;
use crate::validation::ValidatedInvoice;

/// Payment status of an invoice
///
/// Only `Pending` is written by the submission flow. `Paid` and `Failed`
/// exist for records reconciled out of band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl InvoiceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            other => Err(InvoiceError::UnknownStatus(other.to_string())),
        }
    }
}

/// A persisted invoice
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,

    /// Amount in currency units (dollars, not cents)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub client_email: String,

    pub description: String,

    /// Hosted checkout URL, set once at creation
    pub payment_link: String,

    pub status: InvoiceStatus,

    pub created_at: DateTime<Utc>,
}

/// Invoice data ready to be written
///
/// There is no status field: stores always write `InvoiceStatus::Pending`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInvoice {
    pub amount: Decimal,
    pub client_email: String,
    pub description: String,
    pub payment_link: String,
}

impl NewInvoice {
    /// Pair validated input with the checkout URL returned by the processor
    pub fn new(input: ValidatedInvoice, payment_link: impl Into<String>) -> Self {
        Self {
            amount: input.amount,
            client_email: input.client_email,
            description: input.description,
            payment_link: payment_link.into(),
        }
    }

    /// Materialize as a pending invoice with the given identity
    pub fn into_invoice(self, id: Uuid, created_at: DateTime<Utc>) -> Invoice {
        Invoice {
            id,
            amount: self.amount,
            client_email: self.client_email,
            description: self.description,
            payment_link: self.payment_link,
            status: InvoiceStatus::Pending,
            created_at,
        }
    }
}
