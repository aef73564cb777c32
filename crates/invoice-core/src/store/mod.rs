//! Invoice Persistence
//!
//! Abstractions and implementations for invoice storage.

mod memory;
mod postgres;

pub use memory::MemoryInvoiceStore;
pub use postgres::PgInvoiceStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Invoice, NewInvoice};

/// Number of invoices shown by the list view
pub const RECENT_INVOICE_LIMIT: usize = 10;

/// Invoice store trait (Strategy pattern)
///
/// Implemented by the PostgreSQL store and an in-memory store for
/// development and tests.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Write a new invoice with status `pending`
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Most recently created invoices first, at most `limit`
    async fn recent(&self, limit: usize) -> Result<Vec<Invoice>>;

    /// Check if the backing store is reachable
    async fn health_check(&self) -> bool;

    /// Store name
    fn name(&self) -> &str;
}
