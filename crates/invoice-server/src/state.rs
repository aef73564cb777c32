//! Application State

use std::sync::Arc;

use invoice_core::InvoiceStore;
use invoice_payments::PaymentGateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Invoice persistence (PostgreSQL, or in-memory in tests)
    pub store: Arc<dyn InvoiceStore>,

    /// Hosted checkout provider
    pub gateway: Arc<dyn PaymentGateway>,

    /// Fallback origin for checkout redirect URLs
    pub public_base_url: Arc<str>,
}
