//! In-memory invoice store (for development and tests)

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::InvoiceStore;
use crate::error::Result;
use crate::model::{Invoice, NewInvoice};

/// Invoices kept in insertion order
#[derive(Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<Vec<Invoice>>,
}

impl MemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored invoices
    pub async fn len(&self) -> usize {
        self.invoices.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.invoices.read().await.is_empty()
    }
}

#[async_trait]
impl InvoiceStore for MemoryInvoiceStore {
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let invoice = invoice.into_invoice(Uuid::new_v4(), Utc::now());
        self.invoices.write().await.push(invoice.clone());

        tracing::debug!(invoice_id = %invoice.id, "Stored invoice in memory");
        Ok(invoice)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Invoice>> {
        // Reverse first so equal timestamps keep newest-inserted first
        let mut invoices: Vec<Invoice> = self.invoices.read().await.iter().rev().cloned().collect();
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invoices.truncate(limit);
        Ok(invoices)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MemoryInvoiceStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceStatus;
    use crate::store::RECENT_INVOICE_LIMIT;
    use rust_decimal::Decimal;

    fn new_invoice(n: i64) -> NewInvoice {
        NewInvoice {
            amount: Decimal::from(n),
            client_email: format!("client{n}@example.com"),
            description: format!("Invoice #{n}"),
            payment_link: format!("https://checkout.stripe.com/c/pay/cs_test_{n}"),
        }
    }

    #[tokio::test]
    async fn test_create_writes_pending_invoice() {
        let store = MemoryInvoiceStore::new();
        let invoice = store.create(new_invoice(1)).await.unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert_eq!(invoice.payment_link, "https://checkout.stripe.com/c/pay/cs_test_1");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let store = MemoryInvoiceStore::new();
        for n in 0..15 {
            store.create(new_invoice(n)).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let recent = store.recent(RECENT_INVOICE_LIMIT).await.unwrap();
        assert_eq!(recent.len(), RECENT_INVOICE_LIMIT);
        assert!(recent.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert_eq!(recent[0].description, "Invoice #14");
        assert_eq!(recent[9].description, "Invoice #5");
    }

    #[tokio::test]
    async fn test_recent_on_empty_store() {
        let store = MemoryInvoiceStore::new();
        assert!(store.is_empty().await);
        assert!(store.recent(RECENT_INVOICE_LIMIT).await.unwrap().is_empty());
    }
}
