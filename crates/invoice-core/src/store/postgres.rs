//! PostgreSQL invoice store using sqlx.
//!
//! The pool connects lazily: nothing touches the network until the first
//! request acquires a connection, so a malformed URL fails at startup while
//! an unreachable database only fails the requests that need it.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::InvoiceStore;
use crate::error::{InvoiceError, Result};
use crate::model::{Invoice, InvoiceStatus, NewInvoice};

const INVOICE_COLUMNS: &str =
    "id, amount, client_email, description, payment_link, status, created_at";

#[derive(Debug, FromRow)]
struct InvoiceRow {
    id: Uuid,
    amount: Decimal,
    client_email: String,
    description: String,
    payment_link: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = InvoiceError;

    fn try_from(row: InvoiceRow) -> Result<Self> {
        let status = row
            .status
            .parse::<InvoiceStatus>()
            .map_err(|e| InvoiceError::CorruptRow(format!("invoice {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            amount: row.amount,
            client_email: row.client_email,
            description: row.description,
            payment_link: row.payment_link,
            status,
            created_at: row.created_at,
        })
    }
}

/// Invoice store backed by the `invoices` table
#[derive(Clone, Debug)]
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily-connecting pool from a connection string
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(|e| InvoiceError::Config(format!("invalid DATABASE_URL: {e}")))?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Ok(Self::new(pool))
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let sql = format!(
            "INSERT INTO invoices (id, amount, client_email, description, payment_link, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {INVOICE_COLUMNS}"
        );

        let row: InvoiceRow = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(invoice.amount)
            .bind(&invoice.client_email)
            .bind(&invoice.description)
            .bind(&invoice.payment_link)
            .bind(InvoiceStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Invoice>> {
        let sql = format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY created_at DESC LIMIT $1"
        );

        let rows: Vec<InvoiceRow> = sqlx::query_as(&sql)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }

    fn name(&self) -> &str {
        "PostgreSQL"
    }
}
