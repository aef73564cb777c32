//! Error Types

use thiserror::Error;

/// Result type alias for invoice operations
pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Invoice error types
#[derive(Error, Debug)]
pub enum InvoiceError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be mapped back to an invoice
    #[error("Corrupt invoice row: {0}")]
    CorruptRow(String),

    /// Unknown status string
    #[error("Unknown invoice status: {0}")]
    UnknownStatus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InvoiceError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Migration(_) => {
                "The invoice database is currently unavailable.".into()
            }
            Self::Config(msg) => format!("Invoice storage is misconfigured: {msg}"),
            Self::CorruptRow(_) | Self::UnknownStatus(_) => {
                "A stored invoice could not be read.".into()
            }
        }
    }
}
