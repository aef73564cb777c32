//! # invoice-core
//!
//! Invoice domain model, request validation and persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │ CreateInvoiceRequest │────▶│   ValidatedInvoice   │
//! │  (wire, all Option)  │     │ (amount_minor ready) │
//! └──────────────────────┘     └──────────┬───────────┘
//!                                         │ + checkout URL
//!                                         ▼
//!                              ┌──────────────────────┐
//!                              │      NewInvoice      │──▶ InvoiceStore
//!                              └──────────────────────┘    (Postgres / Memory)
//! ```
//!
//! The `InvoiceStore` trait lets the server run against PostgreSQL in
//! production and an in-memory store in tests.

pub mod error;
pub mod model;
pub mod money;
pub mod store;
pub mod validation;

pub use error::{InvoiceError, Result};
pub use model::{Invoice, InvoiceStatus, NewInvoice};
pub use money::to_minor_units;
pub use store::{InvoiceStore, MemoryInvoiceStore, PgInvoiceStore, RECENT_INVOICE_LIMIT};
pub use validation::{CreateInvoiceRequest, FieldError, ValidatedInvoice};
