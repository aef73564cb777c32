//! # invoice-payments
//!
//! Hosted checkout for invoice payments.
//!
//! ## Stripe Checkout (Hosted)
//!
//! **Flow:** Invoice form → Redirect payer to Stripe's hosted page → Redirect back
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │  (invoice)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! Each invoice gets a one-off `payment` mode session priced inline in
//! minor units; no Stripe products or prices need to exist beforehand.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invoice_payments::{CheckoutRequest, PaymentGateway, StripeClient};
//!
//! let client = StripeClient::new("sk_test_xxx")?;
//!
//! client.check_connectivity().await?;
//! let session = client.create_checkout_session(CheckoutRequest::for_invoice(
//!     2000,
//!     "Logo design",
//!     "client@example.com",
//!     "https://yoursite.com",
//! )).await?;
//!
//! // Send the payer to: session.checkout_url
//! ```

mod checkout;
mod error;
mod gateway;
mod mock;

pub use checkout::{SECRET_KEY_PREFIX, StripeClient};
pub use error::{PaymentError, Result};
pub use gateway::{CheckoutRequest, CheckoutSession, INVOICE_PRODUCT_NAME, PaymentGateway};
pub use mock::{MockBehavior, MockPaymentGateway};
