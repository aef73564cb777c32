//! Payment Gateway Abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Product name shown on the hosted checkout page
pub const INVOICE_PRODUCT_NAME: &str = "Invoice Payment";

/// Payment gateway trait (Strategy pattern)
///
/// Implemented by the Stripe client and by a mock for tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Cheap authenticated call proving the processor is reachable
    async fn check_connectivity(&self) -> Result<()>;

    /// Create a hosted checkout session
    ///
    /// Returns a URL to redirect the payer to.
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Request to create a one-off checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Price in minor units (cents)
    pub amount_minor: i64,

    pub product_name: String,

    pub description: String,

    /// Prefilled payer email
    pub customer_email: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

impl CheckoutRequest {
    /// Checkout for an invoice, with redirect URLs derived from the site origin
    pub fn for_invoice(
        amount_minor: i64,
        description: impl Into<String>,
        customer_email: impl Into<String>,
        origin: &str,
    ) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            amount_minor,
            product_name: INVOICE_PRODUCT_NAME.into(),
            description: description.into(),
            customer_email: customer_email.into(),
            success_url: format!("{origin}/success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url: format!("{origin}/cancel"),
        }
    }
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Processor session ID
    pub id: String,

    /// URL to redirect the payer to
    pub checkout_url: String,
}
