//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: one-off `payment`
//! mode sessions with a single inline-priced line item.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCheckoutSessionPaymentMethodTypes,
    Currency, ListPaymentMethods, PaymentMethod,
};

use crate::error::{PaymentError, Result};
use crate::gateway::{CheckoutRequest, CheckoutSession, PaymentGateway};

/// Required prefix of a Stripe secret key
pub const SECRET_KEY_PREFIX: &str = "sk_";

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    ///
    /// Rejects keys that are not secret keys (`sk_test_…` / `sk_live_…`).
    pub fn new(secret_key: &str) -> Result<Self> {
        if !secret_key.starts_with(SECRET_KEY_PREFIX) {
            return Err(PaymentError::Config(format!(
                "Invalid Stripe secret key format. Must start with \"{SECRET_KEY_PREFIX}\""
            )));
        }

        Ok(Self {
            client: Client::new(secret_key),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn check_connectivity(&self) -> Result<()> {
        let mut params = ListPaymentMethods::new();
        params.limit = Some(1);

        PaymentMethod::list(&self.client, &params)
            .await
            .map(|_| ())
            .map_err(|e| PaymentError::Unreachable(e.to_string()))
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Payment);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
        params.customer_email = Some(&request.customer_email);
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(request.amount_minor),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: request.product_name.clone(),
                    description: Some(request.description.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params).await?;

        let checkout_url = session.url.ok_or(PaymentError::MissingCheckoutUrl)?;

        tracing::info!(
            session_id = %session.id,
            amount_minor = request.amount_minor,
            "Created Stripe checkout session"
        );

        Ok(CheckoutSession {
            id: session.id.to_string(),
            checkout_url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}
