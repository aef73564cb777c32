//! Mock Payment Gateway
//!
//! For testing and demo purposes. Records every checkout request and
//! returns fake hosted URLs, or fails in a configured way.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{PaymentError, Result};
use crate::gateway::{CheckoutRequest, CheckoutSession, PaymentGateway};

/// How the mock responds
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Sessions are created with a URL
    Succeed,
    /// Connectivity check fails
    Unreachable,
    /// Session creation is rejected by the processor
    Reject {
        status: u16,
        message: String,
        code: Option<String>,
    },
    /// Session is created but carries no URL
    NoUrl,
}

/// Mock gateway with scripted behavior
pub struct MockPaymentGateway {
    behavior: MockBehavior,
    requests: Mutex<Vec<CheckoutRequest>>,
    connectivity_checks: AtomicUsize,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Succeed)
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
            connectivity_checks: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self::with_behavior(MockBehavior::Unreachable)
    }

    pub fn rejecting(status: u16, message: impl Into<String>, code: Option<&str>) -> Self {
        Self::with_behavior(MockBehavior::Reject {
            status,
            message: message.into(),
            code: code.map(str::to_owned),
        })
    }

    /// Checkout requests received so far
    pub async fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of connectivity checks performed
    pub fn connectivity_checks(&self) -> usize {
        self.connectivity_checks.load(Ordering::SeqCst)
    }

    /// Hosted URL the mock returns for the `n`th session (1-based)
    pub fn session_url(n: usize) -> String {
        format!("https://checkout.stripe.com/c/pay/cs_test_mock_{n}")
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn check_connectivity(&self) -> Result<()> {
        self.connectivity_checks.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Unreachable => {
                Err(PaymentError::Unreachable("mock gateway offline".into()))
            }
            _ => Ok(()),
        }
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let mut requests = self.requests.lock().await;
        requests.push(request);
        let n = requests.len();

        match &self.behavior {
            MockBehavior::Succeed | MockBehavior::Unreachable => Ok(CheckoutSession {
                id: format!("cs_test_mock_{n}"),
                checkout_url: Self::session_url(n),
            }),
            MockBehavior::Reject {
                status,
                message,
                code,
            } => Err(PaymentError::Stripe {
                status: *status,
                message: message.clone(),
                code: code.clone(),
            }),
            MockBehavior::NoUrl => Err(PaymentError::MissingCheckoutUrl),
        }
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckoutRequest {
        CheckoutRequest::for_invoice(1500, "Hosting", "client@example.com", "http://localhost:3000")
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let gateway = MockPaymentGateway::new();

        gateway.check_connectivity().await.unwrap();
        let session = gateway.create_checkout_session(request()).await.unwrap();

        assert_eq!(session.checkout_url, MockPaymentGateway::session_url(1));
        assert_eq!(gateway.connectivity_checks(), 1);
        assert_eq!(gateway.requests().await[0].amount_minor, 1500);
    }

    #[tokio::test]
    async fn test_mock_rejection() {
        let gateway = MockPaymentGateway::rejecting(402, "Your card was declined.", Some("card_declined"));
        let err = gateway.create_checkout_session(request()).await.unwrap_err();
        assert_eq!(err.status_code(), 402);
    }

    #[tokio::test]
    async fn test_mock_unreachable() {
        let gateway = MockPaymentGateway::unreachable();
        assert!(matches!(
            gateway.check_connectivity().await,
            Err(PaymentError::Unreachable(_))
        ));
    }
}
