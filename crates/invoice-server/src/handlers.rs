//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::ORIGIN},
};
use serde::Serialize;

use invoice_core::{
    CreateInvoiceRequest, FieldError, Invoice, NewInvoice, RECENT_INVOICE_LIMIT,
};
use invoice_payments::CheckoutRequest;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database_connected: bool,
    pub stripe_connected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceResponse {
    pub success: bool,
    pub invoice: Invoice,
    pub payment_url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (database_connected, stripe_connected) = tokio::join!(
        state.store.health_check(),
        async { state.gateway.check_connectivity().await.is_ok() },
    );

    Json(HealthResponse {
        status: if database_connected && stripe_connected { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database_connected,
        stripe_connected,
    })
}

/// Create an invoice and its hosted payment link
///
/// Nothing is written unless the processor returns a checkout URL.
pub async fn create_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateInvoiceRequest>, JsonRejection>,
) -> Result<Json<CreateInvoiceResponse>, ApiError> {
    let Json(payload) = payload
        .map_err(|rejection| ApiError::Validation(vec![FieldError::new("body", rejection.body_text())]))?;

    let input = payload.validate().map_err(ApiError::Validation)?;

    let origin = headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && *v != "null")
        .unwrap_or(&state.public_base_url);

    state.gateway.check_connectivity().await?;

    let session = state
        .gateway
        .create_checkout_session(CheckoutRequest::for_invoice(
            input.amount_minor,
            input.description.clone(),
            input.client_email.clone(),
            origin,
        ))
        .await?;

    let invoice = state
        .store
        .create(NewInvoice::new(input, session.checkout_url.clone()))
        .await?;

    tracing::info!(
        invoice_id = %invoice.id,
        session_id = %session.id,
        amount = %invoice.amount,
        "Created invoice"
    );

    Ok(Json(CreateInvoiceResponse {
        success: true,
        invoice,
        payment_url: session.checkout_url,
    }))
}

/// Most recent invoices, newest first
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = state.store.recent(RECENT_INVOICE_LIMIT).await?;
    Ok(Json(invoices))
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use invoice_core::{InvoiceStatus, InvoiceStore, MemoryInvoiceStore};
    use invoice_payments::{MockBehavior, MockPaymentGateway};

    use super::*;
    use crate::routes::build_router;

    struct Harness {
        app: Router,
        store: Arc<MemoryInvoiceStore>,
        gateway: Arc<MockPaymentGateway>,
    }

    fn harness(gateway: MockPaymentGateway) -> Harness {
        let store = Arc::new(MemoryInvoiceStore::new());
        let gateway = Arc::new(gateway);
        let state = AppState {
            store: store.clone(),
            gateway: gateway.clone(),
            public_base_url: Arc::from("http://localhost:3000"),
        };
        Harness {
            app: build_router(state, Path::new("static")),
            store,
            gateway,
        }
    }

    async fn post(app: &Router, origin: Option<&str>, body: String) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri("/api/create-invoice")
            .header("content-type", "application/json");
        if let Some(origin) = origin {
            request = request.header("origin", origin);
        }

        let response = app
            .clone()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn invoice_body(amount: f64, email: &str, description: &str) -> String {
        json!({ "amount": amount, "clientEmail": email, "description": description }).to_string()
    }

    #[tokio::test]
    async fn test_non_positive_amount_never_reaches_processor() {
        let h = harness(MockPaymentGateway::new());

        for amount in [0.0, -12.5] {
            let (status, body) =
                post(&h.app, None, invoice_body(amount, "client@example.com", "Design")).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Validation error");
            assert_eq!(body["details"][0]["field"], "amount");
            assert_eq!(body["details"][0]["message"], "Amount must be greater than 0");
        }

        assert_eq!(h.gateway.connectivity_checks(), 0);
        assert!(h.gateway.requests().await.is_empty());
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_email_is_validation_error() {
        let h = harness(MockPaymentGateway::new());

        let (status, body) = post(&h.app, None, invoice_body(10.0, "not-an-email", "Design")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "clientEmail");
        assert_eq!(body["details"][0]["message"], "Invalid email address");
        assert!(h.gateway.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let h = harness(MockPaymentGateway::new());

        let (status, body) = post(&h.app, None, "{not json".into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "body");
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_successful_submission_writes_one_pending_invoice() {
        let h = harness(MockPaymentGateway::new());

        let (status, body) = post(
            &h.app,
            Some("https://billing.example.com"),
            invoice_body(19.995, "client@example.com", "Logo design"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let expected_url = MockPaymentGateway::session_url(1);
        assert_eq!(body["paymentUrl"], expected_url.as_str());
        assert_eq!(body["invoice"]["paymentLink"], expected_url.as_str());
        assert_eq!(body["invoice"]["status"], "pending");
        assert_eq!(body["invoice"]["clientEmail"], "client@example.com");

        let stored = h.store.recent(RECENT_INVOICE_LIMIT).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, InvoiceStatus::Pending);
        assert_eq!(stored[0].payment_link, expected_url);

        let requests = h.gateway.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].amount_minor, 2000);
        assert_eq!(requests[0].customer_email, "client@example.com");
        assert_eq!(
            requests[0].success_url,
            "https://billing.example.com/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(requests[0].cancel_url, "https://billing.example.com/cancel");
        assert_eq!(h.gateway.connectivity_checks(), 1);
    }

    #[tokio::test]
    async fn test_missing_origin_falls_back_to_base_url() {
        let h = harness(MockPaymentGateway::new());

        let (status, _) = post(&h.app, None, invoice_body(5.0, "client@example.com", "Hosting")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            h.gateway.requests().await[0].cancel_url,
            "http://localhost:3000/cancel"
        );
    }

    #[tokio::test]
    async fn test_processor_rejection_passes_through_and_writes_nothing() {
        let h = harness(MockPaymentGateway::rejecting(
            402,
            "Your card was declined.",
            Some("card_declined"),
        ));

        let (status, body) =
            post(&h.app, None, invoice_body(50.0, "client@example.com", "Retainer")).await;

        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error"], "Stripe error");
        assert_eq!(body["message"], "Your card was declined.");
        assert_eq!(body["code"], "card_declined");
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unreachable_processor_is_configuration_error() {
        let h = harness(MockPaymentGateway::unreachable());

        let (status, body) =
            post(&h.app, None, invoice_body(50.0, "client@example.com", "Retainer")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Stripe configuration error");
        assert!(h.gateway.requests().await.is_empty());
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_session_without_url_is_server_error() {
        let h = harness(MockPaymentGateway::with_behavior(MockBehavior::NoUrl));

        let (status, body) =
            post(&h.app, None, invoice_body(50.0, "client@example.com", "Retainer")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_returns_ten_newest_first() {
        let h = harness(MockPaymentGateway::new());

        for n in 1..=12 {
            let (status, _) = post(
                &h.app,
                None,
                invoice_body(f64::from(n), "client@example.com", &format!("Invoice {n}")),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let (status, body) = get(&h.app, "/api/invoices").await;
        assert_eq!(status, StatusCode::OK);

        let invoices = body.as_array().unwrap();
        assert_eq!(invoices.len(), RECENT_INVOICE_LIMIT);
        assert_eq!(invoices[0]["description"], "Invoice 12");
        assert_eq!(invoices[9]["description"], "Invoice 3");

        let invoices: Vec<Invoice> = serde_json::from_value(body).unwrap();
        assert!(invoices.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[tokio::test]
    async fn test_health_reports_dependencies() {
        let h = harness(MockPaymentGateway::unreachable());

        let (status, body) = get(&h.app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database_connected"], true);
        assert_eq!(body["stripe_connected"], false);
    }
}
