//! API Client

use chrono::{DateTime, Utc};
use serde::Deserialize;

const DEFAULT_DESCRIPTION: &str = "Invoice payment";

/// Invoice as returned by the backend
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub amount: f64,
    pub client_email: String,
    pub description: String,
    pub payment_link: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Per-field validation message from the backend
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Raw form input
#[derive(Clone, Debug, Default)]
pub struct InvoiceForm {
    pub amount: String,
    pub client_email: String,
    pub description: String,
}

/// Why a submission failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Fields(Vec<FieldError>),
    General(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateInvoiceResponse {
    payment_url: String,
}

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

impl InvoiceForm {
    /// Request body; an unparseable amount is sent as `null` so the server
    /// reports it as missing.
    fn to_body(&self) -> serde_json::Value {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .map_or(serde_json::Value::Null, |a| serde_json::json!(a));

        let description = if self.description.trim().is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            self.description.trim()
        };

        serde_json::json!({
            "amount": amount,
            "clientEmail": self.client_email.trim(),
            "description": description,
        })
    }
}

fn interpret_error(data: &serde_json::Value) -> SubmitError {
    if let Some(details) = data.get("details") {
        if let Ok(fields) = serde_json::from_value::<Vec<FieldError>>(details.clone()) {
            return SubmitError::Fields(fields);
        }
    }

    if data["error"] == "Stripe error" {
        let message = data["message"].as_str().unwrap_or("Unknown error");
        return SubmitError::General(format!(
            "Payment processing error: {message}. Please check your Stripe configuration."
        ));
    }

    SubmitError::General(
        data["message"]
            .as_str()
            .or_else(|| data["error"].as_str())
            .unwrap_or("Failed to create invoice")
            .to_string(),
    )
}

/// Submit the invoice form; returns the hosted payment URL
pub async fn create_invoice(form: &InvoiceForm) -> Result<String, SubmitError> {
    let network_error =
        |_| SubmitError::General("Failed to create invoice. Please try again or contact support.".into());

    let response = reqwest::Client::new()
        .post(api_url("/api/create-invoice"))
        .json(&form.to_body())
        .send()
        .await
        .map_err(network_error)?;

    if response.status().is_success() {
        let data: CreateInvoiceResponse = response.json().await.map_err(network_error)?;
        Ok(data.payment_url)
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(interpret_error(&data))
    }
}

/// Fetch the most recent invoices, newest first
pub async fn list_invoices() -> Result<Vec<Invoice>, String> {
    let response = reqwest::get(api_url("/api/invoices"))
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err("Failed to load invoices".into())
    }
}
