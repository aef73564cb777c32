//! API Error Responses
//!
//! Every handler failure ends up here, is logged once, and is rendered as
//! a JSON body with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use invoice_core::{FieldError, InvoiceError};
use invoice_payments::PaymentError;

/// Error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Handler errors
#[derive(Debug)]
pub enum ApiError {
    /// Input rejected before any external call (400)
    Validation(Vec<FieldError>),

    /// Processor connectivity check failed (500)
    ProcessorUnavailable(String),

    /// Processor rejected the request (processor's status)
    Processor {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// Invoice store failure (500); the client only sees the user message
    Storage(InvoiceError),

    /// Anything else (500)
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Processor { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::ProcessorUnavailable(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Validation(details) => ErrorResponse {
                error: "Validation error".into(),
                message: None,
                details: Some(details.clone()),
                code: None,
            },
            Self::ProcessorUnavailable(_) => ErrorResponse {
                error: "Stripe configuration error".into(),
                message: Some(
                    "Unable to connect to Stripe. Please check your configuration.".into(),
                ),
                details: None,
                code: None,
            },
            Self::Processor { message, code, .. } => ErrorResponse {
                error: "Stripe error".into(),
                message: Some(message.clone()),
                details: None,
                code: code.clone(),
            },
            Self::Storage(err) => ErrorResponse {
                error: "Server error".into(),
                message: Some(err.user_message()),
                details: None,
                code: None,
            },
            Self::Internal(message) => ErrorResponse {
                error: "Server error".into(),
                message: Some(message.clone()),
                details: None,
                code: None,
            },
        }
    }

    fn log(&self) {
        match self {
            Self::Validation(details) => {
                tracing::warn!(?details, "Rejected invoice request");
            }
            Self::ProcessorUnavailable(reason) => {
                tracing::error!(%reason, "Stripe connection test failed");
            }
            Self::Processor {
                status,
                message,
                code,
            } => {
                tracing::error!(status, %message, ?code, "Stripe request failed");
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "Invoice store error");
            }
            Self::Internal(message) => {
                tracing::error!(%message, "Request failed");
            }
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        let status = err.status_code();
        match err {
            PaymentError::Unreachable(reason) => Self::ProcessorUnavailable(reason),
            PaymentError::Stripe { message, code, .. } => Self::Processor {
                status,
                message,
                code,
            },
            other @ (PaymentError::MissingCheckoutUrl | PaymentError::Config(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

impl From<InvoiceError> for ApiError {
    fn from(err: InvoiceError) -> Self {
        Self::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
