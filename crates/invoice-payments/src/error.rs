//! Payment Error Types

use stripe::StripeError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Status reported when the processor gives none
const FALLBACK_STATUS: u16 = 500;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Processor rejected or failed the request
    #[error("Stripe error ({status}): {message}")]
    Stripe {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// Connectivity check failed
    #[error("Stripe unreachable: {0}")]
    Unreachable(String),

    /// Session created without a hosted URL
    #[error("Failed to generate Stripe checkout session URL")]
    MissingCheckoutUrl,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// HTTP status to surface to the caller
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Stripe { status, .. } if (400..600).contains(status) => *status,
            _ => FALLBACK_STATUS,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            Self::Stripe { message, .. } => message,
            Self::Unreachable(_) => "Unable to connect to Stripe. Please check your configuration.",
            Self::MissingCheckoutUrl => "Failed to generate Stripe checkout session URL",
            Self::Config(_) => "Service configuration error.",
        }
    }
}

impl From<StripeError> for PaymentError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Stripe(request) => Self::Stripe {
                status: request.http_status,
                message: request
                    .message
                    .unwrap_or_else(|| "Stripe payment processing error".into()),
                code: request.code.map(|code| code.to_string()),
            },
            other => Self::Stripe {
                status: FALLBACK_STATUS,
                message: other.to_string(),
                code: None,
            },
        }
    }
}
