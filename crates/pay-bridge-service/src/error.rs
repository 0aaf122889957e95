//! API error types and responses.
//!
//! Every failure leaves the service as `{"error": "<prefix>: <message>"}`.
//! Stripe rejections become 400 with the operation's prefix; anything else
//! becomes 500 with `Unexpected error`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use pay_bridge_core::{
    ErrorResponse, ATTACH_PAYMENT_METHOD_PREFIX, CREATE_CUSTOMER_PREFIX, UNEXPECTED_ERROR_PREFIX,
};

use crate::stripe::StripeError;

/// The provider operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /api/stripe/customers`.
    CreateCustomer,
    /// `POST /api/stripe/payment-methods/attach`.
    AttachPaymentMethod,
}

impl Operation {
    /// Message prefix for provider rejections during this operation.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::CreateCustomer => CREATE_CUSTOMER_PREFIX,
            Self::AttachPaymentMethod => ATTACH_PAYMENT_METHOD_PREFIX,
        }
    }
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Stripe rejected the request.
    #[error("{}: {}", .operation.prefix(), .message)]
    Upstream {
        /// Operation that was rejected.
        operation: Operation,
        /// Stripe's message.
        message: String,
    },

    /// Any fault Stripe did not report: bad input, transport, decoding.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a Stripe client failure for the given operation.
    #[must_use]
    pub fn from_stripe(operation: Operation, err: &StripeError) -> Self {
        if err.is_upstream_rejection() {
            Self::Upstream {
                operation,
                message: err.upstream_message(),
            }
        } else {
            Self::Unexpected(err.to_string())
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { .. } => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::Upstream { operation, message } => {
                tracing::debug!(?operation, error = %message, "Stripe rejected request");
                ErrorResponse::with_prefix(operation.prefix(), message)
            }
            Self::Unexpected(message) => {
                tracing::warn!(error = %message, "Unexpected error");
                ErrorResponse::with_prefix(UNEXPECTED_ERROR_PREFIX, message)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unexpected(rejection.body_text())
    }
}
