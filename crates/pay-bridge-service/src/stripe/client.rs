//! Stripe API client implementation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use super::types::{Customer, PaymentMethod, StripeErrorDetail, StripeErrorResponse};
use crate::credentials::SecretKey;

/// Stripe's default connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stripe's default overall request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(80);

/// Error type for Stripe operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed before Stripe answered, or its answer was unreadable.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error: {error_type} - {message}")]
    Api {
        /// Error type.
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// A path ID was missing or empty; the request was never sent.
    #[error(
        "Invalid empty ID found for {resource} path. Please double-check the ID you are passing."
    )]
    InvalidId {
        /// Resource the ID belongs to.
        resource: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// Whether Stripe (or the client acting on its rules) rejected the request.
    ///
    /// Everything else is a transport, decoding or configuration fault.
    #[must_use]
    pub const fn is_upstream_rejection(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::InvalidId { .. })
    }

    /// The bare message to show a caller, without our own wrapping.
    #[must_use]
    pub fn upstream_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Form parameters for `POST /v1/customers`.
///
/// `None` fields are left out; `Some("")` is sent as an empty value.
#[derive(Debug, Default, Serialize)]
pub struct CreateCustomer<'a> {
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    /// Customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// Customer phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    /// Customer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

/// Form parameters for `POST /v1/payment_methods/{id}/attach`.
#[derive(Debug, Default, Serialize)]
pub struct AttachPaymentMethod<'a> {
    /// Customer to attach to. Stripe rejects the call when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<&'a str>,
}

/// Stripe API client.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    api_base: Url,
    secret_key: SecretKey,
}

impl StripeClient {
    /// Stripe API base URL.
    pub const BASE_URL: &'static str = "https://api.stripe.com/v1";

    /// Create a new Stripe client against the public API.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    pub fn new(secret_key: SecretKey) -> Result<Self, StripeError> {
        Self::with_base_url(secret_key, Self::BASE_URL)
    }

    /// Create a new Stripe client against a custom API base (mocks, proxies).
    pub fn with_base_url(secret_key: SecretKey, api_base: &str) -> Result<Self, StripeError> {
        let api_base = Url::parse(api_base)
            .map_err(|e| StripeError::Configuration(format!("invalid API base {api_base}: {e}")))?;

        if api_base.cannot_be_a_base() {
            return Err(StripeError::Configuration(format!(
                "API base cannot carry a path: {api_base}"
            )));
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_base,
            secret_key,
        })
    }

    /// The key this client authenticates with.
    #[must_use]
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Create a new Stripe customer.
    pub async fn create_customer(
        &self,
        params: &CreateCustomer<'_>,
    ) -> Result<Customer, StripeError> {
        let response = self
            .client
            .post(self.endpoint(&["customers"]))
            .bearer_auth(self.secret_key.expose())
            .form(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Retrieve a payment method by ID.
    pub async fn retrieve_payment_method(
        &self,
        payment_method_id: &str,
    ) -> Result<PaymentMethod, StripeError> {
        let id = require_id(payment_method_id, "payment_method")?;

        let response = self
            .client
            .get(self.endpoint(&["payment_methods", id]))
            .bearer_auth(self.secret_key.expose())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Attach a payment method to a customer.
    pub async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        params: &AttachPaymentMethod<'_>,
    ) -> Result<PaymentMethod, StripeError> {
        let id = require_id(payment_method_id, "payment_method")?;

        let response = self
            .client
            .post(self.endpoint(&["payment_methods", id, "attach"]))
            .bearer_auth(self.secret_key.expose())
            .form(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Build `{api_base}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        Err(api_error(status, error_body.ok().map(|body| body.error)))
    }
}

/// Build an `Api` error, falling back to `HTTP <status>` when Stripe sent no message.
fn api_error(status: reqwest::StatusCode, detail: Option<StripeErrorDetail>) -> StripeError {
    match detail {
        Some(detail) if !detail.message.trim().is_empty() => StripeError::Api {
            error_type: detail.error_type,
            message: detail.message,
            code: detail.code,
        },
        Some(detail) => StripeError::Api {
            error_type: detail.error_type,
            message: format!("HTTP {status}"),
            code: detail.code,
        },
        None => StripeError::Api {
            error_type: "unknown".to_string(),
            message: format!("HTTP {status}"),
            code: None,
        },
    }
}

fn require_id<'a>(id: &'a str, resource: &'static str) -> Result<&'a str, StripeError> {
    if id.trim().is_empty() {
        Err(StripeError::InvalidId { resource })
    } else {
        Ok(id)
    }
}
