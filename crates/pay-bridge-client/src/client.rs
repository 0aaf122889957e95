//! Pay Bridge HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use pay_bridge_core::{
    AttachPaymentMethodRequest, AttachPaymentMethodResponse, CustomerCreateRequest,
    CustomerCreateResponse, ErrorResponse, API_PREFIX,
};

use crate::error::ClientError;

/// Pay Bridge API client.
///
/// Provides methods for registering customers and attaching payment methods.
#[derive(Debug, Clone)]
pub struct PayBridgeClient {
    client: Client,
    base_url: String,
}

impl PayBridgeClient {
    /// Create a new pay-bridge client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the pay-bridge service (e.g., `"http://pay-bridge:8080"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new pay-bridge client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base URL is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Register a customer with Stripe.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_customer(
        &self,
        request: &CustomerCreateRequest,
    ) -> Result<CustomerCreateResponse, ClientError> {
        let url = format!("{}{API_PREFIX}/customers", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Attach a tokenized payment method to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn attach_payment_method(
        &self,
        request: &AttachPaymentMethodRequest,
    ) -> Result<AttachPaymentMethodResponse, ClientError> {
        let url = format!("{}{API_PREFIX}/payment-methods/attach", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map_or_else(|_| format!("HTTP {status}"), |e| e.error);

        tracing::debug!(status = status.as_u16(), error = %message, "pay-bridge request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 10).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { timeout_seconds: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn client_trims_trailing_slash() {
        let client = PayBridgeClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_rejects_empty_base_url() {
        let result = PayBridgeClient::new("/");
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[tokio::test]
    async fn create_customer_posts_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/stripe/customers"))
            .and(body_json(json!({ "email": "a@b.c", "name": "A" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "cus_123", "customerId": "cus_123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = PayBridgeClient::new(server.uri()).unwrap();
        let response = client
            .create_customer(&CustomerCreateRequest {
                email: Some("a@b.c".into()),
                name: Some("A".into()),
                ..CustomerCreateRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(response, CustomerCreateResponse::new("cus_123"));
    }

    #[tokio::test]
    async fn attach_payment_method_posts_camel_case() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/stripe/payment-methods/attach"))
            .and(body_json(
                json!({ "paymentMethodId": "pm_1", "customerId": "cus_1" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": "Payment method attached successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PayBridgeClient::new(server.uri()).unwrap();
        let response = client
            .attach_payment_method(&AttachPaymentMethodRequest::new("pm_1", "cus_1"))
            .await
            .unwrap();

        assert_eq!(response, AttachPaymentMethodResponse::default());
    }

    #[tokio::test]
    async fn error_body_becomes_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Failed to attach payment method: No such payment_method: pm_x"
            })))
            .mount(&server)
            .await;

        let client = PayBridgeClient::new(server.uri()).unwrap();
        let err = client
            .attach_payment_method(&AttachPaymentMethodRequest::new("pm_x", "cus_1"))
            .await
            .unwrap_err();

        assert!(err.is_rejection());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(
                    message,
                    "Failed to attach payment method: No such payment_method: pm_x"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_uses_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = PayBridgeClient::new(server.uri()).unwrap();
        let err = client
            .create_customer(&CustomerCreateRequest::default())
            .await
            .unwrap_err();

        assert!(!err.is_rejection());
        assert!(matches!(
            err,
            ClientError::Api { status: 404, ref message } if message == "HTTP 404 Not Found"
        ));
    }
}
