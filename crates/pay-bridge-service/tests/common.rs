//! Common test utilities for pay-bridge integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use wiremock::MockServer;

use pay_bridge_service::{create_router, AppState, ServiceConfig};

/// Secret key the harness configures unless told otherwise.
pub const TEST_SECRET_KEY: &str = "sk_test_harness_key";

/// Test harness: the service under test plus a mock Stripe API.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Stands in for `https://api.stripe.com/v1`.
    pub stripe: MockServer,
}

impl TestHarness {
    /// Create a harness with [`TEST_SECRET_KEY`] configured.
    pub async fn new() -> Self {
        Self::with_secret_key(Some(TEST_SECRET_KEY)).await
    }

    /// Create a harness with the given `stripe.secret.key` (or none).
    pub async fn with_secret_key(secret_key: Option<&str>) -> Self {
        let stripe = MockServer::start().await;
        let config = test_config(secret_key, &stripe.uri());

        Self {
            server: server_for(config),
            stripe,
        }
    }
}

/// Service configuration pointing at the given Stripe API base.
pub fn test_config(secret_key: Option<&str>, stripe_api_base: &str) -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        stripe_secret_key: secret_key.map(String::from),
        stripe_api_base: stripe_api_base.into(),
        max_body_bytes: 1024 * 1024,
    }
}

/// Build a test server for a configuration.
pub fn server_for(config: ServiceConfig) -> TestServer {
    let state = AppState::new(config).expect("Failed to build app state");
    let router: Router = create_router(state);
    TestServer::new(router).expect("Failed to create test server")
}
