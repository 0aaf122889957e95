//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::credentials::{KeySource, SecretKey};
use crate::stripe::{StripeClient, StripeError};

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Stripe client carrying the resolved secret key.
    pub stripe: Arc<StripeClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Resolves the secret key once; it stays fixed for the life of the state.
    pub fn new(config: ServiceConfig) -> Result<Self, StripeError> {
        let secret_key = SecretKey::resolve(config.stripe_secret_key.as_deref());

        match secret_key.source() {
            KeySource::Configured => tracing::info!(
                test_mode = secret_key.is_test_mode(),
                "Using configured Stripe secret key"
            ),
            KeySource::Default => {
                tracing::warn!("stripe.secret.key not set - using built-in development key");
            }
        }

        let stripe = StripeClient::with_base_url(secret_key, &config.stripe_api_base)?;
        tracing::info!(api_base = %config.stripe_api_base, "Stripe integration enabled");

        Ok(Self {
            config,
            stripe: Arc::new(stripe),
        })
    }
}
