//! Service configuration.

use crate::stripe::StripeClient;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Value of `STRIPE_SECRET_KEY`, if configured.
    pub stripe_secret_key: Option<String>,

    /// Stripe API base URL (default: `<https://api.stripe.com/v1>`).
    pub stripe_api_base: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset, blank or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let stripe_secret_key = non_empty("STRIPE_SECRET_KEY");
        if stripe_secret_key.is_none() {
            tracing::debug!("STRIPE_SECRET_KEY not set");
        }

        Self {
            listen_addr: non_empty("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            stripe_secret_key,
            stripe_api_base: non_empty("STRIPE_API_BASE").unwrap_or(defaults.stripe_api_base),
            max_body_bytes: non_empty("MAX_BODY_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            stripe_secret_key: None,
            stripe_api_base: StripeClient::BASE_URL.into(),
            max_body_bytes: 1024 * 1024, // 1MB
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field("stripe_secret_key", &self.stripe_secret_key.as_ref().map(|_| "<redacted>"))
            .field("stripe_api_base", &self.stripe_api_base)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}
