//! Stripe secret key resolution.

use std::fmt;

/// Key used when `stripe.secret.key` is not configured.
///
/// Placeholder test-mode material for local development only; Stripe rejects
/// it, so an unconfigured deployment fails loudly on the first call.
pub const DEFAULT_SECRET_KEY: &str = "sk_test_pay_bridge_local_development_placeholder";

/// Where the active key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Supplied through configuration.
    Configured,
    /// Compiled-in fallback.
    Default,
}

/// The Stripe secret API key sent on every upstream call.
///
/// Resolved once at startup and never mutated afterwards. `Debug` never
/// prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    value: String,
    source: KeySource,
}

impl SecretKey {
    /// Use the configured key, or [`DEFAULT_SECRET_KEY`] when none is set.
    ///
    /// A blank value counts as unset. A non-blank value is kept as given.
    #[must_use]
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.filter(|key| !key.trim().is_empty()) {
            Some(key) => Self {
                value: key.to_string(),
                source: KeySource::Configured,
            },
            None => Self {
                value: DEFAULT_SECRET_KEY.to_string(),
                source: KeySource::Default,
            },
        }
    }

    /// The raw key, for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Where the key came from.
    #[must_use]
    pub const fn source(&self) -> KeySource {
        self.source
    }

    /// Whether this is a test-mode key (`sk_test_` or `rk_test_`).
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        self.value.starts_with("sk_test_") || self.value.starts_with("rk_test_")
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("source", &self.source)
            .field("test_mode", &self.is_test_mode())
            .finish_non_exhaustive()
    }
}
