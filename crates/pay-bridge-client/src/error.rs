//! Client error types.

/// Errors that can occur when using the pay-bridge client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` string, prefix included.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether Stripe rejected the request (as opposed to a server fault).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Api { status: 400, .. })
    }
}
