//! Error body and message prefixes.
//!
//! Clients match on these prefixes, so they must not change.

use serde::{Deserialize, Serialize};

/// Prefix for provider rejections while creating a customer.
pub const CREATE_CUSTOMER_PREFIX: &str = "Failed to create customer";

/// Prefix for provider rejections while attaching a payment method.
pub const ATTACH_PAYMENT_METHOD_PREFIX: &str = "Failed to attach payment method";

/// Prefix for every fault the provider did not report.
pub const UNEXPECTED_ERROR_PREFIX: &str = "Unexpected error";

/// JSON error body. Failures never carry any other key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// `"<prefix>: <message>"`.
    pub error: String,
}

impl ErrorResponse {
    /// Join a prefix and a message as `"<prefix>: <message>"`.
    #[must_use]
    pub fn with_prefix(prefix: &str, message: &str) -> Self {
        Self {
            error: format!("{prefix}: {message}"),
        }
    }
}
