//! Stripe API types.
//!
//! Only the fields the handlers read are decoded; serde ignores the rest.

use serde::Deserialize;

/// Stripe customer object.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: String,
}

/// Stripe `PaymentMethod` object.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    /// Payment method ID.
    pub id: String,
    /// Customer the method is attached to, if any.
    #[serde(default)]
    pub customer: Option<String>,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message. Some errors (e.g. bare `card_error`s) omit it.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_card_payment_method() {
        let pm: PaymentMethod = serde_json::from_str(
            r#"{
                "id": "pm_1",
                "object": "payment_method",
                "type": "card",
                "customer": "cus_1",
                "card": { "brand": "visa", "last4": "4242", "exp_month": 12, "exp_year": 2030 },
                "created": 1700000000
            }"#,
        )
        .unwrap();

        assert_eq!(pm.id, "pm_1");
        assert_eq!(pm.customer.as_deref(), Some("cus_1"));
    }

    #[test]
    fn parses_error_without_code() {
        let err: StripeErrorResponse = serde_json::from_str(
            r#"{ "error": { "type": "invalid_request_error", "message": "No such customer: 'cus_x'" } }"#,
        )
        .unwrap();

        assert_eq!(err.error.error_type, "invalid_request_error");
        assert_eq!(err.error.message, "No such customer: 'cus_x'");
        assert!(err.error.code.is_none());
    }

    #[test]
    fn parses_error_without_message() {
        let err: StripeErrorResponse =
            serde_json::from_str(r#"{ "error": { "type": "card_error" } }"#).unwrap();

        assert_eq!(err.error.error_type, "card_error");
        assert!(err.error.message.is_empty());
    }
}
