//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `status` value of a successful attach.
pub const ATTACH_SUCCESS_STATUS: &str = "success";

/// `message` value of a successful attach.
pub const ATTACH_SUCCESS_MESSAGE: &str = "Payment method attached successfully";

/// Body of `POST /api/stripe/customers`.
///
/// Every field is optional. A field that is present is forwarded to the
/// provider as-is, including the empty string; an absent field is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreateRequest {
    /// Customer email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Customer full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Successful create-customer response.
///
/// `id` and `customerId` always hold the same provider id; older clients read
/// one, newer clients the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreateResponse {
    /// Provider customer id.
    pub id: String,
    /// Same value as `id`.
    #[serde(rename = "customerId")]
    pub customer_id: String,
}

impl CustomerCreateResponse {
    /// Build a response for the given provider customer id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            customer_id: id.clone(),
            id,
        }
    }
}

/// Body of `POST /api/stripe/payment-methods/attach`.
///
/// Both ids are needed for the call to succeed, but their absence is left to
/// the provider to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPaymentMethodRequest {
    /// Payment method to bind (`pm_...`).
    #[serde(default)]
    pub payment_method_id: Option<String>,
    /// Customer to bind it to (`cus_...`).
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl AttachPaymentMethodRequest {
    /// Build a request from both ids.
    #[must_use]
    pub fn new(payment_method_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            payment_method_id: Some(payment_method_id.into()),
            customer_id: Some(customer_id.into()),
        }
    }
}

/// Successful attach response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachPaymentMethodResponse {
    /// Always `"success"`.
    pub status: String,
    /// Always `"Payment method attached successfully"`.
    pub message: String,
}

impl Default for AttachPaymentMethodResponse {
    fn default() -> Self {
        Self {
            status: ATTACH_SUCCESS_STATUS.to_string(),
            message: ATTACH_SUCCESS_MESSAGE.to_string(),
        }
    }
}
