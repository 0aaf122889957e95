//! Core types for pay-bridge.
//!
//! This crate holds the JSON contract spoken by the pay-bridge HTTP façade:
//!
//! - **Requests**: `CustomerCreateRequest`, `AttachPaymentMethodRequest`
//! - **Responses**: `CustomerCreateResponse`, `AttachPaymentMethodResponse`
//! - **Errors**: `ErrorResponse` and the fixed message prefixes
//!
//! Field names use the camelCase keys that browser and mobile clients send.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod models;

pub use error::{
    ErrorResponse, ATTACH_PAYMENT_METHOD_PREFIX, CREATE_CUSTOMER_PREFIX, UNEXPECTED_ERROR_PREFIX,
};
pub use models::{
    AttachPaymentMethodRequest, AttachPaymentMethodResponse, CustomerCreateRequest,
    CustomerCreateResponse, ATTACH_SUCCESS_MESSAGE, ATTACH_SUCCESS_STATUS,
};

/// Path prefix shared by every provider route.
pub const API_PREFIX: &str = "/api/stripe";
