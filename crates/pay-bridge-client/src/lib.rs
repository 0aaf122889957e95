//! Pay Bridge Client SDK.
//!
//! This crate provides a client library for applications that register
//! customers and payment methods through the pay-bridge service.
//!
//! # Example
//!
//! ```no_run
//! use pay_bridge_client::{AttachPaymentMethodRequest, CustomerCreateRequest, PayBridgeClient};
//!
//! # async fn example() -> Result<(), pay_bridge_client::ClientError> {
//! let client = PayBridgeClient::new("https://localhost:8443")?;
//!
//! let customer = client
//!     .create_customer(&CustomerCreateRequest {
//!         email: Some("driver@example.com".to_string()),
//!         name: Some("Driver".to_string()),
//!         ..CustomerCreateRequest::default()
//!     })
//!     .await?;
//!
//! // `pm_...` comes from client-side card tokenization
//! client
//!     .attach_payment_method(&AttachPaymentMethodRequest::new("pm_123", &customer.customer_id))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, PayBridgeClient};
pub use error::ClientError;
pub use pay_bridge_core::{
    AttachPaymentMethodRequest, AttachPaymentMethodResponse, CustomerCreateRequest,
    CustomerCreateResponse,
};
