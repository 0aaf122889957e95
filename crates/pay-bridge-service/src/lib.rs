//! Pay Bridge HTTP API Service.
//!
//! A thin façade over Stripe for browser and mobile clients:
//!
//! - Customer registration
//! - Binding tokenized payment methods to customers
//!
//! The service holds the Stripe secret key so clients never see it, and turns
//! Stripe failures into `{"error": ...}` bodies with 400 or 500 status codes.
//!
//! # Authentication
//!
//! Callers are not authenticated. Every outbound Stripe call carries the
//! configured `stripe.secret.key`, or a development placeholder when unset.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod stripe;

pub use config::ServiceConfig;
pub use credentials::{KeySource, SecretKey, DEFAULT_SECRET_KEY};
pub use error::{ApiError, Operation};
pub use routes::create_router;
pub use state::AppState;
pub use stripe::{StripeClient, StripeError};
