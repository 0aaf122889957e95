//! Stripe integration for customer and payment method management.
//!
//! Stripe handles:
//! - Customer registration
//! - Payment method lookup
//! - Binding payment methods to customers

pub mod client;
pub mod types;

pub use client::StripeClient;
pub use client::StripeError;
pub use types::*;
