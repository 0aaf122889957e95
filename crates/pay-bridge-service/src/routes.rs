//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use pay_bridge_core::API_PREFIX;

use crate::handlers::{customers, health, payment_methods};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Stripe (no caller authentication)
/// - `POST /api/stripe/customers` - Register a customer
/// - `POST /api/stripe/payment-methods/attach` - Attach a payment method to a customer
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let state = Arc::new(state);

    let stripe_routes = Router::new()
        .route("/customers", post(customers::create_customer))
        .route(
            "/payment-methods/attach",
            post(payment_methods::attach_payment_method),
        );

    Router::new()
        .route("/health", get(health::health))
        .nest(API_PREFIX, stripe_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// Any origin, any method, any header.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
