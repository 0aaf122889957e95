//! Customer registration handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use pay_bridge_core::{CustomerCreateRequest, CustomerCreateResponse};

use crate::error::{ApiError, Operation};
use crate::state::AppState;
use crate::stripe::client::CreateCustomer;

/// Register a customer with Stripe.
///
/// Fields are forwarded as received; Stripe does all validation.
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomerCreateRequest>, JsonRejection>,
) -> Result<Json<CustomerCreateResponse>, ApiError> {
    let Json(body) = payload?;

    let params = CreateCustomer {
        email: body.email.as_deref(),
        name: body.name.as_deref(),
        phone: body.phone.as_deref(),
        description: body.description.as_deref(),
    };

    let customer = state
        .stripe
        .create_customer(&params)
        .await
        .map_err(|e| ApiError::from_stripe(Operation::CreateCustomer, &e))?;

    tracing::info!(stripe_id = %customer.id, "Stripe customer created");

    Ok(Json(CustomerCreateResponse::new(customer.id)))
}
