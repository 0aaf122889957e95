//! Payment method handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use pay_bridge_core::{AttachPaymentMethodRequest, AttachPaymentMethodResponse};

use crate::error::{ApiError, Operation};
use crate::state::AppState;
use crate::stripe::client::AttachPaymentMethod;
use crate::stripe::StripeError;

/// Bind a tokenized payment method to a customer.
///
/// Looks the payment method up first, then attaches it. The two calls are
/// independent; a failed attach leaves nothing to undo.
pub async fn attach_payment_method(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AttachPaymentMethodRequest>, JsonRejection>,
) -> Result<Json<AttachPaymentMethodResponse>, ApiError> {
    let Json(body) = payload?;
    let reject = |e: StripeError| ApiError::from_stripe(Operation::AttachPaymentMethod, &e);

    let payment_method = state
        .stripe
        .retrieve_payment_method(body.payment_method_id.as_deref().unwrap_or_default())
        .await
        .map_err(reject)?;

    let params = AttachPaymentMethod {
        customer: body.customer_id.as_deref(),
    };

    let attached = state
        .stripe
        .attach_payment_method(&payment_method.id, &params)
        .await
        .map_err(reject)?;

    tracing::info!(
        payment_method_id = %attached.id,
        customer_id = attached.customer.as_deref().unwrap_or_default(),
        "Payment method attached"
    );

    Ok(Json(AttachPaymentMethodResponse::default()))
}
