//! Draft order route handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use draft_order_core::{DraftOrderCreated, OrderInput};
use tracing::instrument;

use crate::error::AppError;
use crate::services::DraftOrderService;
use crate::state::AppState;

/// Relay an order to Shopify.
///
/// The body is read raw so that an empty body is an empty order, and an
/// oversized or aborted body still gets the JSON error envelope.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DraftOrderCreated>, AppError> {
    let shopify = state.shopify()?;
    let body = body.map_err(AppError::UnreadableBody)?;
    let order = OrderInput::from_slice(&body).map_err(AppError::InvalidPayload)?;

    let created = DraftOrderService::new(shopify, state.policy())
        .relay(&order)
        .await?;

    Ok(Json(created))
}

/// CORS preflight: 200 with an empty body. Headers come from the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than POST or OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
