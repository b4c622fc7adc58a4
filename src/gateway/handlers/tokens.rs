//! Stored-token lookup handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::token_store::TokenRecord;

use super::super::error::TrackError;
use super::super::state::AppState;

/// Look up the most recent token record for an order
///
/// GET /tokens/{order_id}
#[utoipa::path(
    get,
    path = "/tokens/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id used as the store key")
    ),
    responses(
        (status = 200, description = "Stored token record", body = TokenRecord, content_type = "application/json"),
        (status = 404, description = "No token record for the order")
    ),
    tag = "Tokens"
)]
pub async fn get_stored_tokens(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<TokenRecord>, TrackError> {
    state
        .token_store
        .get(&order_id)
        .map(Json)
        .ok_or_else(|| TrackError::NotFound(format!("no token record for order_id={}", order_id)))
}
