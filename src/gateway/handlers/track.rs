//! Track-order workflow handler.
//!
//! Chains three sequential carrier calls (authenticate → labels →
//! track-trace) and records the obtained tokens between the first two.
//! Each step is gated on the one before it; the first failure aborts the
//! pipeline. There are no retries and no rollback: a failure after step 2
//! leaves the token store write intact, since the tokens stay useful for
//! a later direct lookup.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{info, warn};

use crate::carrier::{CarrierApi, CarrierReply};
use crate::token_store::{TokenRecord, TokenStore};

use super::super::error::{Step, TrackError};
use super::super::state::AppState;
use super::super::types::{TrackOrderRequest, TrackOrderResponse};

/// Combined label and tracking lookup
///
/// POST /track-order
#[utoipa::path(
    post,
    path = "/track-order",
    request_body = TrackOrderRequest,
    responses(
        (status = 200, description = "Combined label and tracking result", body = TrackOrderResponse, content_type = "application/json"),
        (status = 404, description = "Carrier has no labels for the order"),
        (status = 502, description = "Carrier response missing required fields"),
        (status = 504, description = "Carrier unreachable or timed out")
    ),
    tag = "Tracking"
)]
pub async fn track_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrackOrderRequest>,
) -> Result<Json<TrackOrderResponse>, TrackError> {
    let response =
        run_track_order(state.carrier.as_ref(), state.token_store.as_ref(), req).await?;
    Ok(Json(response))
}

/// Execute the four-step tracking workflow against the given collaborators.
pub async fn run_track_order(
    carrier: &dyn CarrierApi,
    store: &dyn TokenStore,
    req: TrackOrderRequest,
) -> Result<TrackOrderResponse, TrackError> {
    let order_id = req.auth.order_id.to_string();

    // 1. Authenticate and extract the token pair
    let reply = carrier.authenticate(&req.auth).await?;
    let auth_data = expect_success(reply, Step::Authenticate)?;

    let (access_token, refresh_token) = match (
        non_empty_str(&auth_data, "accessToken"),
        non_empty_str(&auth_data, "refreshToken"),
    ) {
        (Some(access), Some(refresh)) => (access.to_string(), refresh.to_string()),
        _ => {
            return Err(TrackError::Protocol(
                "authenticate response missing accessToken/refreshToken".to_string(),
            ));
        }
    };

    // 2. Record the tokens; overwrites any previous record for this order
    store.put(
        &order_id,
        TokenRecord {
            access_token: access_token.clone(),
            refresh_token,
            access_token_expiration: auth_data
                .get("accessTokenExpiration")
                .and_then(Value::as_i64),
            refresh_token_expiration: auth_data
                .get("refreshTokenExpiration")
                .and_then(Value::as_i64),
        },
    );
    info!(order_id = %order_id, "stored carrier token record");

    // 3. Fetch labels for the order and take the first tracker code
    let reply = carrier.fetch_labels(&order_id, &access_token).await?;
    let labels_data = expect_success(reply, Step::Labels)?;

    let labels = labels_data
        .as_array()
        .filter(|labels| !labels.is_empty())
        .ok_or_else(|| {
            TrackError::NotFound(format!(
                "no labels found for orderReferenceFilter={}",
                order_id
            ))
        })?;
    let tracker_code = non_empty_str(&labels[0], "trackerCode")
        .ok_or_else(|| TrackError::Protocol("label response missing trackerCode".to_string()))?
        .to_string();

    // 4. Track & trace. Carrier expects key=<trackerCode> or
    //    key=<trackerCode>+<postalCode>
    let key = match req.postal_code.as_deref() {
        Some(postal) if !postal.is_empty() => format!("{}+{}", tracker_code, postal),
        _ => tracker_code.clone(),
    };
    let reply = carrier.track_trace(&key).await?;
    let track_trace = expect_success(reply, Step::TrackTrace)?;

    info!(order_id = %order_id, tracker_code = %tracker_code, "track-order workflow complete");

    Ok(TrackOrderResponse {
        order_id: order_id.clone(),
        tracker_code,
        tokens_stored: true,
        token_store_key: order_id,
        track_trace,
    })
}

/// Fail with the carrier's own status on a non-success reply, otherwise
/// parse the body as JSON.
fn expect_success(reply: CarrierReply, step: Step) -> Result<Value, TrackError> {
    if !reply.is_success() {
        warn!(step = step.as_str(), status = reply.status, "carrier call failed");
        return Err(TrackError::Upstream {
            step,
            status: reply.status,
            body: reply.body,
        });
    }
    serde_json::from_str(&reply.body).map_err(|_| {
        TrackError::Protocol(format!("carrier returned invalid JSON during {}", step))
    })
}

/// Extract a non-empty string field from a carrier JSON object.
fn non_empty_str<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
