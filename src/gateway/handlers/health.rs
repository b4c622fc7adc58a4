//! Health check handler

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response data
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    #[schema(example = "ok")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp_ms,
    })
}
