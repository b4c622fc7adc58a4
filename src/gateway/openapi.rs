//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the Parcel Gateway API.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::carrier::AuthRequest;
use crate::gateway::error::TrackErrorBody;
use crate::gateway::handlers::health::HealthResponse;
use crate::gateway::types::{TrackOrderRequest, TrackOrderResponse};
use crate::token_store::TokenRecord;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parcel Gateway API",
        version = "1.0.0",
        description = "Carrier orchestration gateway: authenticate, fetch shipping labels and track & trace in one call.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::track::track_order,
        crate::gateway::handlers::tokens::get_stored_tokens,
    ),
    components(
        schemas(
            AuthRequest,
            TrackOrderRequest,
            TrackOrderResponse,
            TokenRecord,
            TrackErrorBody,
            HealthResponse,
        )
    ),
    tags(
        (name = "Tracking", description = "Carrier orchestration endpoint"),
        (name = "Tokens", description = "Stored authentication token lookup"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
