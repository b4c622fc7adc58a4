//! Workflow error types.
//!
//! Failures are classified by where they happened: the carrier answered
//! with a non-success status (propagated as-is), the carrier answered but
//! broke the expected shape (502), nothing exists for the order (404), or
//! the carrier could not be reached at all (504).

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::carrier::CarrierError;

/// Pipeline step at which a carrier call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Authenticate,
    Labels,
    TrackTrace,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authenticate => "authenticate",
            Self::Labels => "labels",
            Self::TrackTrace => "track-trace",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure modes of the tracking workflow.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The carrier returned a non-success status; surfaced with the same
    /// status code and the upstream body as detail.
    #[error("carrier returned {status} during {step}")]
    Upstream { step: Step, status: u16, body: String },

    /// The carrier response was well-formed HTTP but missing a field the
    /// workflow consumes.
    #[error("{0}")]
    Protocol(String),

    /// No labels for the order, or no stored token record.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure (timeout, connect, TLS); no upstream status exists
    /// to propagate.
    #[error("carrier unreachable: {0}")]
    Network(String),
}

impl TrackError {
    /// Error kind string used in response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Protocol(_) => "PROTOCOL_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Network(_) => "NETWORK_ERROR",
        }
    }

    /// HTTP status this error surfaces as.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Protocol(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Network(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<CarrierError> for TrackError {
    fn from(err: CarrierError) -> Self {
        match err {
            CarrierError::Timeout(msg) | CarrierError::Network(msg) => Self::Network(msg),
        }
    }
}

/// JSON response body for workflow errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrackErrorBody {
    /// Machine-readable error kind
    #[schema(value_type = String, example = "UPSTREAM_ERROR")]
    pub error: &'static str,
    /// Failing pipeline step, present for carrier-reported failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "labels")]
    pub step: Option<&'static str>,
    /// Detail message; carries the upstream body for carrier failures
    pub message: String,
}

impl IntoResponse for TrackError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = match self {
            Self::Upstream { step, body, .. } => TrackErrorBody {
                error: "UPSTREAM_ERROR",
                step: Some(step.as_str()),
                message: body,
            },
            Self::Protocol(message) => TrackErrorBody {
                error: "PROTOCOL_ERROR",
                step: None,
                message,
            },
            Self::NotFound(message) => TrackErrorBody {
                error: "NOT_FOUND",
                step: None,
                message,
            },
            Self::Network(message) => TrackErrorBody {
                error: "NETWORK_ERROR",
                step: None,
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
