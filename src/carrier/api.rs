//! Carrier API contract
//!
//! The carrier exposes three endpoints the gateway cares about:
//! authenticate (POST, JSON body), labels (GET, bearer auth) and
//! track-trace (GET, unauthenticated). Each call returns the raw status
//! code plus body; no carrier semantics are interpreted here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::CarrierError;

/// Carrier credentials plus the order being queried.
///
/// Serialized verbatim as the authenticate request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// Carrier API user id
    pub user_id: String,
    /// Carrier API key
    pub key: String,
    /// Carrier account numbers; defaults to the shared integration account
    #[serde(default = "default_account_numbers")]
    #[schema(example = json!(["05868468"]))]
    pub account_numbers: Vec<String>,
    /// Order id to query labels for
    pub order_id: i64,
}

fn default_account_numbers() -> Vec<String> {
    vec!["05868468".to_string()]
}

/// Raw outcome of one carrier call: HTTP status plus unparsed body.
#[derive(Debug, Clone)]
pub struct CarrierReply {
    pub status: u16,
    pub body: String,
}

impl CarrierReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The three carrier calls the tracking workflow depends on.
///
/// Implemented by [`CarrierClient`](super::client::CarrierClient) for the
/// real carrier and by [`MockCarrier`](super::mock::MockCarrier) in tests.
#[async_trait]
pub trait CarrierApi: Send + Sync {
    /// POST /authenticate/api-key with the credentials as JSON body.
    async fn authenticate(&self, credentials: &AuthRequest) -> Result<CarrierReply, CarrierError>;

    /// GET /labels?orderReferenceFilter={order_reference}, bearer-authenticated.
    async fn fetch_labels(
        &self,
        order_reference: &str,
        access_token: &str,
    ) -> Result<CarrierReply, CarrierError>;

    /// GET /track-trace?key={key}, no auth header.
    async fn track_trace(&self, key: &str) -> Result<CarrierReply, CarrierError>;
}
