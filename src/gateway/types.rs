//! Gateway request/response DTOs.
//!
//! The inbound and outbound field names are fixed wire format (camelCase),
//! shared with the carrier's own conventions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::carrier::AuthRequest;

/// POST /track-order request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrderRequest {
    /// Carrier credentials plus the order to query
    pub auth: AuthRequest,
    /// Optional receiver postal code for a richer track-trace response
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// POST /track-order success response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrderResponse {
    /// Order id in the string form used as the token store key
    #[schema(example = "42")]
    pub order_id: String,
    /// Carrier-assigned shipment identifier taken from the first label
    #[schema(example = "T1")]
    pub tracker_code: String,
    /// Always true on success; the token write happened in step 2
    pub tokens_stored: bool,
    /// Key under which the tokens were stored
    #[schema(example = "42")]
    pub token_store_key: String,
    /// Raw carrier track-trace payload, passed through verbatim
    #[schema(value_type = Object)]
    pub track_trace: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_postal_code_optional() {
        let json = r#"{"auth":{"userId":"u1","key":"k1","orderId":42}}"#;
        let req: TrackOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.postal_code, None);
        assert_eq!(req.auth.order_id, 42);
    }

    #[test]
    fn test_request_postal_code_camel_case() {
        let json = r#"{"auth":{"userId":"u1","key":"k1","orderId":42},"postalCode":"1234AB"}"#;
        let req: TrackOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.postal_code.as_deref(), Some("1234AB"));
    }

    #[test]
    fn test_response_wire_format() {
        let response = TrackOrderResponse {
            order_id: "42".to_string(),
            tracker_code: "T1".to_string(),
            tokens_stored: true,
            token_store_key: "42".to_string(),
            track_trace: serde_json::json!({"status": "in_transit"}),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["orderId"], "42");
        assert_eq!(json["trackerCode"], "T1");
        assert_eq!(json["tokensStored"], true);
        assert_eq!(json["tokenStoreKey"], "42");
        assert_eq!(json["trackTrace"]["status"], "in_transit");
    }
}
