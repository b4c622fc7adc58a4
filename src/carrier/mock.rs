//! Scripted carrier stub for tests and local development.
//!
//! Each step returns a preset reply; an unset step simulates a transport
//! failure. Requests are recorded so tests can assert on the exact
//! order reference, bearer token and track-trace key the workflow sent.

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::{AuthRequest, CarrierApi, CarrierReply};
use super::error::CarrierError;

#[derive(Default)]
pub struct MockCarrier {
    auth_reply: Option<CarrierReply>,
    labels_reply: Option<CarrierReply>,
    track_reply: Option<CarrierReply>,
    auth_requests: Mutex<Vec<AuthRequest>>,
    label_requests: Mutex<Vec<(String, String)>>,
    track_requests: Mutex<Vec<String>>,
}

impl MockCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the authenticate reply.
    pub fn with_auth(mut self, status: u16, body: &str) -> Self {
        self.auth_reply = Some(CarrierReply {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Script the labels reply.
    pub fn with_labels(mut self, status: u16, body: &str) -> Self {
        self.labels_reply = Some(CarrierReply {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Script the track-trace reply.
    pub fn with_track(mut self, status: u16, body: &str) -> Self {
        self.track_reply = Some(CarrierReply {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Credentials seen by authenticate, in call order.
    pub fn auth_requests(&self) -> Vec<AuthRequest> {
        self.auth_requests.lock().unwrap().clone()
    }

    /// (order_reference, access_token) pairs seen by fetch_labels.
    pub fn label_requests(&self) -> Vec<(String, String)> {
        self.label_requests.lock().unwrap().clone()
    }

    /// Lookup keys seen by track_trace.
    pub fn track_requests(&self) -> Vec<String> {
        self.track_requests.lock().unwrap().clone()
    }

    fn reply_or_refused(reply: &Option<CarrierReply>) -> Result<CarrierReply, CarrierError> {
        reply
            .clone()
            .ok_or_else(|| CarrierError::Network("mock: connection refused".to_string()))
    }
}

#[async_trait]
impl CarrierApi for MockCarrier {
    async fn authenticate(&self, credentials: &AuthRequest) -> Result<CarrierReply, CarrierError> {
        self.auth_requests.lock().unwrap().push(credentials.clone());
        Self::reply_or_refused(&self.auth_reply)
    }

    async fn fetch_labels(
        &self,
        order_reference: &str,
        access_token: &str,
    ) -> Result<CarrierReply, CarrierError> {
        self.label_requests
            .lock()
            .unwrap()
            .push((order_reference.to_string(), access_token.to_string()));
        Self::reply_or_refused(&self.labels_reply)
    }

    async fn track_trace(&self, key: &str) -> Result<CarrierReply, CarrierError> {
        self.track_requests.lock().unwrap().push(key.to_string());
        Self::reply_or_refused(&self.track_reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_reply_roundtrip() {
        let carrier = MockCarrier::new().with_track(200, r#"{"status":"in_transit"}"#);

        let reply = carrier.track_trace("T1").await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(carrier.track_requests(), vec!["T1".to_string()]);
    }

    #[tokio::test]
    async fn test_unset_step_is_transport_failure() {
        let carrier = MockCarrier::new();

        let err = carrier.track_trace("T1").await.unwrap_err();
        assert!(matches!(err, CarrierError::Network(_)));
    }
}
