//! Reqwest-backed carrier client.
//!
//! One shared HTTP client with a session-wide timeout covers all three
//! carrier calls. Endpoint paths are fixed; only the base URL comes from
//! configuration.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::config::CarrierConfig;

use super::api::{AuthRequest, CarrierApi, CarrierReply};
use super::error::CarrierError;

pub struct CarrierClient {
    http: reqwest::Client,
    base_url: String,
}

impl CarrierClient {
    /// Build a client for the configured carrier endpoint.
    pub fn new(config: &CarrierConfig) -> Result<Self, CarrierError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CarrierError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drain a response into the raw status + body pair the workflow consumes.
    async fn read_reply(response: reqwest::Response) -> Result<CarrierReply, CarrierError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(CarrierError::from_reqwest)?;
        Ok(CarrierReply { status, body })
    }
}

#[async_trait]
impl CarrierApi for CarrierClient {
    async fn authenticate(&self, credentials: &AuthRequest) -> Result<CarrierReply, CarrierError> {
        let url = format!("{}/authenticate/api-key", self.base_url);
        debug!(order_id = credentials.order_id, "carrier authenticate");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(CarrierError::from_reqwest)?;
        Self::read_reply(response).await
    }

    async fn fetch_labels(
        &self,
        order_reference: &str,
        access_token: &str,
    ) -> Result<CarrierReply, CarrierError> {
        let url = format!("{}/labels", self.base_url);
        debug!(order_reference, "carrier labels lookup");

        let response = self
            .http
            .get(&url)
            .query(&[("orderReferenceFilter", order_reference)])
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(CarrierError::from_reqwest)?;
        Self::read_reply(response).await
    }

    async fn track_trace(&self, key: &str) -> Result<CarrierReply, CarrierError> {
        let url = format!("{}/track-trace", self.base_url);
        debug!(key, "carrier track-trace lookup");

        let response = self
            .http
            .get(&url)
            .query(&[("key", key)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(CarrierError::from_reqwest)?;
        Self::read_reply(response).await
    }
}
