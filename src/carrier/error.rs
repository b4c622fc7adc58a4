use thiserror::Error;

/// Transport-level carrier failures.
///
/// Non-success HTTP statuses are NOT errors at this layer; the carrier's
/// status code and body are handed back verbatim in a
/// [`CarrierReply`](super::api::CarrierReply) and interpreted by the
/// workflow handler.
#[derive(Debug, Error)]
pub enum CarrierError {
    #[error("carrier request timed out: {0}")]
    Timeout(String),

    #[error("carrier request failed: {0}")]
    Network(String),
}

impl CarrierError {
    /// Classify a reqwest transport error.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
