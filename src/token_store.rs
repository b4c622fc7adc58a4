//! Token store keyed by order id.
//!
//! Process-lifetime only: entries live from process start to process stop,
//! with no expiry enforcement and no eviction. Handlers depend on the
//! [`TokenStore`] trait so tests can inject an isolated instance and a
//! persistent backing store can be swapped in later.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tokens obtained from one successful carrier authentication.
///
/// Overwritten whole (never merged) when the same order re-authenticates.
/// Expiration fields are carrier-supplied epoch seconds and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub access_token_expiration: Option<i64>,
    #[serde(default)]
    pub refresh_token_expiration: Option<i64>,
}

/// Mapping from order id (string form) to its most recent token record.
pub trait TokenStore: Send + Sync {
    /// Unconditional upsert; any prior record for the key is discarded.
    fn put(&self, order_id: &str, record: TokenRecord);

    /// Exact-key lookup, no normalization.
    fn get(&self, order_id: &str) -> Option<TokenRecord>;
}

/// Thread-safe in-memory store.
///
/// Concurrent writes to the same key race; the last write wins, which is
/// all the workflow requires since entries are independent single-key
/// overwrites.
pub struct MemoryTokenStore {
    store: DashMap<String, TokenRecord>,
}

impl MemoryTokenStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Number of orders with a stored record.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn put(&self, order_id: &str, record: TokenRecord) {
        self.store.insert(order_id.to_string(), record);
    }

    fn get(&self, order_id: &str) -> Option<TokenRecord> {
        self.store.get(order_id).map(|entry| entry.clone())
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
