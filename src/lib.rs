//! Parcel Gateway - Carrier Integration Service
//!
//! Chains three sequential carrier calls (authenticate → labels →
//! track-trace) behind a single endpoint and keeps the obtained tokens
//! in memory for later lookup by order id.
//!
//! # Modules
//!
//! - [`carrier`] - Upstream carrier API client (authenticate, labels, track-trace)
//! - [`token_store`] - Process-lifetime token records keyed by order id
//! - [`gateway`] - HTTP surface (axum router, handlers, OpenAPI doc)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing/file-appender bootstrap

pub mod carrier;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod token_store;

// Convenient re-exports at crate root
pub use carrier::{AuthRequest, CarrierApi, CarrierClient, CarrierError, CarrierReply};
pub use gateway::error::{Step, TrackError};
pub use gateway::handlers::track::run_track_order;
pub use gateway::state::AppState;
pub use gateway::types::{TrackOrderRequest, TrackOrderResponse};
pub use token_store::{MemoryTokenStore, TokenRecord, TokenStore};

#[cfg(feature = "mock-carrier")]
pub use carrier::MockCarrier;
