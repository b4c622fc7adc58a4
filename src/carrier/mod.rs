//! Carrier API integration
//!
//! Thin wrapper around the parcel carrier's HTTP endpoints. The gateway only
//! depends on the [`CarrierApi`] trait; the real [`CarrierClient`] and the
//! test-only [`MockCarrier`] are interchangeable behind it.
//!
//! - [`api`] - `CarrierApi` trait, request/reply types
//! - [`client`] - reqwest-backed implementation
//! - [`error`] - transport-level error type
//! - [`mock`] - scripted stub (feature `mock-carrier`)

pub mod api;
pub mod client;
pub mod error;

#[cfg(feature = "mock-carrier")]
pub mod mock;

pub use api::{AuthRequest, CarrierApi, CarrierReply};
pub use client::CarrierClient;
pub use error::CarrierError;

#[cfg(feature = "mock-carrier")]
pub use mock::MockCarrier;
