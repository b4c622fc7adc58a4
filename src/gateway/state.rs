use std::sync::Arc;

use crate::carrier::CarrierApi;
use crate::token_store::TokenStore;

/// Gateway shared state.
///
/// Both collaborators sit behind traits so tests can swap in a scripted
/// carrier and an isolated store per test case.
#[derive(Clone)]
pub struct AppState {
    /// Carrier API collaborator
    pub carrier: Arc<dyn CarrierApi>,
    /// Token records keyed by order id
    pub token_store: Arc<dyn TokenStore>,
}

impl AppState {
    pub fn new(carrier: Arc<dyn CarrierApi>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            carrier,
            token_store,
        }
    }
}
