//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is read-only after load, so handlers share it without
/// locking; every request allocates its own search state. The handle is
/// passed explicitly into each query so validation and computation always
/// see the same graph.
#[derive(Clone)]
pub struct AppState {
    /// The loaded metro network
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
