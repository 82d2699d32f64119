//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkModel;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The network is loaded once at startup and never mutated, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded transit network
    pub network: Arc<NetworkModel>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkModel, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
