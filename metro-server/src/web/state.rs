//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::network::MetroNetwork;
use crate::trace::CachedTraceLoader;

/// Shared application state.
///
/// The network is immutable; the trace loader synchronises its own cache.
#[derive(Clone)]
pub struct AppState {
    /// Stations, lines and the topology graph
    pub network: Arc<MetroNetwork>,

    /// Cached track trace loader
    pub traces: Arc<CachedTraceLoader>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: MetroNetwork, traces: CachedTraceLoader, config: ServerConfig) -> Self {
        Self {
            network: Arc::new(network),
            traces: Arc::new(traces),
            config: Arc::new(config),
        }
    }
}
