//! Caching layer for parsed track traces.
//!
//! The trace changes rarely, but it is an external file that may be edited
//! while the server runs. Parsed traces are kept for a short TTL so most
//! requests skip the read and parse, and edits show up without a restart.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use super::{TraceError, TraceLoader, TraceSource, TrackTraces};

/// Configuration for the trace cache.
#[derive(Debug, Clone)]
pub struct TraceCacheConfig {
    /// TTL for a parsed trace.
    pub ttl: Duration,
}

impl Default for TraceCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// Trace loader with caching.
///
/// Wraps a [`TraceLoader`] and caches its parsed output, keyed by source.
/// Failed loads are not cached.
pub struct CachedTraceLoader {
    loader: TraceLoader,
    cache: MokaCache<String, Arc<TrackTraces>>,
}

impl CachedTraceLoader {
    /// Create a new cached loader.
    pub fn new(loader: TraceLoader, config: &TraceCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(8)
            .build();
        Self { loader, cache }
    }

    pub fn source(&self) -> &TraceSource {
        self.loader.source()
    }

    /// Get the parsed trace, loading it if not cached.
    pub async fn get(&self) -> Result<Arc<TrackTraces>, TraceError> {
        let key = self.loader.source().to_string();
        if let Some(traces) = self.cache.get(&key).await {
            return Ok(traces);
        }

        debug!(source = %key, "trace cache miss");
        let traces = Arc::new(self.loader.load().await?);
        self.cache.insert(key, traces.clone()).await;
        Ok(traces)
    }

    /// Drop the cached trace so the next request reloads it.
    #[cfg(test)]
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
