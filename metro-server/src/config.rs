//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::geometry::{GeometryMode, InvalidGeometryMode};
use crate::trace::{TraceCacheConfig, TraceSource};

/// Error reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Bundled trace, resolved against the crate so any working directory works.
const DEFAULT_TRACE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/surat_metro.kml");

const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Configuration for the metro server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Where the track trace is read from.
    pub trace: TraceSource,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// How route geometry is drawn.
    pub geometry: GeometryMode,

    /// How long a parsed trace is reused.
    pub trace_ttl: Duration,

    /// Also write each rendered map to `<static_dir>/map.html`.
    pub write_map_artifact: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            trace: TraceSource::File(PathBuf::from(DEFAULT_TRACE)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            geometry: GeometryMode::default(),
            trace_ttl: TraceCacheConfig::default().ttl,
            write_map_artifact: false,
        }
    }
}

impl ServerConfig {
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_trace(mut self, trace: TraceSource) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_geometry(mut self, mode: GeometryMode) -> Self {
        self.geometry = mode;
        self
    }

    pub fn with_trace_ttl(mut self, ttl: Duration) -> Self {
        self.trace_ttl = ttl;
        self
    }

    pub fn with_map_artifact(mut self, enabled: bool) -> Self {
        self.write_map_artifact = enabled;
        self
    }

    /// Cache settings for the trace loader.
    pub fn trace_cache(&self) -> TraceCacheConfig {
        TraceCacheConfig {
            ttl: self.trace_ttl,
        }
    }

    /// Path of the map artifact, when enabled.
    pub fn map_artifact_path(&self) -> Option<PathBuf> {
        self.write_map_artifact
            .then(|| self.static_dir.join("map.html"))
    }

    /// Read configuration from `METRO_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("METRO_BIND_ADDR") {
            let addr = addr.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "METRO_BIND_ADDR",
                reason: format!("{e}"),
            })?;
            config = config.with_bind_addr(addr);
        }
        if let Some(trace) = lookup("METRO_TRACE") {
            config = config.with_trace(TraceSource::parse(&trace));
        }
        if let Some(dir) = lookup("METRO_STATIC_DIR") {
            config = config.with_static_dir(dir.trim());
        }
        if let Some(mode) = lookup("METRO_GEOMETRY") {
            let mode = mode
                .parse()
                .map_err(|e: InvalidGeometryMode| ConfigError::Invalid {
                    var: "METRO_GEOMETRY",
                    reason: e.to_string(),
                })?;
            config = config.with_geometry(mode);
        }
        if let Some(secs) = lookup("METRO_TRACE_TTL_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "METRO_TRACE_TTL_SECS",
                reason: format!("{e}"),
            })?;
            config = config.with_trace_ttl(Duration::from_secs(secs));
        }
        if let Some(flag) = lookup("METRO_WRITE_MAP_ARTIFACT") {
            let enabled = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
            config = config.with_map_artifact(enabled);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.geometry, GeometryMode::Trace);
        assert_eq!(config.trace_ttl, Duration::from_secs(300));
        assert_eq!(config.map_artifact_path(), None);
        assert_eq!(config.trace.to_string(), DEFAULT_TRACE);
    }

    #[test]
    fn default_paths_do_not_depend_on_working_directory() {
        let config = ServerConfig::default();
        assert!(config.static_dir.is_absolute());
        assert!(config.static_dir.join("style.css").is_file());
        match &config.trace {
            TraceSource::File(path) => {
                assert!(path.is_absolute());
                assert!(path.is_file());
            }
            other => panic!("unexpected default source: {other}"),
        }
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("METRO_BIND_ADDR", "0.0.0.0:8080"),
            ("METRO_TRACE", "https://example.com/metro.kml"),
            ("METRO_STATIC_DIR", "public"),
            ("METRO_GEOMETRY", "smooth"),
            ("METRO_TRACE_TTL_SECS", "60"),
            ("METRO_WRITE_MAP_ARTIFACT", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.trace,
            TraceSource::Url("https://example.com/metro.kml".into())
        );
        assert_eq!(config.geometry, GeometryMode::Smooth);
        assert_eq!(config.trace_cache().ttl, Duration::from_secs(60));
        assert_eq!(
            config.map_artifact_path(),
            Some(PathBuf::from("public/map.html"))
        );
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("METRO_GEOMETRY", "wiggly")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid METRO_GEOMETRY"));

        assert!(ServerConfig::from_lookup(lookup(&[("METRO_TRACE_TTL_SECS", "soon")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("METRO_BIND_ADDR", "nowhere")])).is_err());
    }

    #[test]
    fn artifact_flag_is_opt_in() {
        let off = ServerConfig::from_lookup(lookup(&[("METRO_WRITE_MAP_ARTIFACT", "0")])).unwrap();
        assert!(!off.write_map_artifact);
        let on = ServerConfig::default().with_map_artifact(true);
        assert_eq!(on.map_artifact_path(), Some(PathBuf::from("static/map.html")));
    }
}
