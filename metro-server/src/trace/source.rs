//! Where the track trace comes from, and loading it.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use super::kml::parse_kml;
use super::{TraceError, TrackTraces};

/// Location of the external KML trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSource {
    /// A file on disk.
    File(PathBuf),
    /// An HTTP(S) URL.
    Url(String),
}

impl TraceSource {
    /// Interpret `s` as a URL if it has an http(s) scheme, else as a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            TraceSource::Url(s.to_string())
        } else {
            TraceSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for TraceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSource::File(path) => write!(f, "{}", path.display()),
            TraceSource::Url(url) => f.write_str(url),
        }
    }
}

/// Reads and parses the trace from its source.
#[derive(Debug, Clone)]
pub struct TraceLoader {
    source: TraceSource,
    http: reqwest::Client,
}

impl TraceLoader {
    /// Create a loader for `source`.
    pub fn new(source: TraceSource) -> Result<Self, TraceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { source, http })
    }

    pub fn source(&self) -> &TraceSource {
        &self.source
    }

    /// Fetch the raw document.
    pub async fn fetch_text(&self) -> Result<String, TraceError> {
        match &self.source {
            TraceSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| TraceError::Io {
                        path: path.display().to_string(),
                        source,
                    })
            }
            TraceSource::Url(url) => {
                let response = self.http.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(TraceError::Status {
                        status: status.as_u16(),
                        url: url.clone(),
                    });
                }
                Ok(response.text().await?)
            }
        }
    }

    /// Fetch and parse the trace.
    pub async fn load(&self) -> Result<TrackTraces, TraceError> {
        debug!(source = %self.source, "loading track trace");
        let text = self.fetch_text().await?;
        let traces = TrackTraces::new(parse_kml(&text)?);
        info!(
            source = %self.source,
            features = traces.len(),
            "loaded track trace"
        );
        Ok(traces)
    }
}
