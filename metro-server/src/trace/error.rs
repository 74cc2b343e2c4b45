//! Track trace error types.

/// Errors that can occur while loading or parsing a track trace.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Reading the trace file failed
    #[error("failed to read trace file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("trace server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The document is not well-formed KML
    #[error("KML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A coordinate tuple could not be read as numbers
    #[error("bad coordinate {tuple:?} in feature {feature:?}")]
    Coordinate { feature: String, tuple: String },
}
