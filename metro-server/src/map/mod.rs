//! Interactive map output.
//!
//! [`MapComposer`] turns the network, the track traces and planned routes
//! into a [`MapDocument`]; the web layer embeds that document in an HTML
//! page drawn with Leaflet.

mod artifact;
mod compose;
mod document;
mod popup;

pub use artifact::write_artifact;
pub use compose::{MapComposer, NETWORK_ZOOM, ROUTE_ZOOM};
pub use document::{Layer, MapDocument, POSITRON_ATTRIBUTION, POSITRON_TILES};
pub use popup::{StationPopup, StepPopup};

/// Error building or saving a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("failed to render popup: {0}")]
    Template(#[from] askama::Error),

    #[error("failed to encode map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write map to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
