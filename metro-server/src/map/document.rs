//! Map document model.
//!
//! A map is a centre, a zoom level, a base tile layer and an ordered list
//! of overlay layers. The document is serialized to JSON and drawn by the
//! page's script; layer order is draw order.

use serde::Serialize;

use crate::domain::Coord;

/// Base tiles, CARTO "Positron".
pub const POSITRON_TILES: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

/// Attribution required by the Positron tiles.
pub const POSITRON_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors &copy; CARTO";

/// An overlay drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Polyline {
        points: Vec<Coord>,
        color: &'static str,
        weight: u8,
        opacity: f32,
        popup: Option<String>,
    },
    Marker {
        at: Coord,
        tooltip: String,
        /// Pre-rendered popup HTML.
        popup_html: String,
        /// Emoji shown as the marker icon.
        icon: &'static str,
    },
    CircleMarker {
        at: Coord,
        radius: u8,
        color: &'static str,
        fill_opacity: f32,
        weight: u8,
        opacity: f32,
    },
}

/// A complete map ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub center: Coord,
    pub zoom: u8,
    pub tiles: &'static str,
    pub attribution: &'static str,
    pub layers: Vec<Layer>,
}

impl MapDocument {
    /// An empty map over `center`.
    pub fn new(center: Coord, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            tiles: POSITRON_TILES,
            attribution: POSITRON_ATTRIBUTION,
            layers: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Number of polyline layers.
    pub fn polyline_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|l| matches!(l, Layer::Polyline { .. }))
            .count()
    }

    /// Number of marker layers.
    pub fn marker_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|l| matches!(l, Layer::Marker { .. }))
            .count()
    }

    /// JSON for embedding inside a `<script>` element.
    ///
    /// `</` is escaped so station or popup text cannot close the script.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_serialize_with_kind_tag() {
        let layer = Layer::CircleMarker {
            at: Coord::new(21.0, 72.0),
            radius: 3,
            color: "#ff0000",
            fill_opacity: 1.0,
            weight: 2,
            opacity: 0.5,
        };
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["kind"], "circle_marker");
        assert_eq!(json["at"], serde_json::json!([21.0, 72.0]));
        assert_eq!(json["radius"], 3);
    }

    #[test]
    fn counts_by_kind() {
        let mut doc = MapDocument::new(Coord::new(21.2, 72.85), 12);
        doc.push(Layer::Polyline {
            points: vec![],
            color: "#00ff00",
            weight: 4,
            opacity: 1.0,
            popup: None,
        });
        doc.push(Layer::Marker {
            at: Coord::new(21.2, 72.85),
            tooltip: "A".into(),
            popup_html: "<b>A</b>".into(),
            icon: "🚉",
        });
        assert_eq!(doc.polyline_count(), 1);
        assert_eq!(doc.marker_count(), 1);
    }

    #[test]
    fn script_json_cannot_close_script() {
        let mut doc = MapDocument::new(Coord::new(21.2, 72.85), 12);
        doc.push(Layer::Marker {
            at: Coord::new(21.2, 72.85),
            tooltip: "</script><script>alert(1)".into(),
            popup_html: String::new(),
            icon: "🚉",
        });
        let json = doc.to_script_json().unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }
}
