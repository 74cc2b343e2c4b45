//! KML parsing.
//!
//! Only the parts of KML 2.2 that carry line geometry are modelled:
//! `Document` and `Folder` containers, and `Placemark`s holding a
//! `LineString`, a `Polygon` (its outer ring), a `MultiGeometry` of either,
//! or a `Point`.
//! Everything else (styles, descriptions, extended data) is skipped.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Coord;

use super::TraceError;

/// Any element that can hold placemarks, including the `<kml>` root.
#[derive(Debug, Default, Deserialize)]
struct Container {
    #[serde(rename = "Placemark", default)]
    placemarks: Vec<Placemark>,
    #[serde(rename = "Document", default)]
    documents: Vec<Container>,
    #[serde(rename = "Folder", default)]
    folders: Vec<Container>,
}

#[derive(Debug, Deserialize)]
struct Placemark {
    name: Option<String>,
    #[serde(rename = "LineString")]
    line_string: Option<Geometry>,
    #[serde(rename = "Polygon")]
    polygon: Option<Polygon>,
    #[serde(rename = "MultiGeometry")]
    multi_geometry: Option<MultiGeometry>,
    #[serde(rename = "Point")]
    point: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Polygon {
    #[serde(rename = "outerBoundaryIs")]
    outer: Option<Boundary>,
}

#[derive(Debug, Deserialize)]
struct Boundary {
    #[serde(rename = "LinearRing")]
    ring: Option<Geometry>,
}

impl Polygon {
    fn coordinates(&self) -> Option<&str> {
        self.outer
            .as_ref()
            .and_then(|b| b.ring.as_ref())
            .and_then(|g| g.coordinates.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct MultiGeometry {
    #[serde(rename = "LineString", default)]
    line_strings: Vec<Geometry>,
    #[serde(rename = "Polygon", default)]
    polygons: Vec<Polygon>,
}

impl Placemark {
    /// The first `coordinates` text in this placemark.
    fn coordinates(&self) -> Option<&str> {
        self.line_string
            .as_ref()
            .and_then(|g| g.coordinates.as_deref())
            .or_else(|| self.polygon.as_ref().and_then(Polygon::coordinates))
            .or_else(|| {
                self.multi_geometry.as_ref().and_then(|mg| {
                    mg.line_strings
                        .iter()
                        .find_map(|g| g.coordinates.as_deref())
                        .or_else(|| mg.polygons.iter().find_map(Polygon::coordinates))
                })
            })
            .or_else(|| self.point.as_ref().and_then(|g| g.coordinates.as_deref()))
    }
}

/// Parse a KML document into polylines keyed by placemark name.
///
/// Placemarks are visited depth first, a container's own placemarks before
/// those of nested documents and folders; when two share a name the one
/// visited last wins. Placemarks without a name or without coordinates are
/// skipped.
pub fn parse_kml(xml: &str) -> Result<HashMap<String, Vec<Coord>>, TraceError> {
    let root: Container = quick_xml::de::from_str(xml)?;
    let mut features = HashMap::new();
    collect(&root, &mut features)?;
    Ok(features)
}

fn collect(
    container: &Container,
    features: &mut HashMap<String, Vec<Coord>>,
) -> Result<(), TraceError> {
    for placemark in &container.placemarks {
        let (Some(name), Some(text)) = (placemark.name.as_deref(), placemark.coordinates()) else {
            continue;
        };
        let name = name.trim();
        let coords = parse_coordinates(name, text)?;
        features.insert(name.to_string(), coords);
    }
    for nested in container.documents.iter().chain(&container.folders) {
        collect(nested, features)?;
    }
    Ok(())
}

/// Parse whitespace-separated `lon,lat[,alt]` tuples into coordinates.
///
/// Tuples with fewer than two components are skipped.
pub fn parse_coordinates(feature: &str, text: &str) -> Result<Vec<Coord>, TraceError> {
    let mut coords = Vec::new();
    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let (Some(lon), Some(lat)) = (parts.next(), parts.next()) else {
            continue;
        };
        let bad = || TraceError::Coordinate {
            feature: feature.to_string(),
            tuple: tuple.to_string(),
        };
        let lon: f64 = lon.trim().parse().map_err(|_| bad())?;
        let lat: f64 = lat.trim().parse().map_err(|_| bad())?;
        coords.push(Coord::new(lat, lon));
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Surat Metro</name>
    <Style id="line"><LineStyle><width>4</width></LineStyle></Style>
    <Folder>
      <name>Lines</name>
      <Placemark>
        <name>Orange Line</name>
        <styleUrl>#line</styleUrl>
        <LineString>
          <tessellate>1</tessellate>
          <coordinates>
            72.9084832,21.236086,0
            72.8978939,21.2290956,0
            72.8860303,21.2232511
          </coordinates>
        </LineString>
      </Placemark>
      <Placemark>
        <name>Green Line</name>
        <MultiGeometry>
          <LineString>
            <coordinates>72.7647846,21.2183247,0 72.7770538,21.2214452,0</coordinates>
          </LineString>
        </MultiGeometry>
      </Placemark>
    </Folder>
    <Placemark>
      <name>Majura Gate</name>
      <Point><coordinates>72.8185441,21.1807111,0</coordinates></Point>
    </Placemark>
    <Placemark>
      <description>No name, skipped</description>
      <LineString><coordinates>1,2 3,4</coordinates></LineString>
    </Placemark>
  </Document>
</kml>
"#;

    #[test]
    fn parses_nested_placemarks() {
        let features = parse_kml(SAMPLE).unwrap();
        assert_eq!(features.len(), 3);

        let orange = &features["Orange Line"];
        assert_eq!(orange.len(), 3);
        assert_eq!(orange[0], Coord::new(21.236086, 72.9084832));
        assert_eq!(orange[2], Coord::new(21.2232511, 72.8860303));

        let green = &features["Green Line"];
        assert_eq!(
            green,
            &vec![
                Coord::new(21.2183247, 72.7647846),
                Coord::new(21.2214452, 72.7770538),
            ]
        );

        assert_eq!(
            features["Majura Gate"],
            vec![Coord::new(21.1807111, 72.8185441)]
        );
    }

    #[test]
    fn polygon_uses_outer_ring() {
        let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
  <Placemark>
    <name>Depot</name>
    <Polygon>
      <outerBoundaryIs><LinearRing>
        <coordinates>72.80,21.10,0 72.81,21.10,0 72.81,21.11,0 72.80,21.10,0</coordinates>
      </LinearRing></outerBoundaryIs>
      <innerBoundaryIs><LinearRing>
        <coordinates>72.805,21.105 72.806,21.105 72.805,21.105</coordinates>
      </LinearRing></innerBoundaryIs>
    </Polygon>
  </Placemark>
  <Placemark>
    <name>Yard</name>
    <MultiGeometry>
      <Polygon><outerBoundaryIs><LinearRing>
        <coordinates>72.7,21.2 72.8,21.2 72.7,21.2</coordinates>
      </LinearRing></outerBoundaryIs></Polygon>
    </MultiGeometry>
  </Placemark>
</Document></kml>"#;
        let features = parse_kml(xml).unwrap();
        assert_eq!(features["Depot"].len(), 4);
        assert_eq!(features["Depot"][1], Coord::new(21.10, 72.81));
        assert_eq!(features["Yard"].len(), 3);
    }

    #[test]
    fn empty_document() {
        let features = parse_kml(r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document/></kml>"#)
            .unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let err = parse_kml("<kml><Document><Placemark></Document></kml>").unwrap_err();
        assert!(matches!(err, TraceError::Xml(_)));
    }

    #[test]
    fn coordinates_swap_to_lat_lon() {
        let coords = parse_coordinates("x", "72.5,21.5,10 73,22").unwrap();
        assert_eq!(coords, vec![Coord::new(21.5, 72.5), Coord::new(22.0, 73.0)]);
    }

    #[test]
    fn short_tuples_are_skipped() {
        let coords = parse_coordinates("x", "72.5 72.6,21.6").unwrap();
        assert_eq!(coords, vec![Coord::new(21.6, 72.6)]);
    }

    #[test]
    fn non_numeric_tuple_is_an_error() {
        let err = parse_coordinates("Green Line", "72.5,north,0").unwrap_err();
        match err {
            TraceError::Coordinate { feature, tuple } => {
                assert_eq!(feature, "Green Line");
                assert_eq!(tuple, "72.5,north,0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
