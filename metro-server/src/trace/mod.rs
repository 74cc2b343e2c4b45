//! External track traces.
//!
//! The physical route of each line comes from a KML document authored
//! independently of the station list. Each named placemark becomes a
//! polyline; lines look theirs up by [`Line::trace_name`].

mod cache;
mod error;
mod kml;
mod source;

use std::collections::HashMap;

pub use cache::{CachedTraceLoader, TraceCacheConfig};
pub use error::TraceError;
pub use kml::{parse_coordinates, parse_kml};
pub use source::{TraceLoader, TraceSource};

use crate::domain::{Coord, Line};

/// Parsed polylines keyed by feature name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTraces {
    features: HashMap<String, Vec<Coord>>,
}

impl TrackTraces {
    pub fn new(features: HashMap<String, Vec<Coord>>) -> Self {
        Self { features }
    }

    /// Polyline of the feature called `name`.
    pub fn get(&self, name: &str) -> Option<&[Coord]> {
        self.features.get(name).map(Vec::as_slice)
    }

    /// Polyline for `line`, if the trace has it.
    pub fn for_line(&self, line: Line) -> Option<&[Coord]> {
        self.get(line.trace_name())
    }

    /// Feature names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.features.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_trace_names() {
        let mut features = HashMap::new();
        features.insert("Orange Line".to_string(), vec![Coord::new(21.0, 72.0)]);
        let traces = TrackTraces::new(features);

        assert_eq!(traces.for_line(Line::Red).map(<[_]>::len), Some(1));
        assert!(traces.for_line(Line::Green).is_none());
        assert!(traces.get("Red Line").is_none());
        assert_eq!(traces.names(), vec!["Orange Line"]);
    }

    #[test]
    fn empty_traces() {
        let traces = TrackTraces::default();
        assert!(traces.is_empty());
        assert_eq!(traces.len(), 0);
    }
}
