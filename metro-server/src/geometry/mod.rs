//! Route geometry.
//!
//! Two ways to draw the track between stations: slice the real-world trace
//! ([`extract_segment`]) or interpolate a curve through the station
//! coordinates ([`smooth_path`]). [`GeometryMode`] selects between them.

mod matcher;
mod smooth;

use std::fmt;
use std::str::FromStr;

pub use matcher::{extract_segment, nearest_index};
pub use smooth::{DEFAULT_SAMPLES_PER_POINT, smooth_path};

/// How route geometry is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryMode {
    /// Slice the external track trace between stations.
    #[default]
    Trace,
    /// Spline through station coordinates.
    Smooth,
}

/// Error returned when parsing an unknown geometry mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid geometry mode {0:?}: expected trace or smooth")]
pub struct InvalidGeometryMode(String);

impl FromStr for GeometryMode {
    type Err = InvalidGeometryMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "kml" => Ok(GeometryMode::Trace),
            "smooth" | "spline" => Ok(GeometryMode::Smooth),
            _ => Err(InvalidGeometryMode(s.to_string())),
        }
    }
}

impl fmt::Display for GeometryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryMode::Trace => f.write_str("trace"),
            GeometryMode::Smooth => f.write_str("smooth"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("trace".parse(), Ok(GeometryMode::Trace));
        assert_eq!("KML".parse(), Ok(GeometryMode::Trace));
        assert_eq!(" smooth ".parse(), Ok(GeometryMode::Smooth));
        assert!("curvy".parse::<GeometryMode>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for mode in [GeometryMode::Trace, GeometryMode::Smooth] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
