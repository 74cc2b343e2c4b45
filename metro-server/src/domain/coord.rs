//! Geographic coordinates.

use serde::{Serialize, Serializer};

/// A (latitude, longitude) pair in decimal degrees.
///
/// Serializes as a `[lat, lon]` array, the shape map libraries expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar Euclidean distance in degrees.
    ///
    /// Ignores projection distortion; only meaningful for comparing
    /// distances over a city-sized area.
    pub fn planar_distance(&self, other: &Coord) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq([self.lat, self.lon])
    }
}
