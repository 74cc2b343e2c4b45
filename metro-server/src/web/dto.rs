//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station};
use crate::planner::{Route, RouteStep};

/// Route form submitted from the index page.
#[derive(Debug, Default, Deserialize)]
pub struct RouteForm {
    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,
}

/// Query for the full-screen map.
#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub start: Option<String>,
    pub end: Option<String>,

    /// `red`, `green` or `all`
    pub line: Option<String>,
}

/// Query for the JSON route endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RouteQuery {
    /// Both station names, trimmed, or the name of the first one missing.
    pub fn stations(&self) -> Result<(&str, &str), &'static str> {
        Ok((
            required(self.start.as_deref(), "start")?,
            required(self.end.as_deref(), "end")?,
        ))
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, &'static str> {
    value.map(str::trim).filter(|v| !v.is_empty()).ok_or(name)
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub start: String,
    pub end: String,

    /// Distinct stations visited
    pub stops: usize,

    /// Line changes
    pub transfers: usize,

    pub steps: Vec<RouteStep>,
}

impl RouteResponse {
    pub fn from_route(route: Route) -> Self {
        Self {
            start: route.origin().unwrap_or_default().to_string(),
            end: route.destination().unwrap_or_default().to_string(),
            stops: route.stop_count(),
            transfers: route.transfer_count(),
            steps: route.into_steps(),
        }
    }
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<Line>,
    pub is_interchange: bool,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        let coord = station.coord();
        Self {
            name: station.name().to_string(),
            lat: coord.lat,
            lon: coord.lon,
            lines: station.lines().to_vec(),
            is_interchange: station.is_interchange(),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
