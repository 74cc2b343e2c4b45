//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Line;
use crate::network::StationRegistry;
use crate::planner::{Route, RouteStep};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form, and the route once one is chosen.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub options: Vec<StationOption>,
    pub notice: Option<String>,
    pub route: Option<RouteView>,
    pub map_url: Option<String>,
}

/// Whole network with every line's stations.
#[derive(Template)]
#[template(path = "all_routes.html")]
pub struct AllRoutesTemplate {
    pub lines: Vec<LineView>,
    pub station_count: usize,
    pub map_url: String,
}

/// Per-line station lists and interchanges.
#[derive(Template)]
#[template(path = "route_info.html")]
pub struct RouteInfoTemplate {
    pub lines: Vec<LineView>,
    pub interchanges: Vec<String>,
    pub map_url: String,
}

/// Alphabetical station table.
#[derive(Template)]
#[template(path = "station_details.html")]
pub struct StationDetailsTemplate {
    pub stations: Vec<StationDetailView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Map Page (standalone, embedded by the pages above)
// ============================================================================

/// Full-screen Leaflet map.
///
/// `map_json` must come from [`crate::map::MapDocument::to_script_json`]; it
/// is inserted unescaped inside a `<script>` element.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub title: String,
    pub map_json: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station in the route form's drop-downs.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub name: String,
    pub start_selected: bool,
    pub end_selected: bool,
}

impl StationOption {
    /// Options for every station, alphabetically, with the current choice
    /// pre-selected.
    pub fn list(registry: &StationRegistry, start: &str, end: &str) -> Vec<Self> {
        registry
            .sorted_names()
            .into_iter()
            .map(|name| StationOption {
                name: name.to_string(),
                start_selected: name == start,
                end_selected: name == end,
            })
            .collect()
    }
}

/// Route step view model.
#[derive(Debug, Clone)]
pub struct StepView {
    pub station: String,
    pub line: &'static str,
    pub emoji: &'static str,
    pub colour: &'static str,
    pub is_transfer: bool,
    pub transfer_to: Option<&'static str>,
}

impl StepView {
    pub fn from_step(step: &RouteStep) -> Self {
        Self {
            station: step.station.clone(),
            line: step.line.name(),
            emoji: step.line.emoji(),
            colour: step.line.colour(),
            is_transfer: step.is_transfer,
            transfer_to: step.transfer_to.map(Line::name),
        }
    }
}

/// Route view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub origin: String,
    pub destination: String,
    pub stops: usize,
    pub transfers: usize,
    pub steps: Vec<StepView>,
}

impl RouteView {
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().unwrap_or_default().to_string(),
            destination: route.destination().unwrap_or_default().to_string(),
            stops: route.stop_count(),
            transfers: route.transfer_count(),
            steps: route.steps().iter().map(StepView::from_step).collect(),
        }
    }

    /// e.g. "1 change" or "2 changes"
    pub fn transfers_label(&self) -> String {
        match self.transfers {
            0 => "Direct".to_string(),
            1 => "1 change".to_string(),
            n => format!("{n} changes"),
        }
    }
}

/// A line and its stations, in running order.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: &'static str,
    pub emoji: &'static str,
    pub colour: &'static str,
    pub slug: &'static str,
    pub corridor: u8,
    pub stations: Vec<String>,
}

impl LineView {
    pub fn from_line(registry: &StationRegistry, line: Line) -> Self {
        Self {
            name: line.name(),
            emoji: line.emoji(),
            colour: line.colour(),
            slug: line.slug(),
            corridor: line.corridor(),
            stations: registry.line_stations(line).to_vec(),
        }
    }

    /// Every line in the registry.
    pub fn all(registry: &StationRegistry) -> Vec<Self> {
        registry
            .lines()
            .map(|line| Self::from_line(registry, line))
            .collect()
    }

    /// First and last station, e.g. "Sarthana – Surat Dream City Station".
    pub fn terminals(&self) -> String {
        match (self.stations.first(), self.stations.last()) {
            (Some(first), Some(last)) => format!("{first} – {last}"),
            _ => String::new(),
        }
    }
}

/// Row of the station table.
#[derive(Debug, Clone)]
pub struct StationDetailView {
    pub name: String,
    pub line: &'static str,
    pub emoji: &'static str,
    pub corridor: u8,
    pub is_interchange: bool,
}

impl StationDetailView {
    /// One row per station, interchanges once under their first line,
    /// sorted by name.
    pub fn list(registry: &StationRegistry) -> Vec<Self> {
        let mut rows: Vec<Self> = registry
            .stations()
            .map(|station| {
                let line = station.primary_line();
                Self {
                    name: station.name().to_string(),
                    line: line.name(),
                    emoji: line.emoji(),
                    corridor: line.corridor(),
                    is_interchange: station.is_interchange(),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}
