//! Building map documents from the network, traces and planned routes.

use std::collections::HashSet;

use askama::Template;
use tracing::{debug, warn};

use crate::domain::{Coord, LineFilter};
use crate::geometry::{DEFAULT_SAMPLES_PER_POINT, GeometryMode, extract_segment, smooth_path};
use crate::network::{MAP_CENTRE, MetroNetwork};
use crate::planner::{Leg, Route};
use crate::trace::TrackTraces;

use super::popup::{StationPopup, StepPopup};
use super::{Layer, MapDocument, MapError};

/// Zoom for whole-network maps.
pub const NETWORK_ZOOM: u8 = 12;

/// Zoom for route maps.
pub const ROUTE_ZOOM: u8 = 13;

const STATION_ICON: &str = "🚉";
const TRANSFER_ICON: &str = "🔄";

/// Composes map documents.
pub struct MapComposer<'a> {
    network: &'a MetroNetwork,
    traces: &'a TrackTraces,
    mode: GeometryMode,
}

impl<'a> MapComposer<'a> {
    pub fn new(network: &'a MetroNetwork, traces: &'a TrackTraces, mode: GeometryMode) -> Self {
        Self {
            network,
            traces,
            mode,
        }
    }

    fn centre() -> Coord {
        Coord::new(MAP_CENTRE.0, MAP_CENTRE.1)
    }

    /// Map of every line passing `filter`.
    ///
    /// Each line is drawn first, from its full trace or as a spline through
    /// its stations depending on the mode, then a marker and a small dot
    /// for each station. An interchange is drawn once, with the first line
    /// that reaches it.
    pub fn network_map(&self, filter: LineFilter) -> Result<MapDocument, MapError> {
        let registry = self.network.registry();
        let mut doc = MapDocument::new(Self::centre(), NETWORK_ZOOM);
        let mut drawn: HashSet<&str> = HashSet::new();

        for line in registry.lines().filter(|l| filter.includes(*l)) {
            let points = match self.mode {
                GeometryMode::Smooth => {
                    let coords: Vec<Coord> = registry
                        .line_stations(line)
                        .iter()
                        .filter_map(|name| registry.coord(name))
                        .collect();
                    Some(smooth_path(&coords, DEFAULT_SAMPLES_PER_POINT))
                }
                GeometryMode::Trace => {
                    let trace = self.traces.for_line(line).map(<[Coord]>::to_vec);
                    if trace.is_none() {
                        warn!(line = %line, trace = line.trace_name(), "trace feature missing");
                    }
                    trace
                }
            };
            if let Some(points) = points.filter(|p| p.len() > 1) {
                doc.push(Layer::Polyline {
                    points,
                    color: line.colour(),
                    weight: 4,
                    opacity: 1.0,
                    popup: Some(line.name().to_string()),
                });
            }

            for name in registry.line_stations(line) {
                if !drawn.insert(name.as_str()) {
                    continue;
                }
                let Some(coord) = registry.coord(name) else {
                    continue;
                };

                let popup_html = StationPopup {
                    station: name,
                    emoji: line.emoji(),
                    line: line.name(),
                }
                .render()?;

                doc.push(Layer::Marker {
                    at: coord,
                    tooltip: name.clone(),
                    popup_html,
                    icon: STATION_ICON,
                });
                doc.push(Layer::CircleMarker {
                    at: coord,
                    radius: 3,
                    color: line.colour(),
                    fill_opacity: 1.0,
                    weight: 2,
                    opacity: 0.8,
                });
            }
        }

        Ok(doc)
    }

    /// Map of a planned route.
    ///
    /// All traces are drawn faintly as background, then the route geometry
    /// leg by leg, then a marker and a line-coloured dot per step.
    pub fn route_map(&self, route: &Route) -> Result<MapDocument, MapError> {
        let registry = self.network.registry();
        let mut doc = MapDocument::new(Self::centre(), ROUTE_ZOOM);

        for line in registry.lines() {
            if let Some(points) = self.traces.for_line(line) {
                doc.push(Layer::Polyline {
                    points: points.to_vec(),
                    color: line.colour(),
                    weight: 3,
                    opacity: 0.3,
                    popup: None,
                });
            }
        }

        for leg in route.legs() {
            match self.leg_geometry(&leg) {
                Some(points) if points.len() > 1 => doc.push(Layer::Polyline {
                    points,
                    color: leg.line.colour(),
                    weight: 5,
                    opacity: 1.0,
                    popup: Some(leg.line.name().to_string()),
                }),
                _ => debug!(line = %leg.line, stations = leg.stations.len(), "no geometry for leg"),
            }
        }

        for step in route.steps() {
            let Some(coord) = registry.coord(&step.station) else {
                continue;
            };

            let popup_html = StepPopup {
                station: &step.station,
                line: step.line.name(),
                transfer_to: step.transfer_to.map(|l| l.name()),
            }
            .render()?;

            doc.push(Layer::Marker {
                at: coord,
                tooltip: step.station.clone(),
                popup_html,
                icon: if step.is_transfer {
                    TRANSFER_ICON
                } else {
                    STATION_ICON
                },
            });
            doc.push(Layer::CircleMarker {
                at: coord,
                radius: 8,
                color: step.line.colour(),
                fill_opacity: 0.8,
                weight: 2,
                opacity: 1.0,
            });
        }

        Ok(doc)
    }

    /// Track geometry for one leg, or `None` when it cannot be drawn.
    ///
    /// In trace mode each consecutive station pair is matched onto the
    /// line's trace and the slices are joined; a leg whose line has no
    /// trace is omitted. In smooth mode a spline is drawn through the
    /// stations.
    pub fn leg_geometry(&self, leg: &Leg<'_>) -> Option<Vec<Coord>> {
        let registry = self.network.registry();
        let coords: Vec<Coord> = leg
            .stations
            .iter()
            .filter_map(|name| registry.coord(name))
            .collect();

        match self.mode {
            GeometryMode::Smooth => Some(smooth_path(&coords, DEFAULT_SAMPLES_PER_POINT)),
            GeometryMode::Trace => {
                let Some(trace) = self.traces.for_line(leg.line) else {
                    warn!(line = %leg.line, trace = leg.line.trace_name(), "trace feature missing");
                    return None;
                };
                let mut points: Vec<Coord> = Vec::new();
                for pair in coords.windows(2) {
                    for p in extract_segment(trace, pair[0], pair[1]) {
                        if points.last() != Some(&p) {
                            points.push(p);
                        }
                    }
                }
                Some(points)
            }
        }
    }
}
