//! Annotated routes produced by the planner.

use serde::Serialize;

use crate::domain::Line;

/// One step of a planned route.
///
/// A station where the route changes line appears as two consecutive steps:
/// the first closes the incoming line and is marked as a transfer, the
/// second opens the outgoing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStep {
    /// Station name.
    pub station: String,

    /// Line being travelled on at this step.
    pub line: Line,

    /// Whether the passenger changes line here.
    pub is_transfer: bool,

    /// The line being changed to, for transfer steps.
    pub transfer_to: Option<Line>,
}

impl RouteStep {
    /// A plain (non-transfer) step.
    pub fn ride(station: impl Into<String>, line: Line) -> Self {
        Self {
            station: station.into(),
            line,
            is_transfer: false,
            transfer_to: None,
        }
    }

    /// A transfer step from `line` to `to`.
    pub fn transfer(station: impl Into<String>, line: Line, to: Line) -> Self {
        Self {
            station: station.into(),
            line,
            is_transfer: true,
            transfer_to: Some(to),
        }
    }
}

/// A maximal run of consecutive steps on the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg<'a> {
    pub line: Line,
    pub stations: Vec<&'a str>,
}

/// A planned route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    steps: Vec<RouteStep>,
}

impl Route {
    pub fn new(steps: Vec<RouteStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<RouteStep> {
        self.steps
    }

    /// Number of steps, counting a line change as two.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of stations visited (a line change counts once).
    pub fn stop_count(&self) -> usize {
        self.steps.len() - self.transfer_count()
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_transfer).count()
    }

    pub fn origin(&self) -> Option<&str> {
        self.steps.first().map(|s| s.station.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.steps.last().map(|s| s.station.as_str())
    }

    /// Split the route into single-line legs.
    ///
    /// The station where a change happens ends one leg and starts the next.
    pub fn legs(&self) -> Vec<Leg<'_>> {
        let mut legs: Vec<Leg<'_>> = Vec::new();
        for step in &self.steps {
            match legs.last_mut() {
                Some(leg) if leg.line == step.line => leg.stations.push(step.station.as_str()),
                _ => legs.push(Leg {
                    line: step.line,
                    stations: vec![step.station.as_str()],
                }),
            }
        }
        legs
    }
}
