//! Route planning with line-change annotation.

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::network::MetroNetwork;

use super::route::{Route, RouteStep};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Start or end is not a known station
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The graph search found no path
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },
}

/// Plans routes over a [`MetroNetwork`].
pub struct Planner<'a> {
    network: &'a MetroNetwork,
}

impl<'a> Planner<'a> {
    pub fn new(network: &'a MetroNetwork) -> Self {
        Self { network }
    }

    /// Plan the route with the fewest stations between `start` and `end`.
    ///
    /// Every edge costs one, so the search returns a minimum-hop path; ties
    /// are broken by the search itself. The path is then annotated with the
    /// line travelled at each station. Where the line of the edge into a
    /// station differs from the line of the edge out of it, the station is
    /// emitted twice: a transfer step on the incoming line, then a plain
    /// step on the outgoing line. The first and last stations are never
    /// transfer steps.
    pub fn plan(&self, start: &str, end: &str) -> Result<Route, PlanError> {
        let topology = self.network.topology();
        let from = topology
            .index_of(start)
            .ok_or_else(|| PlanError::UnknownStation(start.to_string()))?;
        let to = topology
            .index_of(end)
            .ok_or_else(|| PlanError::UnknownStation(end.to_string()))?;

        let no_path = || PlanError::NoPath {
            from: start.to_string(),
            to: end.to_string(),
        };

        let (_, path) = astar(topology.graph(), from, |n| n == to, |_| 1u32, |_| 0)
            .ok_or_else(no_path)?;

        // Line of each hop; hop i joins path[i] and path[i + 1].
        let hops = path
            .windows(2)
            .map(|pair| topology.line_between_nodes(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(no_path)?;

        let names = path
            .iter()
            .map(|&idx| self.name(idx))
            .collect::<Result<Vec<_>, _>>()?;

        let mut current = match hops.first() {
            Some(&line) => line,
            None => self
                .network
                .station(start)
                .map_err(|_| PlanError::UnknownStation(start.to_string()))?
                .primary_line(),
        };

        let last = names.len() - 1;
        let mut steps = Vec::with_capacity(names.len() + 1);

        for (i, name) in names.iter().enumerate() {
            if i == 0 || i == last {
                steps.push(RouteStep::ride(*name, current));
                continue;
            }

            let incoming = hops[i - 1];
            let outgoing = hops[i];
            if incoming != outgoing {
                debug!(station = %name, from = %incoming, to = %outgoing, "line change");
                steps.push(RouteStep::transfer(*name, incoming, outgoing));
                steps.push(RouteStep::ride(*name, outgoing));
                current = outgoing;
            } else {
                steps.push(RouteStep::ride(*name, current));
            }
        }

        debug!(start, end, steps = steps.len(), "planned route");
        Ok(Route::new(steps))
    }

    fn name(&self, idx: NodeIndex) -> Result<&'a str, PlanError> {
        self.network
            .topology()
            .name_of(idx)
            .ok_or_else(|| PlanError::UnknownStation(format!("node {}", idx.index())))
    }
}
