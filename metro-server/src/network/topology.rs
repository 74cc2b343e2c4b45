//! Topology graph built from the registry's line definitions.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::domain::Line;

use super::StationRegistry;

/// Undirected station graph.
///
/// Nodes are station names; an edge joins two stations that are adjacent
/// on some line and carries that line as its weight. Every edge has unit
/// cost for routing purposes.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    graph: UnGraph<String, Line>,
    nodes: HashMap<String, NodeIndex>,
}

impl Topology {
    /// Build the graph from every line in `registry`.
    ///
    /// A station shared by several lines becomes a single node, and an
    /// adjacency listed twice becomes a single edge (the first line wins).
    pub fn build(registry: &StationRegistry) -> Self {
        let mut topology = Self::default();

        for line in registry.lines() {
            let stations = registry.line_stations(line);
            for name in stations {
                topology.node(name);
            }
            for pair in stations.windows(2) {
                let a = topology.node(&pair[0]);
                let b = topology.node(&pair[1]);
                if a != b && topology.graph.find_edge(a, b).is_none() {
                    topology.graph.add_edge(a, b, line);
                }
            }
        }

        topology
    }

    /// Get or insert the node for `name`.
    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), idx);
        idx
    }

    /// Node index of a station.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.nodes.get(name).copied()
    }

    /// Station name stored at `idx`.
    pub fn name_of(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The line joining two adjacent stations, if they are adjacent.
    pub fn line_between(&self, a: &str, b: &str) -> Option<Line> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.line_between_nodes(a, b)
    }

    pub(crate) fn line_between_nodes(&self, a: NodeIndex, b: NodeIndex) -> Option<Line> {
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Names of the stations adjacent to `name`, sorted.
    pub fn neighbours(&self, name: &str) -> Vec<&str> {
        let Some(idx) = self.index_of(name) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.name_of(n))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying graph, for search algorithms.
    pub(crate) fn graph(&self) -> &UnGraph<String, Line> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::StationRegistryBuilder;

    fn cross() -> Topology {
        let registry = StationRegistryBuilder::new()
            .line(Line::Red, &[("A", 0.0, 0.0), ("X", 1.0, 0.0), ("B", 2.0, 0.0)])
            .line(Line::Green, &[("C", 1.0, -1.0), ("X", 1.0, 0.0), ("D", 1.0, 1.0)])
            .build();
        Topology::build(&registry)
    }

    #[test]
    fn one_node_per_station() {
        let topology = cross();
        assert_eq!(topology.node_count(), 5);
        assert_eq!(topology.edge_count(), 4);
        assert!(topology.contains("X"));
        assert!(!topology.contains("Y"));
    }

    #[test]
    fn edges_carry_their_line() {
        let topology = cross();
        assert_eq!(topology.line_between("A", "X"), Some(Line::Red));
        assert_eq!(topology.line_between("X", "A"), Some(Line::Red));
        assert_eq!(topology.line_between("X", "D"), Some(Line::Green));
        assert_eq!(topology.line_between("A", "B"), None);
        assert_eq!(topology.line_between("A", "nowhere"), None);
    }

    #[test]
    fn junction_has_neighbours_from_both_lines() {
        let topology = cross();
        assert_eq!(topology.neighbours("X"), vec!["A", "B", "C", "D"]);
        assert_eq!(topology.neighbours("A"), vec!["X"]);
        assert!(topology.neighbours("nowhere").is_empty());
    }

    #[test]
    fn repeated_adjacency_is_not_duplicated() {
        let registry = StationRegistryBuilder::new()
            .line(Line::Red, &[("A", 0.0, 0.0), ("B", 1.0, 0.0)])
            .line(Line::Green, &[("B", 1.0, 0.0), ("A", 0.0, 0.0)])
            .build();
        let topology = Topology::build(&registry);
        assert_eq!(topology.node_count(), 2);
        assert_eq!(topology.edge_count(), 1);
        assert_eq!(topology.line_between("A", "B"), Some(Line::Red));
    }

    #[test]
    fn name_and_index_agree() {
        let topology = cross();
        let idx = topology.index_of("C").unwrap();
        assert_eq!(topology.name_of(idx), Some("C"));
    }
}
