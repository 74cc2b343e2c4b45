//! The static metro network.
//!
//! Stations and lines are declared once at start-up, turned into a
//! [`StationRegistry`] and a [`Topology`] graph, and then shared read-only
//! between requests.

mod registry;
mod surat;
mod topology;

pub use registry::{StationRegistry, StationRegistryBuilder};
pub use surat::{CORRIDOR_1, CORRIDOR_2, MAP_CENTRE, surat_registry};
pub use topology::Topology;

use crate::domain::{DomainError, Station};

/// Registry plus topology graph, built together so they always agree.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    registry: StationRegistry,
    topology: Topology,
}

impl MetroNetwork {
    /// Build the topology for `registry`.
    pub fn new(registry: StationRegistry) -> Self {
        let topology = Topology::build(&registry);
        Self { registry, topology }
    }

    /// The Surat Metro network.
    pub fn surat() -> Self {
        Self::new(surat_registry())
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Look up a station, failing with [`DomainError::UnknownStation`].
    pub fn station(&self, name: &str) -> Result<&Station, DomainError> {
        self.registry
            .get(name)
            .ok_or_else(|| DomainError::UnknownStation(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    #[test]
    fn surat_topology_is_two_paths_joined_once() {
        let network = MetroNetwork::surat();
        let topology = network.topology();

        assert_eq!(topology.node_count(), 37);
        // 19 red edges + 17 green edges
        assert_eq!(topology.edge_count(), 36);
        assert_eq!(topology.neighbours("Majura Gate").len(), 4);
        assert_eq!(
            topology.line_between("Majura Gate", "Athwa Chopati"),
            Some(Line::Green)
        );
        assert_eq!(
            topology.line_between("Kadarsha Ni Nal", "Majura Gate"),
            Some(Line::Red)
        );
    }

    #[test]
    fn every_non_interchange_station_has_at_most_two_neighbours() {
        let network = MetroNetwork::surat();
        for station in network.registry().stations() {
            let degree = network.topology().neighbours(station.name()).len();
            if station.is_interchange() {
                assert_eq!(degree, 4);
            } else {
                assert!((1..=2).contains(&degree), "{}", station.name());
            }
        }
    }

    #[test]
    fn station_lookup() {
        let network = MetroNetwork::surat();
        assert!(network.station("Saroli").is_ok());
        assert_eq!(
            network.station("Atlantis").unwrap_err(),
            DomainError::UnknownStation("Atlantis".into())
        );
    }
}
