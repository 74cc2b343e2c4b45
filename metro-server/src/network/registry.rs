//! Station registry: station names, coordinates and line membership.

use std::collections::HashMap;

use crate::domain::{Coord, Line, Station};

/// Every station of the network, grouped by line.
///
/// A station that appears in more than one line definition is stored once
/// and becomes an interchange. The coordinate from its first appearance is
/// kept.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Station by name.
    stations: HashMap<String, Station>,

    /// Station names in registration order.
    order: Vec<String>,

    /// Ordered station names per line, in line order.
    lines: Vec<(Line, Vec<String>)>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line and its stations in running order.
    ///
    /// Registering the same line twice appends to its station list.
    pub fn add_line<I, S>(&mut self, line: Line, stations: I)
    where
        I: IntoIterator<Item = (S, Coord)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        for (name, coord) in stations {
            let name = name.into();
            match self.stations.get_mut(&name) {
                Some(existing) => existing.add_line(line),
                None => {
                    self.stations
                        .insert(name.clone(), Station::new(name.clone(), coord, line));
                    self.order.push(name.clone());
                }
            }
            names.push(name);
        }

        match self.lines.iter_mut().find(|(l, _)| *l == line) {
            Some((_, existing)) => existing.extend(names),
            None => self.lines.push((line, names)),
        }
    }

    /// Look up a station by name.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Whether `name` is a known station.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Coordinate of a station, if known.
    pub fn coord(&self, name: &str) -> Option<Coord> {
        self.get(name).map(Station::coord)
    }

    /// Lines in registration order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.iter().map(|(line, _)| *line)
    }

    /// Station names on `line`, in running order. Empty for an unknown line.
    pub fn line_stations(&self, line: Line) -> &[String] {
        self.lines
            .iter()
            .find(|(l, _)| *l == line)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// All stations in registration order, each exactly once.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.order.iter().filter_map(|name| self.stations.get(name))
    }

    /// Stations served by more than one line.
    pub fn interchanges(&self) -> Vec<&Station> {
        self.stations().filter(|s| s.is_interchange()).collect()
    }

    /// Station names sorted alphabetically.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.order.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station is registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for a [`StationRegistry`].
///
/// Provides a fluent API for declaring lines.
#[derive(Debug, Default)]
pub struct StationRegistryBuilder {
    inner: StationRegistry,
}

impl StationRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line from `(name, latitude, longitude)` triples.
    pub fn line(mut self, line: Line, stations: &[(&str, f64, f64)]) -> Self {
        self.inner.add_line(
            line,
            stations
                .iter()
                .map(|&(name, lat, lon)| (name, Coord::new(lat, lon))),
        );
        self
    }

    /// Build the registry.
    pub fn build(self) -> StationRegistry {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> StationRegistry {
        StationRegistryBuilder::new()
            .line(Line::Red, &[("A", 0.0, 0.0), ("X", 1.0, 0.0), ("B", 2.0, 0.0)])
            .line(Line::Green, &[("C", 1.0, -1.0), ("X", 1.0, 0.5), ("D", 1.0, 1.0)])
            .build()
    }

    #[test]
    fn empty_registry() {
        let registry = StationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("A").is_none());
        assert!(registry.line_stations(Line::Red).is_empty());
    }

    #[test]
    fn shared_station_stored_once() {
        let registry = small();
        assert_eq!(registry.len(), 5);

        let x = registry.get("X").unwrap();
        assert!(x.is_interchange());
        assert_eq!(x.lines(), &[Line::Red, Line::Green]);
        // First registration wins
        assert_eq!(x.coord(), Coord::new(1.0, 0.0));
    }

    #[test]
    fn line_stations_keep_running_order() {
        let registry = small();
        assert_eq!(registry.line_stations(Line::Red), &["A", "X", "B"]);
        assert_eq!(registry.line_stations(Line::Green), &["C", "X", "D"]);
        assert_eq!(
            registry.lines().collect::<Vec<_>>(),
            vec![Line::Red, Line::Green]
        );
    }

    #[test]
    fn stations_in_registration_order() {
        let registry = small();
        let names: Vec<&str> = registry.stations().map(Station::name).collect();
        assert_eq!(names, vec!["A", "X", "B", "C", "D"]);
    }

    #[test]
    fn interchanges_and_sorted_names() {
        let registry = small();
        let interchanges: Vec<&str> = registry
            .interchanges()
            .into_iter()
            .map(Station::name)
            .collect();
        assert_eq!(interchanges, vec!["X"]);
        assert_eq!(registry.sorted_names(), vec!["A", "B", "C", "D", "X"]);
    }

    #[test]
    fn coord_lookup() {
        let registry = small();
        assert_eq!(registry.coord("D"), Some(Coord::new(1.0, 1.0)));
        assert_eq!(registry.coord("Z"), None);
        assert!(registry.contains("C"));
        assert!(!registry.contains("c"));
    }
}
