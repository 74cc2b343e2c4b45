//! Metro station type.

use super::{Coord, Line};

/// A metro station.
///
/// A station belongs to one line, or to several if it is an interchange.
/// Lines are kept in the order the station was registered on them, so the
/// first one is the station's primary line.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    coord: Coord,
    lines: Vec<Line>,
}

impl Station {
    /// Create a station served by a single line.
    pub fn new(name: impl Into<String>, coord: Coord, line: Line) -> Self {
        Self {
            name: name.into(),
            coord,
            lines: vec![line],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Lines serving this station, primary line first.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line the station was first registered on.
    pub fn primary_line(&self) -> Line {
        self.lines[0]
    }

    /// Whether more than one line calls here.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    pub fn serves(&self, line: Line) -> bool {
        self.lines.contains(&line)
    }

    /// Record that `line` also serves this station. No-op if it already does.
    pub(crate) fn add_line(&mut self, line: Line) {
        if !self.serves(line) {
            self.lines.push(line);
        }
    }
}
