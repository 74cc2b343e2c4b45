//! Metro line identifiers and line filters.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an unknown line slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line {input:?}: expected one of red, green, all")]
pub struct InvalidLine {
    input: String,
}

/// A metro line.
///
/// The network has two corridors. Corridor 1 is signed as the Red Line,
/// corridor 2 as the Green Line. The external track trace names the Red
/// Line's feature "Orange Line", so each line also knows its trace name.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Line;
///
/// let red = Line::parse_slug("red").unwrap();
/// assert_eq!(red, Line::Red);
/// assert_eq!(red.name(), "Red Line");
/// assert_eq!(red.trace_name(), "Orange Line");
///
/// assert!(Line::parse_slug("blue").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    Red,
    Green,
}

impl Line {
    /// Every line, in corridor order.
    pub const ALL: [Line; 2] = [Line::Red, Line::Green];

    /// Display name, e.g. "Red Line".
    pub fn name(self) -> &'static str {
        match self {
            Line::Red => "Red Line",
            Line::Green => "Green Line",
        }
    }

    /// Corridor number as used by the operator.
    pub fn corridor(self) -> u8 {
        match self {
            Line::Red => 1,
            Line::Green => 2,
        }
    }

    /// Hex colour used when drawing the line.
    pub fn colour(self) -> &'static str {
        match self {
            Line::Red => "#ff0000",
            Line::Green => "#00ff00",
        }
    }

    /// Badge shown next to the line name.
    pub fn emoji(self) -> &'static str {
        match self {
            Line::Red => "🔴",
            Line::Green => "🟢",
        }
    }

    /// Short lowercase name used in query strings.
    pub fn slug(self) -> &'static str {
        match self {
            Line::Red => "red",
            Line::Green => "green",
        }
    }

    /// Name of this line's feature in the external KML trace.
    pub fn trace_name(self) -> &'static str {
        match self {
            Line::Red => "Orange Line",
            Line::Green => "Green Line",
        }
    }

    /// Parse a line from its slug (case-insensitive).
    pub fn parse_slug(s: &str) -> Result<Self, InvalidLine> {
        let s = s.trim();
        Line::ALL
            .into_iter()
            .find(|line| line.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidLine {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Which lines a network map should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFilter {
    #[default]
    All,
    Only(Line),
}

impl LineFilter {
    /// Parse `red`, `green` or `all` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(LineFilter::All);
        }
        Line::parse_slug(s).map(LineFilter::Only)
    }

    /// Whether `line` passes this filter.
    pub fn includes(self, line: Line) -> bool {
        match self {
            LineFilter::All => true,
            LineFilter::Only(only) => only == line,
        }
    }

    /// Slug form, the inverse of [`LineFilter::parse`].
    pub fn slug(self) -> &'static str {
        match self {
            LineFilter::All => "all",
            LineFilter::Only(line) => line.slug(),
        }
    }
}
