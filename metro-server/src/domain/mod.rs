//! Domain types for the metro route planner.
//!
//! Lines, stations and coordinates. These are plain values; the network
//! that ties them together lives in [`crate::network`].

mod coord;
mod error;
mod line;
mod station;

pub use coord::Coord;
pub use error::DomainError;
pub use line::{InvalidLine, Line, LineFilter};
pub use station::Station;
