//! Domain error types.
//!
//! These errors represent lookups against the static network that the
//! caller supplied bad input for. They are distinct from trace I/O errors.

use super::InvalidLine;

/// Domain-level errors for station and line lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The station name is not in the registry
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The line filter could not be parsed
    #[error(transparent)]
    InvalidLine(#[from] InvalidLine),
}
