use thiserror::Error;

use crate::grid::Coordinate;

/// Convenient result alias for the gridnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or goal coordinate lies outside the grid.
    #[error("endpoint {coordinate} is outside the {height}x{width} grid")]
    InvalidEndpoint {
        coordinate: Coordinate,
        height: usize,
        width: usize,
    },

    /// Raised when a start or goal cell is not traversable.
    #[error("endpoint {coordinate} is blocked")]
    BlockedEndpoint { coordinate: Coordinate },

    /// Raised when the frontier is exhausted without reaching the goal.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: Coordinate, goal: Coordinate },

    /// Raised when path reconstruction detects a cycle or a missing
    /// backpointer. Normal operation cannot produce this.
    #[error("search state corrupted while reconstructing through {coordinate}")]
    CorruptSearchState { coordinate: Coordinate },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a map contained no rows.
    #[error("map contained no rows")]
    EmptyMap,

    /// Raised when a map row does not match the width of the first row.
    #[error("map line {line} has width {found}, expected {expected}")]
    RaggedMap {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a map contains a symbol outside the recognised set.
    #[error("unrecognised map symbol '{symbol}' on line {line}")]
    UnknownMapSymbol { symbol: char, line: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
