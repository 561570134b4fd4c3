use std::fmt;

use serde::Serialize;

use crate::grid::Coordinate;

/// Distance estimate used to order the search frontier.
///
/// All variants are admissible for 4-directional unit-cost movement, so
/// any of them yields a shortest path. Manhattan is exact for that cost
/// model and is the default; Euclidean underestimates (true cost is at
/// least the straight-line distance); `Zero` ignores the goal entirely
/// and degenerates the search to Dijkstra order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Zero,
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`. Non-negative and
    /// zero when the coordinates coincide.
    pub fn estimate(self, from: Coordinate, to: Coordinate) -> f64 {
        let dr = from.row.abs_diff(to.row) as f64;
        let dc = from.col.abs_diff(to.col) as f64;
        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => (dr * dr + dc * dc).sqrt(),
            Heuristic::Zero => 0.0,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Zero => "zero",
        };
        f.write_str(value)
    }
}
