use serde::Serialize;

use crate::error::Result;
use crate::grid::{Coordinate, Grid};
use crate::heuristic::Heuristic;
use crate::path::find_path;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub heuristic: Heuristic,
}

impl RouteRequest {
    /// Convenience constructor using the default Manhattan heuristic.
    pub fn manhattan(start: Coordinate, goal: Coordinate) -> Self {
        Self {
            start,
            goal,
            heuristic: Heuristic::Manhattan,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub heuristic: Heuristic,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub steps: Vec<Coordinate>,
}

impl RoutePlan {
    /// Number of unit moves in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route over the grid using the requested heuristic.
pub fn plan_route(grid: &Grid, request: &RouteRequest) -> Result<RoutePlan> {
    tracing::debug!(
        start = %request.start,
        goal = %request.goal,
        heuristic = %request.heuristic,
        "planning route"
    );

    let steps = find_path(grid, request.start, request.goal, request.heuristic)?;

    Ok(RoutePlan {
        heuristic: request.heuristic,
        start: request.start,
        goal: request.goal,
        steps,
    })
}
