//! Gridnav library entry points.
//!
//! This crate exposes helpers to model a 2-D occupancy grid, load one from
//! a text map, and run heuristic-guided A* pathfinding over it. Higher
//! level consumers (the CLI in particular) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod heuristic;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use grid::{CellState, Coordinate, Grid};
pub use heuristic::Heuristic;
pub use map::{load_map, parse_map};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::find_path;
pub use routing::{plan_route, RoutePlan, RouteRequest};
