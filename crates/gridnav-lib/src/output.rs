use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::Coordinate;
use crate::heuristic::Heuristic;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One numbered line per step.
    PlainText,
    /// The whole route on a single arrow-separated line.
    Compact,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub row: usize,
    pub col: usize,
}

/// Structured representation of a planned route that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub heuristic: Heuristic,
    pub hops: usize,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, coordinate)| RouteStep {
                index,
                row: coordinate.row,
                col: coordinate.col,
            })
            .collect();

        Ok(Self {
            heuristic: plan.heuristic,
            hops: plan.hop_count(),
            start: plan.start,
            goal: plan.goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, heuristic: {})",
            self.start, self.goal, self.hops, self.heuristic
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: ({}, {})", step.index, step.row, step.col);
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        let joined = self
            .steps
            .iter()
            .map(|step| format!("({}, {})", step.row, step.col))
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "{joined}");
        buffer
    }
}
