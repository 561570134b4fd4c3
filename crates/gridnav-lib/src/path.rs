use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::grid::{Coordinate, Grid};
use crate::heuristic::Heuristic;

/// Cost of moving between orthogonally adjacent cells.
///
/// The engine never re-opens a closed cell, which is only correct while
/// every edge carries this same cost and the heuristic is consistent.
/// Non-uniform terrain costs would require Dijkstra-style re-relaxation
/// of closed cells.
const STEP_COST: f64 = 1.0;

/// Neighbour expansion order: north, south, east, west. Fixed so that
/// tie-breaks, and therefore returned paths, are reproducible.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Find a shortest path between `start` and `goal` over the grid's open
/// cells, moving orthogonally at unit cost.
///
/// Returns the full coordinate sequence including both endpoints;
/// `start == goal` yields the one-element path without searching. Equal
/// f-cost frontier entries are broken by lower g-cost, then lexicographic
/// coordinate order. The frontier is a binary heap with lazy deletion of
/// stale entries, so a search costs O(V log V) rather than the O(V^2) of
/// scanning the open set for its minimum.
pub fn find_path(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    heuristic: Heuristic,
) -> Result<Vec<Coordinate>> {
    for endpoint in [start, goal] {
        if !grid.in_bounds(endpoint) {
            return Err(Error::InvalidEndpoint {
                coordinate: endpoint,
                height: grid.height(),
                width: grid.width(),
            });
        }
    }
    for endpoint in [start, goal] {
        if !grid.is_traversable(endpoint) {
            return Err(Error::BlockedEndpoint {
                coordinate: endpoint,
            });
        }
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let mut nodes = vec![SearchNode::default(); grid.cell_count()];
    let mut closed = vec![false; grid.cell_count()];
    let mut frontier = BinaryHeap::new();

    let start_index = grid.index_of(start);
    nodes[start_index].g = 0.0;
    nodes[start_index].h = heuristic.estimate(start, goal);
    // The start cell is its own parent; reconstruction stops there.
    nodes[start_index].parent = Some(start);
    frontier.push(FrontierEntry::new(start, 0.0, nodes[start_index].h));

    while let Some(entry) = frontier.pop() {
        let current = entry.coordinate;
        let current_index = grid.index_of(current);
        if closed[current_index] {
            // Stale duplicate superseded by a later relaxation.
            continue;
        }
        closed[current_index] = true;
        let current_g = nodes[current_index].g;

        for neighbour in neighbours(current) {
            if !grid.is_traversable(neighbour) {
                continue;
            }
            let neighbour_index = grid.index_of(neighbour);

            if neighbour == goal {
                // With uniform edge costs the first relaxation of the goal
                // from a minimum-f frontier node is already optimal.
                nodes[neighbour_index].g = current_g + STEP_COST;
                nodes[neighbour_index].h = 0.0;
                nodes[neighbour_index].parent = Some(current);
                return reconstruct(grid, &nodes, goal);
            }
            if closed[neighbour_index] {
                continue;
            }

            let tentative_g = current_g + STEP_COST;
            let h = heuristic.estimate(neighbour, goal);
            let node = &mut nodes[neighbour_index];
            if node.g.is_infinite() || tentative_g + h < node.g + node.h {
                node.g = tentative_g;
                node.h = h;
                node.parent = Some(current);
                frontier.push(FrontierEntry::new(neighbour, tentative_g, h));
            }
        }
    }

    Err(Error::RouteNotFound { start, goal })
}

/// Walk backpointers from `goal` to the self-parented start cell and
/// return the reversed sequence. The walk is bounded by the cell count;
/// exceeding it, or hitting a cell with no parent, means the node table
/// violated the search invariants.
fn reconstruct(grid: &Grid, nodes: &[SearchNode], goal: Coordinate) -> Result<Vec<Coordinate>> {
    let mut path = Vec::new();
    let mut current = goal;
    for _ in 0..grid.cell_count() {
        let Some(parent) = nodes[grid.index_of(current)].parent else {
            return Err(Error::CorruptSearchState {
                coordinate: current,
            });
        };
        path.push(current);
        if parent == current {
            path.reverse();
            return Ok(path);
        }
        current = parent;
    }
    Err(Error::CorruptSearchState {
        coordinate: current,
    })
}

fn neighbours(of: Coordinate) -> impl Iterator<Item = Coordinate> {
    NEIGHBOUR_OFFSETS.iter().filter_map(move |(dr, dc)| {
        Some(Coordinate::new(
            of.row.checked_add_signed(*dr)?,
            of.col.checked_add_signed(*dc)?,
        ))
    })
}

/// Per-cell search bookkeeping, allocated fresh for every call.
#[derive(Debug, Clone)]
struct SearchNode {
    g: f64,
    h: f64,
    parent: Option<Coordinate>,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            parent: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    coordinate: Coordinate,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl FrontierEntry {
    fn new(coordinate: Coordinate, cost: f64, heuristic: f64) -> Self {
        Self {
            coordinate,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate,
        // with lower cost and then lower coordinate winning ties.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.coordinate.cmp(&self.coordinate))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    fn open_grid(height: usize, width: usize) -> Grid {
        Grid::from_rows(vec![vec![CellState::Open; width]; height]).expect("valid grid")
    }

    fn node(g: f64, parent: Option<Coordinate>) -> SearchNode {
        SearchNode {
            g,
            h: 0.0,
            parent,
        }
    }

    #[test]
    fn reconstruct_follows_parents_to_the_sentinel() {
        let grid = open_grid(1, 4);
        let nodes = vec![
            node(0.0, Some(Coordinate::new(0, 0))),
            node(1.0, Some(Coordinate::new(0, 0))),
            node(2.0, Some(Coordinate::new(0, 1))),
            node(3.0, Some(Coordinate::new(0, 2))),
        ];

        let path = reconstruct(&grid, &nodes, Coordinate::new(0, 3)).expect("valid chain");
        assert_eq!(
            path,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(0, 3),
            ]
        );
    }

    #[test]
    fn reconstruct_rejects_missing_backpointer() {
        let grid = open_grid(1, 3);
        let nodes = vec![
            node(0.0, Some(Coordinate::new(0, 0))),
            node(1.0, None),
            node(2.0, Some(Coordinate::new(0, 1))),
        ];

        let error = reconstruct(&grid, &nodes, Coordinate::new(0, 2)).expect_err("broken chain");
        assert!(matches!(
            error,
            Error::CorruptSearchState { coordinate } if coordinate == Coordinate::new(0, 1)
        ));
    }

    #[test]
    fn reconstruct_rejects_cycles() {
        let grid = open_grid(1, 3);
        let nodes = vec![
            node(0.0, Some(Coordinate::new(0, 1))),
            node(1.0, Some(Coordinate::new(0, 0))),
            node(2.0, Some(Coordinate::new(0, 1))),
        ];

        let error = reconstruct(&grid, &nodes, Coordinate::new(0, 2)).expect_err("cycle");
        assert!(matches!(error, Error::CorruptSearchState { .. }));
    }

    #[test]
    fn frontier_orders_by_estimate_then_cost_then_coordinate() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::new(Coordinate::new(1, 1), 2.0, 3.0));
        heap.push(FrontierEntry::new(Coordinate::new(0, 2), 2.0, 1.0));
        heap.push(FrontierEntry::new(Coordinate::new(2, 0), 1.0, 2.0));
        heap.push(FrontierEntry::new(Coordinate::new(0, 1), 1.0, 2.0));

        let order: Vec<Coordinate> = std::iter::from_fn(|| heap.pop())
            .map(|entry| entry.coordinate)
            .collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 0),
                Coordinate::new(0, 2),
                Coordinate::new(1, 1),
            ]
        );
    }
}
