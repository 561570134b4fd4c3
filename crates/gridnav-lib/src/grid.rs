use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Blocked,
}

/// Identity of a cell within the grid. Ordering is lexicographic by row
/// then column, which the search engine relies on for reproducible
/// tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular occupancy grid used by the pathfinding engine.
///
/// The grid is fixed for its lifetime: searches borrow it read-only and
/// keep their own bookkeeping, so one grid can serve any number of
/// consecutive searches.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid from row vectors. Every row must match the width of
    /// the first; an empty input is rejected.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::EmptyMap);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedMap {
                    line: index + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells; also the upper bound on path length.
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Whether the coordinate lies within the grid dimensions.
    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height && coordinate.col < self.width
    }

    /// Whether the cell exists and is open.
    pub fn is_traversable(&self, coordinate: Coordinate) -> bool {
        self.state(coordinate) == Some(CellState::Open)
    }

    /// State of the cell, or `None` when out of bounds.
    pub fn state(&self, coordinate: Coordinate) -> Option<CellState> {
        if !self.in_bounds(coordinate) {
            return None;
        }
        Some(self.cells[self.index_of(coordinate)])
    }

    /// Number of open cells in the grid.
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state == CellState::Open)
            .count()
    }

    /// Row-major index of an in-bounds coordinate.
    pub(crate) fn index_of(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.width + coordinate.col
    }
}
