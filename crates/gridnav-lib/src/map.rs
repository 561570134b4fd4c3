use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::{CellState, Grid};

/// Load an occupancy map from a text file.
pub fn load_map(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    let grid = parse_map(&text)?;
    tracing::debug!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        "loaded map"
    );
    Ok(grid)
}

/// Parse an occupancy map from text.
///
/// One character per cell: `.` or `0` marks an open cell, `#` or `1` a
/// blocked one. Blank lines are skipped; every remaining line must match
/// the width of the first.
pub fn parse_map(text: &str) -> Result<Grid> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for symbol in line.chars() {
            let state = match symbol {
                '.' | '0' => CellState::Open,
                '#' | '1' => CellState::Blocked,
                other => {
                    return Err(Error::UnknownMapSymbol {
                        symbol: other,
                        line: index + 1,
                    })
                }
            };
            row.push(state);
        }
        rows.push((index + 1, row));
    }

    let expected = rows.first().map(|(_, row)| row.len()).unwrap_or(0);
    for (line, row) in &rows {
        if row.len() != expected {
            return Err(Error::RaggedMap {
                line: *line,
                expected,
                found: row.len(),
            });
        }
    }

    Grid::from_rows(rows.into_iter().map(|(_, row)| row).collect())
}
