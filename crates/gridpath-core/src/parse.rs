//! Reading grids from whitespace-delimited text.
//!
//! One row per line, cells separated by any whitespace. Trailing blank lines
//! are ignored; any other line is a row and must have as many cells as the
//! first one.

use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::Grid;

/// Parse a grid from text.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut expected = None;

    for (i, line) in text.trim_end().lines().enumerate() {
        let line_no = i + 1;
        let found = line.split_whitespace().count();
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(GridError::Malformed {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(j, token)| {
                token.parse::<u32>().map_err(|_| GridError::Parse {
                    line: line_no,
                    column: j + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let grid = Grid::from_rows(rows)?;
    log::trace!("parsed {} grid", grid.bounds());
    Ok(grid)
}

/// Read and parse a grid file.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GridError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_grid(&text)
}
