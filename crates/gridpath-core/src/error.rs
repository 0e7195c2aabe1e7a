//! Errors raised while reading or building a [`Grid`](crate::Grid).

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong before a solver runs.
///
/// All variants are fatal: once a grid is built the solvers cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The input file could not be read.
    #[error("cannot read grid from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A row has a different number of cells than the first row.
    #[error("grid is not rectangular: line {line} has {found} cells, expected {expected}")]
    Malformed {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token is not a non-negative integer.
    #[error("invalid cell \u{201c}{token}\u{201d} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },
    /// No rows, or rows without cells.
    #[error("grid is empty")]
    Empty,
}
