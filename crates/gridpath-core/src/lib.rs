//! **gridpath-core** — core types for grid path solvers.
//!
//! This crate provides the foundational types shared by the solvers and the
//! command-line program: row/column positions, grid bounds with clamped
//! neighbour windows, the integer cost matrix, and the text grid reader.

pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use error::GridError;
pub use geom::{Bounds, Position};
pub use grid::Grid;
pub use parse::{parse_grid, read_grid};
