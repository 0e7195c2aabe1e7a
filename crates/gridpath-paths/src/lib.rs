//! Path solvers over integer cost grids.
//!
//! Two searches run from a source cell with king-move (8-way) adjacency:
//!
//! - **Minimum cost** ([`ShortestPathSolver`]): Dijkstra over additive
//!   costs, where entering a cell costs that cell's value.
//! - **Maximum capacity** ([`BottleneckPathSolver`]): widest-path Dijkstra,
//!   maximising the smallest cell value along the path.
//!
//! Each solver owns a [`PathState`] table that is reused across runs, and
//! leaves every reached cell annotated with a score and predecessor.
//! [`PathReport`] renders a reconstructed [`PathResult`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | [`ShortestPathSolver`] |
//! | [`CapacityPather`] : [`Pather`] | [`BottleneckPathSolver`] |
//!
//! [`Grid`](gridpath_core::Grid) implements all three.

mod bottleneck;
mod capacity;
mod report;
mod shortest;
mod state;
mod traits;

pub use bottleneck::BottleneckPathSolver;
pub use capacity::Capacity;
pub use report::{PathReport, ReportStyle, ScoreLabel};
pub use shortest::ShortestPathSolver;
pub use state::{CellState, PathResult, PathState};
pub use traits::{CapacityPather, Pather, WeightedPather};
