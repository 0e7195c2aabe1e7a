//! gridpath — minimum-cost and maximum-capacity paths through a grid file.

pub mod cli;
pub mod run;

pub use cli::{Args, Format, Mode};
pub use run::{Solved, run, solve};
