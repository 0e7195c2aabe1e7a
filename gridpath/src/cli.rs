//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Find the cheapest and the widest path from the top-left to the
/// bottom-right cell of a grid, moving like a chess king.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridpath", version)]
pub struct Args {
    /// Grid file: one row per line, whitespace-separated non-negative integers.
    pub input: PathBuf,

    /// Which searches to run.
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print whole paths instead of eliding the middle of long ones.
    #[arg(long)]
    pub full: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Both,
    /// Minimum total cost only.
    Shortest,
    /// Maximum capacity only.
    Bottleneck,
}

impl Mode {
    pub fn shortest(self) -> bool {
        matches!(self, Self::Both | Self::Shortest)
    }

    pub fn bottleneck(self) -> bool {
        matches!(self, Self::Both | Self::Bottleneck)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Path listings as plain text.
    Text,
    /// Scores and full paths as JSON.
    Json,
}
