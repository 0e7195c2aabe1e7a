//! Driving both searches over a grid file and printing the results.

use std::io::Write;

use anyhow::{Context, Result};
use gridpath_core::{Bounds, Grid, read_grid};
use gridpath_paths::{
    BottleneckPathSolver, Capacity, PathReport, PathResult, ReportStyle, ScoreLabel,
    ShortestPathSolver,
};
use serde::Serialize;

use crate::cli::{Args, Format, Mode};

/// Results of the searches selected by a [`Mode`], from the top-left to the
/// bottom-right cell.
#[derive(Debug, Clone, Serialize)]
pub struct Solved {
    pub bounds: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<PathResult<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottleneck: Option<PathResult<Capacity>>,
}

/// Run the searches `mode` selects.
pub fn solve(grid: &Grid, mode: Mode) -> Solved {
    let bounds = grid.bounds();
    let (source, destination) = (bounds.top_left(), bounds.bottom_right());

    // Every cell of a grid is reachable, so the results are always present.
    let shortest = mode.shortest().then(|| {
        let mut solver = ShortestPathSolver::new(bounds);
        solver.solve(grid, source);
        solver.result(destination)
    });
    let bottleneck = mode.bottleneck().then(|| {
        let mut solver = BottleneckPathSolver::new(bounds);
        solver.solve(grid, source, destination);
        solver.result(destination)
    });

    Solved {
        bounds,
        shortest: shortest.flatten(),
        bottleneck: bottleneck.flatten(),
    }
}

/// Read the grid named by `args`, solve it and write the report to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let grid = read_grid(&args.input)
        .with_context(|| format!("failed to load grid from {}", args.input.display()))?;
    log::info!("loaded {} grid from {}", grid.bounds(), args.input.display());

    let solved = solve(&grid, args.mode);
    match args.format {
        Format::Text => {
            let style = if args.full {
                ReportStyle::full()
            } else {
                ReportStyle::default()
            };
            write_text(out, &grid, &solved, style)?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &solved)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, grid: &Grid, solved: &Solved, style: ReportStyle) -> Result<()> {
    let mut first = true;
    if let Some(result) = &solved.shortest {
        writeln!(out, "Finding shortest path\n")?;
        write!(
            out,
            "{}",
            PathReport::new(grid, result, ScoreLabel::TotalCost).with_style(style)
        )?;
        first = false;
    }
    if let Some(result) = &solved.bottleneck {
        if !first {
            writeln!(out)?;
        }
        writeln!(out, "Finding maximum capacity path\n")?;
        write!(
            out,
            "{}",
            PathReport::new(grid, result, ScoreLabel::Capacity).with_style(style)
        )?;
    }
    Ok(())
}
