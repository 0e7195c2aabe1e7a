use std::fmt;

use gridpath_core::{Grid, Position};

use crate::state::PathResult;

/// Which search produced a result; selects the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    /// `Total cost is <n>`
    TotalCost,
    /// `Capacity is <n>`
    Capacity,
}

impl ScoreLabel {
    fn prefix(self) -> &'static str {
        match self {
            Self::TotalCost => "Total cost is",
            Self::Capacity => "Capacity is",
        }
    }
}

/// Truncation of long paths.
///
/// Paths longer than `limit` positions print their first `head` and last
/// `tail` positions around a `...` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    pub limit: usize,
    pub head: usize,
    pub tail: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            limit: 20,
            head: 10,
            tail: 11,
        }
    }
}

impl ReportStyle {
    /// Never truncate.
    pub const fn full() -> Self {
        Self {
            limit: usize::MAX,
            head: 0,
            tail: 0,
        }
    }
}

/// Renders a [`PathResult`] one position per line, followed by a summary
/// line with the final score.
pub struct PathReport<'a, S> {
    grid: &'a Grid,
    result: &'a PathResult<S>,
    label: ScoreLabel,
    style: ReportStyle,
}

impl<'a, S> PathReport<'a, S> {
    pub fn new(grid: &'a Grid, result: &'a PathResult<S>, label: ScoreLabel) -> Self {
        Self {
            grid,
            result,
            label,
            style: ReportStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    fn cell(&self, f: &mut fmt::Formatter<'_>, p: Position) -> fmt::Result {
        match self.grid.get(p) {
            Some(cost) => writeln!(f, "{p} cell is {cost}"),
            None => writeln!(f, "{p}"),
        }
    }
}

impl<S: fmt::Display> fmt::Display for PathReport<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.result.path;
        let ReportStyle { limit, head, tail } = self.style;

        if path.len() > limit {
            // Head and tail never overlap, even when they cover the whole path.
            let head = head.min(path.len());
            let tail = tail.min(path.len() - head);
            for &p in &path[..head] {
                self.cell(f, p)?;
            }
            writeln!(f, "...")?;
            for &p in &path[path.len() - tail..] {
                self.cell(f, p)?;
            }
        } else {
            for &p in path {
                self.cell(f, p)?;
            }
        }
        writeln!(f, "{} {}", self.label.prefix(), self.result.score)
    }
}
