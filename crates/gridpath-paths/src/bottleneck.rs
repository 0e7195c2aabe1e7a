use std::cmp::Reverse;

use gridpath_core::{Bounds, Position};

use crate::Capacity;
use crate::state::{OpenList, PathResult, PathState};
use crate::traits::{CapacityPather, Pather};

/// Maximum capacity search (widest path).
///
/// A path's capacity is the smallest [`CapacityPather::capacity`] among the
/// cells it passes through, not counting its two endpoints: the source
/// starts out [`Capacity::Unbounded`] and the destination is treated as
/// unbounded for the duration of the run. Cells are expanded widest first
/// and scored once, like [`ShortestPathSolver`](crate::ShortestPathSolver).
pub struct BottleneckPathSolver {
    state: PathState<Capacity>,
    nbuf: Vec<Position>,
}

/// Lookup wrapper lifting the destination's own limit.
struct OpenDestination<'a, P> {
    inner: &'a P,
    destination: Position,
}

impl<P: Pather> Pather for OpenDestination<'_, P> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.inner.neighbors(p, buf);
    }
}

impl<P: CapacityPather> CapacityPather for OpenDestination<'_, P> {
    fn capacity(&self, p: Position) -> Capacity {
        if p == self.destination {
            Capacity::Unbounded
        } else {
            self.inner.capacity(p)
        }
    }
}

impl BottleneckPathSolver {
    /// Create a solver for grids covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            state: PathState::new(bounds),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Score every cell reachable from `source`, with `destination`'s own
    /// capacity lifted.
    ///
    /// The pather is only read, never modified. Previous results are
    /// discarded. A `source` outside the bounds reaches nothing.
    pub fn solve<P: CapacityPather>(
        &mut self,
        pather: &P,
        source: Position,
        destination: Position,
    ) -> &PathState<Capacity> {
        self.state.reset();
        let bounds = self.state.bounds();
        let Some(si) = bounds.idx(source) else {
            log::warn!("bottleneck path: source {source} outside {bounds}");
            return &self.state;
        };
        let pather = OpenDestination {
            inner: pather,
            destination,
        };

        let mut open = OpenList::new();
        self.state.reach(si, Capacity::Unbounded, None);
        open.push(si, Reverse(Capacity::Unbounded));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = open.pop() {
            let current = self.state.score_idx(ci);
            let cp = bounds.position(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.idx(np) else {
                    continue;
                };
                if self.state.is_reached_idx(ni) {
                    continue;
                }
                let score = current.min(pather.capacity(np));
                self.state.reach(ni, score, Some(ci));
                open.push(ni, Reverse(score));
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "bottleneck path: reached {} of {} cells from {source}, capacity at {destination} is {}",
            self.state.reached(),
            bounds.len(),
            self.state
                .score(destination)
                .map_or_else(|| "unreached".to_string(), |c| c.to_string())
        );
        &self.state
    }

    /// Switch to grids covering `bounds`, forgetting the last run.
    ///
    /// The state table is only reallocated when `bounds` is larger than any
    /// previous one.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.state.set_bounds(bounds);
    }

    /// State left by the last [`solve`](Self::solve).
    #[inline]
    pub fn state(&self) -> &PathState<Capacity> {
        &self.state
    }

    /// Capacity and path to `destination` from the last run.
    pub fn result(&self, destination: Position) -> Option<PathResult<Capacity>> {
        self.state.result(destination)
    }
}
