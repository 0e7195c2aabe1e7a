use gridpath_core::{Bounds, Position};

use crate::state::{OpenList, PathResult, PathState};
use crate::traits::WeightedPather;

/// Minimum additive cost search (Dijkstra).
///
/// A path's cost is the sum of [`WeightedPather::cost`] over its moves; the
/// source contributes nothing. Each cell is scored the first time it is
/// reached and never improved afterwards. That is exact whenever the cost of
/// a move depends only on the cell being entered (as for
/// [`Grid`](gridpath_core::Grid)): cells are expanded in score order, so the
/// first expansion to touch a cell offers the cheapest entry. Pathers whose
/// costs depend on the cell being left get a greedy approximation.
pub struct ShortestPathSolver {
    state: PathState<u64>,
    nbuf: Vec<Position>,
}

impl ShortestPathSolver {
    /// Create a solver for grids covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            state: PathState::new(bounds),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Score every cell reachable from `source`.
    ///
    /// Previous results are discarded. A `source` outside the bounds
    /// reaches nothing.
    pub fn solve<P: WeightedPather>(&mut self, pather: &P, source: Position) -> &PathState<u64> {
        self.state.reset();
        let bounds = self.state.bounds();
        let Some(si) = bounds.idx(source) else {
            log::warn!("shortest path: source {source} outside {bounds}");
            return &self.state;
        };

        let mut open = OpenList::new();
        self.state.reach(si, 0, None);
        open.push(si, 0u64);

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
                let score = current.saturating_add(u64::from(pather.cost(cp, np)));
                self.state.reach(ni, score, Some(ci));
                open.push(ni, score);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "shortest path: reached {} of {} cells from {source}",
            self.state.reached(),
            bounds.len()
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
    pub fn state(&self) -> &PathState<u64> {
        &self.state
    }

    /// Total cost and path to `destination` from the last run.
    pub fn result(&self, destination: Position) -> Option<PathResult<u64>> {
        self.state.result(destination)
    }
}
