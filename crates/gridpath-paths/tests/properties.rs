//! Property-based checks of both solvers against fixpoint oracles.
//!
//! Verifies, for random grids up to 6×6:
//! 1. Minimum cost from the top-left matches Bellman-Ford relaxation at every cell
//! 2. Maximum capacity to the bottom-right matches widest-path relaxation
//! 3. Reconstructed paths start at the source, end at the destination and
//!    only make king moves
//! 4. A path's cost/capacity recomputed from its cells equals its score
//! 5. Solving leaves the grid untouched

use gridpath_core::{Grid, Position};
use gridpath_paths::{BottleneckPathSolver, Capacity, ShortestPathSolver};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=6, 1usize..=6)
        .prop_flat_map(|(rows, cols)| {
            (Just(cols), prop::collection::vec(0u32..20, rows * cols))
        })
        .prop_map(|(cols, cells)| Grid::from_rows(cells.chunks(cols)).unwrap())
}

// ── Oracles ───────────────────────────────────────────────────────────

fn oracle_shortest(grid: &Grid, source: Position) -> Vec<Option<u64>> {
    let b = grid.bounds();
    let mut dist = vec![None; b.len()];
    dist[b.idx(source).unwrap()] = Some(0u64);
    let mut changed = true;
    while changed {
        changed = false;
        for v in b {
            let Some(dv) = dist[b.idx(v).unwrap()] else {
                continue;
            };
            for w in grid.neighbors(v) {
                let wi = b.idx(w).unwrap();
                let cand = dv + u64::from(grid.cost(w));
                if w != source && dist[wi].is_none_or(|dw| cand < dw) {
                    dist[wi] = Some(cand);
                    changed = true;
                }
            }
        }
    }
    dist
}

fn oracle_capacity(grid: &Grid, source: Position, destination: Position) -> Option<Capacity> {
    let b = grid.bounds();
    let limit = |p: Position| {
        if p == destination {
            Capacity::Unbounded
        } else {
            Capacity::Bounded(grid.cost(p))
        }
    };
    let mut cap = vec![None; b.len()];
    cap[b.idx(source).unwrap()] = Some(Capacity::Unbounded);
    let mut changed = true;
    while changed {
        changed = false;
        for v in b {
            let Some(cv) = cap[b.idx(v).unwrap()] else {
                continue;
            };
            for w in grid.neighbors(v) {
                let wi = b.idx(w).unwrap();
                let cand = cv.min(limit(w));
                if cap[wi].is_none_or(|cw| cand > cw) {
                    cap[wi] = Some(cand);
                    changed = true;
                }
            }
        }
    }
    cap[b.idx(destination).unwrap()]
}

fn assert_walk(path: &[Position], source: Position, destination: Position) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&destination));
    assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shortest_matches_relaxation(grid in arb_grid()) {
        let b = grid.bounds();
        let mut solver = ShortestPathSolver::new(b);
        let state = solver.solve(&grid, b.top_left());
        let expected = oracle_shortest(&grid, b.top_left());
        for p in b {
            prop_assert_eq!(state.score(p), expected[b.idx(p).unwrap()], "at {}", p);
        }
    }

    #[test]
    fn shortest_path_is_consistent(grid in arb_grid()) {
        let b = grid.bounds();
        let mut solver = ShortestPathSolver::new(b);
        solver.solve(&grid, b.top_left());
        let r = solver.result(b.bottom_right()).unwrap();
        assert_walk(&r.path, b.top_left(), b.bottom_right());
        let sum: u64 = r.path[1..].iter().map(|&p| u64::from(grid.cost(p))).sum();
        prop_assert_eq!(r.score, sum);
    }

    #[test]
    fn bottleneck_matches_relaxation(grid in arb_grid()) {
        let b = grid.bounds();
        let mut solver = BottleneckPathSolver::new(b);
        solver.solve(&grid, b.top_left(), b.bottom_right());
        let r = solver.result(b.bottom_right()).unwrap();
        prop_assert_eq!(Some(r.score), oracle_capacity(&grid, b.top_left(), b.bottom_right()));
    }

    #[test]
    fn bottleneck_path_is_consistent(grid in arb_grid()) {
        let b = grid.bounds();
        let mut solver = BottleneckPathSolver::new(b);
        solver.solve(&grid, b.top_left(), b.bottom_right());
        let r = solver.result(b.bottom_right()).unwrap();
        assert_walk(&r.path, b.top_left(), b.bottom_right());
        let interior = if r.path.len() > 2 { &r.path[1..r.path.len() - 1] } else { &[][..] };
        let weakest = interior
            .iter()
            .map(|&p| Capacity::Bounded(grid.cost(p)))
            .min()
            .unwrap_or(Capacity::Unbounded);
        prop_assert_eq!(r.score, weakest);
    }

    #[test]
    fn solving_leaves_grid_untouched(grid in arb_grid()) {
        let before = grid.clone();
        let b = grid.bounds();
        BottleneckPathSolver::new(b).solve(&grid, b.top_left(), b.bottom_right());
        ShortestPathSolver::new(b).solve(&grid, b.top_left());
        prop_assert_eq!(grid, before);
    }
}
