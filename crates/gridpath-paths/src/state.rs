use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Bounds, Position};

/// Score and predecessor of a reached cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState<S> {
    pub score: S,
    /// `None` for the source.
    pub predecessor: Option<Position>,
}

/// A reconstructed path from source to destination and the destination's
/// final score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<S> {
    pub score: S,
    /// Source first, destination last. Never empty.
    pub path: Vec<Position>,
}

// ---------------------------------------------------------------------------
// Internal node table
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
struct Node<S> {
    score: S,
    parent: usize,
    generation: u32,
}

impl<S: Default> Default for Node<S> {
    fn default() -> Self {
        Self {
            score: S::default(),
            parent: NO_PARENT,
            generation: 0,
        }
    }
}

/// Per-cell solver state for one search.
///
/// A cell is *reached* once it has been assigned a score in the current
/// run; reached cells are never reassigned, so predecessor links form a
/// forest rooted at the source. [`reset`](Self::reset) forgets every cell
/// without touching the table, so repeated runs allocate nothing after the
/// first.
pub struct PathState<S> {
    bounds: Bounds,
    nodes: Vec<Node<S>>,
    generation: u32,
    reached: usize,
}

impl<S: Copy + Default> PathState<S> {
    /// Create an empty state table covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            generation: 1,
            reached: 0,
        }
    }

    /// The covered rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of cells reached in the current run.
    #[inline]
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Forget all cells.
    pub fn reset(&mut self) {
        self.reached = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stale nodes could carry any generation; start over.
            self.nodes.iter_mut().for_each(|n| *n = Node::default());
            self.generation = 1;
        }
    }

    /// Resize to `bounds` and forget all cells.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if bounds.len() > self.nodes.len() {
            self.nodes.resize(bounds.len(), Node::default());
        }
        self.reset();
    }

    /// Whether `p` was reached.
    #[inline]
    pub fn is_reached(&self, p: Position) -> bool {
        self.bounds.idx(p).is_some_and(|i| self.is_reached_idx(i))
    }

    /// State of `p`, or `None` if it was not reached or lies outside.
    pub fn get(&self, p: Position) -> Option<CellState<S>> {
        let i = self.bounds.idx(p)?;
        if !self.is_reached_idx(i) {
            return None;
        }
        let n = &self.nodes[i];
        Some(CellState {
            score: n.score,
            predecessor: (n.parent != NO_PARENT).then(|| self.bounds.position(n.parent)),
        })
    }

    /// Final score of `p`, if reached.
    #[inline]
    pub fn score(&self, p: Position) -> Option<S> {
        self.get(p).map(|c| c.score)
    }

    /// Predecessor of `p` on its best path, if reached and not the source.
    #[inline]
    pub fn predecessor(&self, p: Position) -> Option<Position> {
        self.get(p).and_then(|c| c.predecessor)
    }

    /// Follow predecessor links from `p` back to the source.
    ///
    /// Returns the path source-first, or `None` if `p` was not reached.
    pub fn path_to(&self, p: Position) -> Option<Vec<Position>> {
        let mut i = self.bounds.idx(p)?;
        if !self.is_reached_idx(i) {
            return None;
        }
        let mut path = Vec::new();
        while i != NO_PARENT {
            path.push(self.bounds.position(i));
            i = self.nodes[i].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Score and reconstructed path of `p`.
    pub fn result(&self, p: Position) -> Option<PathResult<S>> {
        Some(PathResult {
            score: self.score(p)?,
            path: self.path_to(p)?,
        })
    }

    #[inline]
    pub(crate) fn is_reached_idx(&self, i: usize) -> bool {
        self.nodes[i].generation == self.generation
    }

    #[inline]
    pub(crate) fn score_idx(&self, i: usize) -> S {
        self.nodes[i].score
    }

    /// Assign a score once. `parent` is `None` for the source.
    pub(crate) fn reach(&mut self, i: usize, score: S, parent: Option<usize>) {
        debug_assert!(!self.is_reached_idx(i), "cell {i} reached twice");
        self.nodes[i] = Node {
            score,
            parent: parent.unwrap_or(NO_PARENT),
            generation: self.generation,
        };
        self.reached += 1;
    }
}

// ---------------------------------------------------------------------------
// Priority queue
// ---------------------------------------------------------------------------

/// Heap entry ordered so that `BinaryHeap` pops the smallest key first,
/// oldest entry first among equal keys.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef<K> {
    idx: usize,
    key: K,
    seq: u64,
}

impl<K: Ord> Ord for NodeRef<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl<K: Ord> PartialOrd for NodeRef<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open list with FIFO tie-breaking.
///
/// Wrap keys in [`std::cmp::Reverse`] for max-priority.
pub(crate) struct OpenList<K> {
    heap: BinaryHeap<NodeRef<K>>,
    seq: u64,
}

impl<K: Ord> OpenList<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, idx: usize, key: K) {
        self.heap.push(NodeRef {
            idx,
            key,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|n| n.idx)
    }
}
