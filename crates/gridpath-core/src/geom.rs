//! Geometry primitives: [`Position`] and [`Bounds`].
//!
//! Positions are addressed as `(row, col)` with row 0 at the top. A
//! [`Bounds`] describes a `rows × cols` rectangle anchored at the origin and
//! converts between positions and flat row-major indices.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` is one king move away (orthogonal or diagonal).
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A `rows × cols` rectangle starting at [`Position::ORIGIN`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the bounds contain no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// The top-left cell.
    #[inline]
    pub const fn top_left(self) -> Position {
        Position::ORIGIN
    }

    /// The bottom-right cell. Meaningless for empty bounds.
    #[inline]
    pub const fn bottom_right(self) -> Position {
        Position::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }

    /// Convert a position to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub const fn idx(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row * self.cols + p.col)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub const fn position(self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }

    /// The up-to-8 cells surrounding `p`, in row-major order.
    ///
    /// The 3×3 window narrows at the edges instead of wrapping around, and
    /// never yields `p` itself. Yields nothing if `p` is out of bounds.
    pub fn window(self, p: Position) -> Window {
        if !self.contains(p) {
            return Window::empty(p);
        }
        let min = Position::new(p.row.saturating_sub(1), p.col.saturating_sub(1));
        let max = Position::new((p.row + 1).min(self.rows - 1), (p.col + 1).min(self.cols - 1));
        Window {
            center: p,
            min,
            max,
            cur: Some(min),
        }
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Position;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.position(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundsIter {}

/// Clamped 3×3 neighbour window, see [`Bounds::window`].
#[derive(Clone, Debug)]
pub struct Window {
    center: Position,
    min: Position,
    max: Position,
    cur: Option<Position>,
}

impl Window {
    fn empty(center: Position) -> Self {
        Self {
            center,
            min: center,
            max: center,
            cur: None,
        }
    }
}

impl Iterator for Window {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let p = self.cur?;
            self.cur = if p.col < self.max.col {
                Some(Position::new(p.row, p.col + 1))
            } else if p.row < self.max.row {
                Some(Position::new(p.row + 1, self.min.col))
            } else {
                None
            };
            if p != self.center {
                return Some(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(b: Bounds, row: usize, col: usize) -> Vec<Position> {
        b.window(Position::new(row, col)).collect()
    }

    #[test]
    fn idx_and_position_agree() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.idx(Position::new(2, 1)), Some(9));
        assert_eq!(b.position(9), Position::new(2, 1));
        assert_eq!(b.idx(Position::new(3, 0)), None);
        assert_eq!(b.idx(Position::new(0, 4)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let pts: Vec<_> = Bounds::new(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
        assert_eq!(Bounds::new(3, 5).iter().len(), 15);
    }

    #[test]
    fn empty_bounds_iter() {
        assert!(Bounds::new(0, 3).is_empty());
        assert_eq!(Bounds::new(0, 3).iter().count(), 0);
    }

    #[test]
    fn window_interior_has_eight_in_row_major_order() {
        let w = window(Bounds::new(3, 3), 1, 1);
        assert_eq!(
            w,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn window_clamps_at_corners_and_edges() {
        let b = Bounds::new(3, 4);
        assert_eq!(
            window(b, 0, 0),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
        assert_eq!(window(b, 2, 3).len(), 3);
        assert_eq!(window(b, 0, 2).len(), 5);
        assert_eq!(window(b, 1, 0).len(), 5);
    }

    #[test]
    fn window_single_cell_and_line() {
        assert!(window(Bounds::new(1, 1), 0, 0).is_empty());
        assert_eq!(
            window(Bounds::new(1, 3), 0, 1),
            vec![Position::new(0, 0), Position::new(0, 2)]
        );
    }

    #[test]
    fn window_out_of_bounds_is_empty() {
        assert!(window(Bounds::new(2, 2), 5, 5).is_empty());
    }

    #[test]
    fn adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 0)));
        assert!(p.is_adjacent(Position::new(2, 1)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(3, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(Bounds::new(4, 5).to_string(), "4x5");
    }

    #[test]
    fn corners() {
        let b = Bounds::new(4, 6);
        assert_eq!(b.top_left(), Position::new(0, 0));
        assert_eq!(b.bottom_right(), Position::new(3, 5));
    }
}
