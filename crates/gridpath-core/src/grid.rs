//! The integer cost matrix solvers run over.

use crate::error::GridError;
use crate::geom::{Bounds, Position, Window};

/// A rectangular matrix of non-negative cell costs.
///
/// Built once from validated rows; at least one row and one column.
/// Serialized as a list of rows, and deserialized through
/// [`Grid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<u32>,
}

impl Grid {
    /// Build a grid from rows of costs.
    ///
    /// Every row must have as many cells as the first one. Line numbers in
    /// [`GridError::Malformed`] are 1-based row numbers.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[u32]>,
    {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut nrows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(GridError::Malformed {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            nrows += 1;
        }
        if nrows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            bounds: Bounds::new(nrows, cols),
            cells,
        })
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// Stored cost at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    #[inline]
    pub fn cost(&self, p: Position) -> u32 {
        self.cells[self.index(p)]
    }

    /// Stored cost at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Position) -> Option<u32> {
        self.bounds.idx(p).map(|i| self.cells[i])
    }

    /// Overwrite the cost at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn set_cost(&mut self, p: Position, value: u32) {
        let i = self.index(p);
        self.cells[i] = value;
    }

    /// Grid-adjacent positions of `p` (king moves), clamped at the edges.
    #[inline]
    pub fn neighbors(&self, p: Position) -> Window {
        self.bounds.window(p)
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.bounds.cols)
    }

    fn index(&self, p: Position) -> usize {
        match self.bounds.idx(p) {
            Some(i) => i,
            None => panic!("position {p} outside grid {}", self.bounds),
        }
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.iter_rows().map(<[u32]>::to_vec).collect()
    }
}
