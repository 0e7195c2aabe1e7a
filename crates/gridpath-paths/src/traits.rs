use gridpath_core::{Grid, Position};

use crate::Capacity;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with non-negative additive costs.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Position, to: Position) -> u32;
}

/// Pather whose cells carry a capacity limit.
pub trait CapacityPather: Pather {
    /// Largest load that can pass through `p`.
    fn capacity(&self, p: Position) -> Capacity;
}

impl Pather for Grid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

/// Entering a cell costs the cell's own value.
impl WeightedPather for Grid {
    fn cost(&self, _from: Position, to: Position) -> u32 {
        Grid::cost(self, to)
    }
}

impl CapacityPather for Grid {
    fn capacity(&self, p: Position) -> Capacity {
        Capacity::Bounded(Grid::cost(self, p))
    }
}
