use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy used to lay mines on a blank grid once the first cell is chosen.
pub trait MinePlacer {
    /// Sets `is_mine` on `mine_count` distinct cells, never on `excluded` for well-behaved placers.
    fn place(&mut self, grid: &mut Grid, mine_count: CellCount, excluded: Coord2);
}
