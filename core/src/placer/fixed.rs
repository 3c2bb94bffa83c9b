use alloc::vec::Vec;

use super::*;

/// Lays a predetermined set of mines, for hand-built boards and replays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(&mut self, grid: &mut Grid, mine_count: CellCount, excluded: Coord2) {
        for &coords in &self.mines {
            match grid.get_mut(coords) {
                Some(cell) => cell.is_mine = true,
                None => log::warn!("Fixed mine at {:?} is off the board, skipped", coords),
            }
        }

        if grid.get(excluded).is_some_and(|cell| cell.is_mine) {
            log::warn!("Fixed layout puts a mine under the first move at {:?}", excluded);
        }

        let count = grid.mine_count();
        if count != mine_count {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, requested: {}",
                count,
                mine_count
            );
        }
    }
}
