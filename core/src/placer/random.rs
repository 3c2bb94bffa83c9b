use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement by rejection sampling, only the excluded cell is kept safe.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&mut self, grid: &mut Grid, mine_count: CellCount, excluded: Coord2) {
        let size = grid.size();
        let free_cells = grid
            .cells()
            .filter(|&(pos, cell)| pos != excluded && !cell.is_mine)
            .count() as CellCount;

        let mine_count = if mine_count > free_cells {
            log::warn!(
                "Requested {} mines but only {} cells are free, placing {}",
                mine_count,
                free_cells,
                free_cells
            );
            free_cells
        } else {
            mine_count
        };

        let mut mines_placed = 0;
        while mines_placed < mine_count {
            let coords = (self.rng.random_range(0..size), self.rng.random_range(0..size));
            if coords == excluded || grid[coords].is_mine {
                continue;
            }
            grid[coords].is_mine = true;
            mines_placed += 1;
        }
        log::debug!("Placed {} mines, kept {:?} safe", mines_placed, excluded);
    }
}
