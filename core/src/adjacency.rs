use crate::*;

/// Fills in `adjacent_mines` for every safe cell from the current mine layout.
pub fn compute_adjacency(grid: &mut Grid) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let coords = (row, col);
            if grid[coords].is_mine {
                continue;
            }
            grid[coords].adjacent_mines = grid.adjacent_mine_count(coords);
        }
    }
}
