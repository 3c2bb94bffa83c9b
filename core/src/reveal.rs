use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// Reveals `start` and flood-fills through zero-count cells.
///
/// Returns the newly revealed coordinates in reveal order, empty when `start` was already revealed or flagged.
/// The caller must check for a mine before calling this.
pub fn reveal(grid: &mut Grid, start: Coord2) -> Vec<Coord2> {
    let mut revealed = Vec::new();
    if !grid[start].is_untouched() {
        return revealed;
    }
    debug_assert!(!grid[start].is_mine, "flood fill started on a mine at {:?}", start);

    let mut to_visit = VecDeque::from([start]);
    while let Some(coords) = to_visit.pop_front() {
        let cell = &mut grid[coords];
        // the revealed flag doubles as the visited set
        if !cell.is_untouched() {
            log::trace!("Skipping cell at {:?}", coords);
            continue;
        }

        cell.is_revealed = true;
        let count = cell.adjacent_mines;
        revealed.push(coords);
        log::trace!("Revealed cell at {:?}, mine count: {}", coords, count);

        if count == 0 {
            to_visit.extend(
                grid.neighbors_of(coords)
                    .filter(|&pos| grid[pos].is_untouched()),
            );
        }
    }

    log::debug!("Reveal from {:?} opened {} cells", start, revealed.len());
    revealed
}
