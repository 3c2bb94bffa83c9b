use sweeper_core::{CellCount, Coord, square};

pub const MIN_SIZE: u32 = 5;
pub const MAX_SIZE: u32 = 30;
pub const DEFAULT_SIZE: Coord = 10;
pub const DEFAULT_MINES: CellCount = 10;

/// Board settings after the front-end policy has been applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub size: Coord,
    pub mines: CellCount,
}

impl Settings {
    /// Out-of-range values fall back to defaults instead of being rejected, at least one cell is always left safe.
    pub fn sanitize(size: u32, mines: u32) -> Self {
        let size = match Coord::try_from(size) {
            Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&u32::from(size)) => size,
            _ => {
                log::warn!(
                    "Board size {} outside {}..={}, using {}",
                    size,
                    MIN_SIZE,
                    MAX_SIZE,
                    DEFAULT_SIZE
                );
                DEFAULT_SIZE
            }
        };

        let max_mines = square(size) - 1;
        let mines = match CellCount::try_from(mines) {
            Ok(mines) if (1..=max_mines).contains(&mines) => mines,
            _ => {
                let fallback = DEFAULT_MINES.min(max_mines);
                log::warn!(
                    "Mine count {} outside 1..={}, using {}",
                    mines,
                    max_mines,
                    fallback
                );
                fallback
            }
        };

        Self { size, mines }
    }
}
