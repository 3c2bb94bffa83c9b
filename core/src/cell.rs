use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Only meaningful when `is_mine` is false.
    pub adjacent_mines: u8,
}

impl Cell {
    /// Hidden and unflagged.
    pub const fn is_untouched(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn is_safe(&self) -> bool {
        !self.is_mine
    }
}

/// Read-only snapshot of a cell handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub is_mine: bool,
    pub adjacent_mines: u8,
}

impl CellView {
    pub const fn new((row, col): Coord2, cell: &Cell) -> Self {
        Self {
            row,
            col,
            is_revealed: cell.is_revealed,
            is_flagged: cell.is_flagged,
            is_mine: cell.is_mine,
            adjacent_mines: cell.adjacent_mines,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }
}
