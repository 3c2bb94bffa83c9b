#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use error::*;
pub use grid::*;
pub use placer::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod adjacency;
mod cell;
mod error;
mod grid;
mod placer;
mod reveal;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Accepts `1 <= size` and `1 <= mines <= size² - 1`, so at least one cell is always safe.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size < 1 || mines < 1 || mines > square(size) - 1 {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { size, mines })
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Result of a reveal request.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOutcome {
    /// Cells whose display changed: newly revealed cells, or on a loss the exposed mines and wrong flags.
    pub changed: Vec<Coord2>,
    pub phase: Phase,
}

impl RevealOutcome {
    pub(crate) const fn unchanged(phase: Phase) -> Self {
        Self {
            changed: Vec::new(),
            phase,
        }
    }

    pub fn has_update(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlagOutcome {
    pub changed: bool,
    pub flagged: bool,
    pub mines_remaining: isize,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        self.changed
    }
}
