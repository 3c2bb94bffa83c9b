use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Configuring -> Active
/// - Active -> Won
/// - Active -> Lost
/// - any -> Active, on reconfiguration or reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No board yet
    #[default]
    Configuring,
    /// Board built, moves accepted
    Active,
    /// Every safe cell revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl Phase {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything that is thrown away together on reconfiguration.
#[derive(Clone, Debug)]
struct Board {
    config: GameConfig,
    grid: Grid,
    mines_remaining: isize,
    revealed_safe: CellCount,
    first_move_consumed: bool,
    triggered_mine: Option<Coord2>,
}

impl Board {
    fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(config.size)?,
            mines_remaining: config.mines as isize,
            revealed_safe: 0,
            first_move_consumed: false,
            triggered_mine: None,
            config,
        })
    }

    fn coords_where(&self, predicate: impl Fn(&Cell) -> bool) -> Vec<Coord2> {
        self.grid
            .cells()
            .filter(|(_, cell)| predicate(cell))
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// A single game from configuration to win or loss, the only entry point for the presentation layer.
#[derive(Clone, Debug)]
pub struct GameSession<P = RandomMinePlacer> {
    placer: P,
    board: Option<Board>,
    phase: Phase,
}

impl GameSession<RandomMinePlacer> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomMinePlacer::new(seed))
    }
}

impl<P: MinePlacer> GameSession<P> {
    pub fn new(placer: P) -> Self {
        Self {
            placer,
            board: None,
            phase: Phase::Configuring,
        }
    }

    /// Builds a fresh board, leaving the previous one untouched when the values are rejected.
    pub fn configure(&mut self, size: Coord, mine_count: CellCount) -> Result<()> {
        let config = GameConfig::new(size, mine_count)?;
        self.start(config)
    }

    /// Starts over with the current configuration, does nothing before the first `configure`.
    pub fn reset(&mut self) -> Result<()> {
        match self.config() {
            Some(config) => self.start(config),
            None => Ok(()),
        }
    }

    fn start(&mut self, config: GameConfig) -> Result<()> {
        let board = Board::new(config)?;
        log::debug!(
            "Configured {}x{} board with {} mines",
            config.size,
            config.size,
            config.mines
        );
        self.board = Some(board);
        self.phase = Phase::Active;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn config(&self) -> Option<GameConfig> {
        self.board.as_ref().map(|board| board.config)
    }

    /// Mine budget minus placed flags, negative when over-flagged.
    pub fn mines_remaining(&self) -> isize {
        self.board.as_ref().map_or(0, |board| board.mines_remaining)
    }

    pub fn first_move_consumed(&self) -> bool {
        self.board
            .as_ref()
            .is_some_and(|board| board.first_move_consumed)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.board.as_ref().and_then(|board| board.triggered_mine)
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.board.as_ref().map(|board| &board.grid)
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Option<CellView> {
        let grid = self.grid()?;
        grid.get((row, col)).map(|cell| CellView::new((row, col), cell))
    }

    /// Row-major snapshot of every cell, empty before the first `configure`.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid()
            .into_iter()
            .flat_map(|grid| grid.cells())
            .map(|(pos, cell)| CellView::new(pos, cell))
    }

    pub fn mine_cells(&self) -> Vec<Coord2> {
        self.board
            .as_ref()
            .map(|board| board.coords_where(|cell| cell.is_mine))
            .unwrap_or_default()
    }

    /// Flagged cells without a mine.
    pub fn incorrect_flags(&self) -> Vec<Coord2> {
        self.board
            .as_ref()
            .map(|board| board.coords_where(|cell| cell.is_flagged && !cell.is_mine))
            .unwrap_or_default()
    }

    pub fn reveal_at(&mut self, row: Coord, col: Coord) -> Result<RevealOutcome> {
        let phase = self.phase;
        let Some(board) = self.board.as_mut() else {
            return Ok(RevealOutcome::unchanged(phase));
        };
        let coords = board.grid.validate_coords((row, col))?;

        if !phase.is_active() || !board.grid[coords].is_untouched() {
            return Ok(RevealOutcome::unchanged(phase));
        }

        if !board.first_move_consumed {
            self.placer.place(&mut board.grid, board.config.mines, coords);
            compute_adjacency(&mut board.grid);
            board.first_move_consumed = true;
        }

        if board.grid[coords].is_mine {
            board.triggered_mine = Some(coords);
            self.phase = Phase::Lost;
            log::debug!("Mine hit at {:?}, game lost", coords);

            let mut changed = board.coords_where(|cell| cell.is_mine);
            changed.extend(board.coords_where(|cell| cell.is_flagged && !cell.is_mine));
            return Ok(RevealOutcome {
                changed,
                phase: self.phase,
            });
        }

        let changed = reveal(&mut board.grid, coords);
        // at most `square(Coord::MAX)` cells
        board.revealed_safe += changed.len() as CellCount;

        if board.revealed_safe == board.config.safe_cells() {
            self.phase = Phase::Won;
            log::debug!("All {} safe cells revealed, game won", board.revealed_safe);
        }

        Ok(RevealOutcome {
            changed,
            phase: self.phase,
        })
    }

    pub fn toggle_flag_at(&mut self, row: Coord, col: Coord) -> Result<FlagOutcome> {
        let phase = self.phase;
        let Some(board) = self.board.as_mut() else {
            return Ok(FlagOutcome {
                changed: false,
                flagged: false,
                mines_remaining: 0,
            });
        };
        let coords = board.grid.validate_coords((row, col))?;
        let cell = &mut board.grid[coords];

        if !phase.is_active() || cell.is_revealed {
            return Ok(FlagOutcome {
                changed: false,
                flagged: cell.is_flagged,
                mines_remaining: board.mines_remaining,
            });
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            board.mines_remaining -= 1;
        } else {
            board.mines_remaining += 1;
        }
        log::debug!(
            "Flag at {:?} set to {}, mines remaining: {}",
            coords,
            cell.is_flagged,
            board.mines_remaining
        );

        Ok(FlagOutcome {
            changed: true,
            flagged: cell.is_flagged,
            mines_remaining: board.mines_remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(size: Coord, mines: &[Coord2]) -> GameSession<FixedMinePlacer> {
        let mut session = GameSession::new(FixedMinePlacer::new(mines.iter().copied()));
        session.configure(size, mines.len() as CellCount).unwrap();
        session
    }

    #[test]
    fn new_session_waits_for_configuration() {
        let mut session = GameSession::with_seed(0);

        assert_eq!(session.phase(), Phase::Configuring);
        assert_eq!(session.cells().count(), 0);
        assert!(!session.reveal_at(0, 0).unwrap().has_update());
        assert!(!session.toggle_flag_at(0, 0).unwrap().has_update());
        assert_eq!(session.phase(), Phase::Configuring);
    }

    #[test]
    fn configure_activates_a_blank_board() {
        let mut session = GameSession::with_seed(0);
        session.configure(4, 3).unwrap();

        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.mines_remaining(), 3);
        assert!(!session.first_move_consumed());
        assert_eq!(session.cells().count(), 16);
        assert!(session.cells().all(|view| !view.is_mine && !view.is_revealed));
    }

    #[test]
    fn rejected_configuration_keeps_previous_board() {
        let mut session = fixed(3, &[(2, 2)]);
        session.reveal_at(0, 0).unwrap();

        assert_eq!(session.configure(3, 9), Err(GameError::InvalidConfiguration));
        assert_eq!(session.configure(0, 1), Err(GameError::InvalidConfiguration));
        assert_eq!(session.config(), Some(GameConfig { size: 3, mines: 1 }));
        assert!(session.first_move_consumed());
        assert!(session.cell_at(0, 0).unwrap().is_revealed);
    }

    #[test]
    fn out_of_bounds_moves_are_errors() {
        let mut session = fixed(3, &[(2, 2)]);

        assert_eq!(session.reveal_at(3, 0), Err(GameError::OutOfBounds));
        assert_eq!(session.toggle_flag_at(0, 7), Err(GameError::OutOfBounds));
        assert!(!session.first_move_consumed());
    }

    #[test]
    fn first_reveal_places_mines_once() {
        let mut session = fixed(3, &[(2, 2)]);

        session.reveal_at(0, 2).unwrap();
        assert!(session.first_move_consumed());
        assert_eq!(session.mine_cells(), [(2, 2)]);

        session.reveal_at(2, 0).unwrap();
        assert_eq!(session.mine_cells(), [(2, 2)]);
    }

    #[test]
    fn hitting_a_mine_loses_and_exposes_mines_and_wrong_flags() {
        let mut session = fixed(5, &[(2, 2), (4, 4)]);
        session.toggle_flag_at(0, 4).unwrap();
        session.toggle_flag_at(4, 4).unwrap();

        let outcome = session.reveal_at(2, 2).unwrap();

        assert_eq!(outcome.phase, Phase::Lost);
        assert_eq!(outcome.changed, [(2, 2), (4, 4), (0, 4)]);
        assert_eq!(session.triggered_mine(), Some((2, 2)));
        assert_eq!(session.mine_cells(), [(2, 2), (4, 4)]);
        assert_eq!(session.incorrect_flags(), [(0, 4)]);
        assert!(!session.cell_at(2, 2).unwrap().is_revealed);
        assert!(session.is_over());
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut session = fixed(2, &[(1, 1)]);

        assert_eq!(session.reveal_at(0, 0).unwrap().phase, Phase::Active);
        assert_eq!(session.reveal_at(0, 1).unwrap().phase, Phase::Active);
        let outcome = session.reveal_at(1, 0).unwrap();

        assert_eq!(outcome.changed, [(1, 0)]);
        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(session.phase(), Phase::Won);
    }

    #[test]
    fn flood_fill_can_win_in_one_move() {
        let mut session = fixed(3, &[(2, 2)]);

        let outcome = session.reveal_at(0, 0).unwrap();

        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(outcome.changed.len(), 8);
        assert_eq!(session.cell_at(1, 1).unwrap().adjacent_mines, 1);
        assert!(!session.cell_at(2, 2).unwrap().is_revealed);
    }

    #[test]
    fn reveal_skips_flagged_and_revealed_cells() {
        let mut session = fixed(3, &[(2, 2)]);
        session.toggle_flag_at(1, 1).unwrap();

        assert!(!session.reveal_at(1, 1).unwrap().has_update());
        assert!(!session.first_move_consumed());

        let outcome = session.reveal_at(0, 0).unwrap();
        assert_eq!(outcome.changed.len(), 7);
        assert!(!session.reveal_at(0, 0).unwrap().has_update());
        assert!(session.cell_at(1, 1).unwrap().is_flagged);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn flag_toggle_round_trips_mines_remaining() {
        let mut session = fixed(3, &[(2, 2)]);

        let flagged = session.toggle_flag_at(0, 0).unwrap();
        assert_eq!(flagged, FlagOutcome { changed: true, flagged: true, mines_remaining: 0 });

        let unflagged = session.toggle_flag_at(0, 0).unwrap();
        assert_eq!(unflagged, FlagOutcome { changed: true, flagged: false, mines_remaining: 1 });
        assert_eq!(session.mines_remaining(), 1);
    }

    #[test]
    fn over_flagging_drives_mines_remaining_negative() {
        let mut session = fixed(3, &[(2, 2)]);

        for col in 0..3 {
            session.toggle_flag_at(0, col).unwrap();
        }

        assert_eq!(session.mines_remaining(), -2);
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut session = fixed(3, &[(2, 2)]);
        session.reveal_at(1, 1).unwrap();

        let outcome = session.toggle_flag_at(1, 1).unwrap();

        assert!(!outcome.has_update());
        assert!(!outcome.flagged);
        assert_eq!(session.mines_remaining(), 1);
    }

    #[test]
    fn finished_games_ignore_moves() {
        let mut session = fixed(3, &[(0, 0), (2, 2)]);
        session.reveal_at(0, 0).unwrap();
        assert_eq!(session.phase(), Phase::Lost);

        let before: Vec<_> = session.cells().collect();
        assert!(!session.reveal_at(1, 1).unwrap().has_update());
        assert!(!session.toggle_flag_at(0, 2).unwrap().has_update());
        let after: Vec<_> = session.cells().collect();

        assert_eq!(before, after);
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.mines_remaining(), 2);
    }

    #[test]
    fn reset_starts_over_with_same_config() {
        let mut session = fixed(3, &[(0, 0)]);
        session.reveal_at(0, 0).unwrap();
        assert_eq!(session.phase(), Phase::Lost);

        session.reset().unwrap();

        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.config(), Some(GameConfig { size: 3, mines: 1 }));
        assert!(!session.first_move_consumed());
        assert_eq!(session.triggered_mine(), None);
        assert!(session.mine_cells().is_empty());
    }

    #[test]
    fn reset_before_configure_is_noop() {
        let mut session = GameSession::with_seed(3);
        session.reset().unwrap();
        assert_eq!(session.phase(), Phase::Configuring);
    }
}
