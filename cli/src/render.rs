use std::io::{self, Write};

use sweeper_core::{CellView, GameSession, MinePlacer, Phase};

/// Character shown for a cell, mines and wrong flags only show once the game is lost.
pub fn glyph(view: &CellView, phase: Phase) -> char {
    let lost = matches!(phase, Phase::Lost);
    match (view.is_revealed, view.is_flagged, view.is_mine) {
        (_, true, false) if lost => 'X',
        (_, _, true) if lost => '*',
        (_, true, _) => 'F',
        (true, _, _) if view.adjacent_mines == 0 => '.',
        (true, _, _) => char::from(b'0' + view.adjacent_mines),
        (false, _, _) => '#',
    }
}

pub fn status_line(phase: Phase) -> &'static str {
    match phase {
        Phase::Configuring => "Waiting for a board",
        Phase::Active => "Playing",
        Phase::Won => "You win!",
        Phase::Lost => "Game over!",
    }
}

pub fn render<P: MinePlacer>(session: &GameSession<P>, out: &mut impl Write) -> io::Result<()> {
    let phase = session.phase();
    writeln!(
        out,
        "Mines left: {}  {}",
        session.mines_remaining(),
        status_line(phase)
    )?;

    let Some(config) = session.config() else {
        return Ok(());
    };

    write!(out, "    ")?;
    for col in 0..config.size {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;

    let mut row = String::new();
    for view in session.cells() {
        if view.col == 0 {
            row.clear();
            row.push_str(&format!("{:>3} ", view.row));
        }
        row.push_str(&format!("{:>3}", glyph(&view, phase)));
        if view.col + 1 == config.size {
            writeln!(out, "{}", row)?;
        }
    }
    Ok(())
}
