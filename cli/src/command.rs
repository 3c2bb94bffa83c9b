use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::Coord;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord, Coord),
    Flag(Coord, Coord),
    NewGame,
    Quit,
}

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<(Coord, Coord)> {
    let (Some(row), Some(col), None) = (args.next(), args.next(), args.next()) else {
        bail!("expected a row and a column");
    };
    let row = row.parse().with_context(|| format!("bad row {row:?}"))?;
    let col = col.parse().with_context(|| format!("bad column {col:?}"))?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("r" | "reveal") => parse_coords(words).map(|(row, col)| Self::Reveal(row, col)),
            Some("f" | "flag") => parse_coords(words).map(|(row, col)| Self::Flag(row, col)),
            Some("n" | "new") => Ok(Self::NewGame),
            Some("q" | "quit") => Ok(Self::Quit),
            Some(other) => bail!("unknown command {other:?}"),
            None => bail!("empty command"),
        }
    }
}
