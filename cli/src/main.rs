use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{GameSession, MinePlacer};

use command::Command;
use settings::{DEFAULT_MINES, DEFAULT_SIZE, Settings};

mod command;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Play a game of mines in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board side, the board is square
    #[arg(short, long, default_value_t = u32::from(DEFAULT_SIZE))]
    size: u32,

    /// Number of mines
    #[arg(short, long, default_value_t = u32::from(DEFAULT_MINES))]
    mines: u32,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

const HELP: &str = "commands: r <row> <col> reveal, f <row> <col> flag, n new game, q quit";

fn apply<P: MinePlacer>(session: &mut GameSession<P>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Reveal(row, col) => {
            let outcome = session.reveal_at(row, col)?;
            log::debug!("Reveal changed {} cells", outcome.changed.len());
        }
        Command::Flag(row, col) => {
            let outcome = session.toggle_flag_at(row, col)?;
            log::debug!("Flag outcome: {:?}", outcome);
        }
        Command::NewGame => session.reset()?,
        Command::Quit => {}
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let settings = Settings::sanitize(args.size, args.mines);
    let mut session = GameSession::with_seed(seed);
    session
        .configure(settings.size, settings.mines)
        .context("Could not configure the board")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", HELP)?;
    render::render(&session, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{:#}\n{}", err, HELP)?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        if let Err(err) = apply(&mut session, command) {
            writeln!(out, "{:#}", err)?;
        }
        render::render(&session, &mut out)?;
        out.flush()?;
    }

    Ok(())
}
