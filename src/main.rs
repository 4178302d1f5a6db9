//! Plays a game in the terminal: reads commands from stdin and prints the
//! outcome of each one to stdout. Logs go to stderr.

use std::io;

use clap::{Parser, ValueEnum};
use shakh::chess::core::Player;
use shakh::game::{Glyphs, Rules};
use shakh::session::Session;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Self::White,
            Side::Black => Self::Black,
        }
    }
}

/// Two-player chess-like game driven by `click <row> <col>` commands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Side that makes the first move.
    #[arg(long, value_enum, default_value_t = Side::Black)]
    first: Side,
    /// Do not end the game when a checking move answers another one.
    #[arg(long)]
    no_check_heuristic: bool,
    /// Draw pieces with letters instead of chess symbols.
    #[arg(long)]
    ascii: bool,
    /// Log filter, e.g. "debug" or "shakh=trace". Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = match &config.log_level {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    shakh::print_engine_info();

    let rules = Rules {
        first_player: config.first.into(),
        consecutive_check_ends_game: !config.no_check_heuristic,
    };
    let glyphs = if config.ascii {
        Glyphs::Ascii
    } else {
        Glyphs::Unicode
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Session::new(&mut input, &mut output, rules, glyphs).run()
}
