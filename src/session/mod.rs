//! Line-oriented text front-end. [`Session::run`] reads commands from the
//! input stream, feeds clicks to the game and writes the outcome of each one
//! to the output stream.
//!
//! Supported commands:
//!
//! - `click <row> <col>`: click on a cell.
//! - `moves`: list destinations of the selected piece.
//! - `board` (or `d`): draw the board.
//! - `status`: print whose turn it is or how the game ended.
//! - `new`: start over.
//! - `quit`: leave the session.
//!
//! ```
//! use shakh::game::{Glyphs, Rules};
//! use shakh::session::Session;
//!
//! let mut input = "click 1 4\nclick 3 4\nstatus\n".as_bytes();
//! let mut output = Vec::new();
//! Session::new(&mut input, &mut output, Rules::default(), Glyphs::Ascii)
//!     .run()
//!     .unwrap();
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.ends_with("Turn: White\n"));
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;
use tracing::debug;

use crate::game::{self, GameState, Glyphs, Rules, Transition};
use crate::session::command::Command;

mod command;

/// Owns the current [`GameState`] and the I/O streams.
pub struct Session<'a, R: BufRead, W: Write> {
    state: GameState,
    glyphs: Glyphs,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a new session with the starting layout.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W, rules: Rules, glyphs: Glyphs) -> Self {
        Self {
            state: game::initial_state_with(rules),
            glyphs,
            input,
            output,
        }
    }

    /// Current state of the game.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Executes commands until `quit` or the end of the input stream.
    /// Malformed commands and clicks outside the board are reported and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Fails only if reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading the next command")?;
            if read == 0 {
                break;
            }
            match Command::parse(&line) {
                Command::Click { row, col } => self.handle_click(row, col)?,
                Command::Moves => self.handle_moves()?,
                Command::Board => self.handle_board()?,
                Command::Status => writeln!(self.output, "{}", game::headline(&self.state))?,
                Command::NewGame => {
                    self.state = game::initial_state_with(self.state.rules());
                    writeln!(self.output, "{}", game::headline(&self.state))?;
                },
                Command::Quit => break,
                Command::Empty => {},
                Command::Unknown(command) => {
                    debug!(%command, "unknown command");
                    writeln!(self.output, "unknown command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn handle_click(&mut self, row: u8, col: u8) -> anyhow::Result<()> {
        let (state, transition) = match game::handle_cell_click(&self.state, row, col) {
            Ok(result) => result,
            Err(e) => {
                writeln!(self.output, "error: {e}")?;
                return Ok(());
            },
        };
        self.state = state;
        match transition {
            Transition::Ignored => writeln!(self.output, "ignored: the game is over")?,
            Transition::Selected { square } => writeln!(
                self.output,
                "selected {square}: {} moves",
                self.state.legal_destinations().len()
            )?,
            Transition::Deselected => writeln!(self.output, "selection cleared")?,
            Transition::Moved { from, to, capture } => {
                let separator = if capture { 'x' } else { '-' };
                writeln!(self.output, "moved {from}{separator}{to}")?;
                writeln!(self.output, "{}", game::headline(&self.state))?;
            },
            Transition::Check { .. } | Transition::Ended { .. } => {
                writeln!(self.output, "{}", game::headline(&self.state))?;
            },
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        if self.state.active_selection().is_none() {
            writeln!(self.output, "no piece selected")?;
            return Ok(());
        }
        let moves = self
            .state
            .legal_destinations()
            .iter()
            .map(|m| format!("{}{}", if m.capture { "x" } else { "" }, m.to))
            .join(" ");
        writeln!(self.output, "moves: {moves}")?;
        Ok(())
    }

    fn handle_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", game::render(&self.state, self.glyphs))?;
        Ok(())
    }
}
