//! Read-only projections of [`GameState`] for the presentation layer.

use std::fmt::Write;

use crate::chess::check::is_in_check;
use crate::chess::core::{Piece, PieceKind, Square, BOARD_WIDTH};
use crate::error::Result;
use crate::game::state::GameState;

bitflags::bitflags! {
    /// Highlights of a single cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellMarks: u8 {
        /// The cell holds the selected piece.
        const SELECTED = 0b0001;
        /// The selected piece can move here.
        const DESTINATION = 0b0010;
        /// The selected piece can capture here.
        const CAPTURE = 0b0100;
        /// The cell holds a king that is currently in check.
        const CHECKED_KING = 0b1000;
    }
}

/// Everything needed to draw one cell. Carries no behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableCell {
    #[allow(missing_docs)]
    pub occupant: Option<Piece>,
    #[allow(missing_docs)]
    pub marks: CellMarks,
}

impl RenderableCell {
    #[allow(missing_docs)]
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.marks.contains(CellMarks::SELECTED)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_legal_destination(&self) -> bool {
        self.marks.contains(CellMarks::DESTINATION)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.marks.contains(CellMarks::CAPTURE)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_king_in_check_highlight(&self) -> bool {
        self.marks.contains(CellMarks::CHECKED_KING)
    }
}

/// Projects the cell at `(row, col)`.
///
/// The king highlight requires the state to flag the king's owner as checked
/// and the king to still be attacked on the current board.
///
/// # Errors
///
/// Returns [`crate::error::Error::OutOfBounds`] for coordinates outside the
/// board.
pub fn renderable_cell(state: &GameState, row: u8, col: u8) -> Result<RenderableCell> {
    Ok(project(state, Square::new(row, col)?))
}

fn project(state: &GameState, square: Square) -> RenderableCell {
    let occupant = state.board().at(square);
    let mut marks = CellMarks::empty();
    if occupant.is_some() && state.active_selection() == Some(square) {
        marks |= CellMarks::SELECTED;
    }
    if let Some(destination) = state.legal_destinations().iter().find(|m| m.to == square) {
        marks |= CellMarks::DESTINATION;
        if destination.capture {
            marks |= CellMarks::CAPTURE;
        }
    }
    if let Some(piece) = occupant {
        if piece.kind == PieceKind::King
            && state.checked() == Some(piece.owner)
            && is_in_check(state.board(), piece.owner)
        {
            marks |= CellMarks::CHECKED_KING;
        }
    }
    RenderableCell { occupant, marks }
}

/// Piece symbols used by [`render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glyphs {
    /// Chess symbols such as `♔` and `♟`.
    #[default]
    Unicode,
    /// FEN letters: uppercase for White, lowercase for Black.
    Ascii,
}

impl Glyphs {
    const fn piece(self, piece: Piece) -> char {
        match self {
            Self::Unicode => piece.glyph(),
            Self::Ascii => piece.symbol(),
        }
    }
}

/// Draws the board as a text grid with row and column indices.
///
/// Each cell takes three characters: a left marker, the piece (or `.`), and a
/// right marker. Brackets surround the selected piece, `*` marks a quiet
/// destination, `x` a capture and `!` a king in check.
#[must_use]
pub fn render(state: &GameState, glyphs: Glyphs) -> String {
    let mut grid = String::from("  ");
    for col in 0..BOARD_WIDTH {
        let _ = write!(grid, " {col} ");
    }
    grid.push('\n');
    for square in Square::iter() {
        if square.col() == 0 {
            let _ = write!(grid, "{} ", square.row());
        }
        let cell = project(state, square);
        let symbol = cell.occupant.map_or('.', |piece| glyphs.piece(piece));
        let (left, right) = if cell.is_selected() {
            ('[', ']')
        } else if cell.is_capture() {
            ('x', ' ')
        } else if cell.is_legal_destination() {
            ('*', ' ')
        } else if cell.is_king_in_check_highlight() {
            ('!', ' ')
        } else {
            (' ', ' ')
        };
        grid.push(left);
        grid.push(symbol);
        grid.push(right);
        if square.col() == BOARD_WIDTH - 1 {
            grid.push('\n');
        }
    }
    grid
}
