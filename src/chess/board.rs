//! Square-centric ("mailbox") board representation: an 8×8 grid where each
//! cell is either empty or holds exactly one [`Piece`].
//!
//! [`Board`] is a small `Copy` value. Making a move never mutates the board in
//! place: [`Board::with_move`] returns a new board, which keeps the checkmate
//! simulation in [`crate::chess::check`] free of side effects.

use std::fmt::{self, Write};

use crate::chess::core::{Piece, PieceKind, Player, Square, BOARD_WIDTH};
use crate::error::{Error, Result};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Order of the pieces on both back ranks, from column 0 to column 7.
const BACKRANK: [PieceKind; WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid of (possibly) occupied squares indexed by `(row, col)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; WIDTH]; WIDTH],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; WIDTH]; WIDTH],
        }
    }

    /// Creates the starting layout: Black's pieces on rows 0 and 1, White's
    /// on rows 6 and 7.
    ///
    /// ```
    /// use shakh::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for player in [Player::White, Player::Black] {
            let backrank = usize::from(player.backrank());
            let pawns = usize::from(player.pawns_starting());
            for (col, kind) in BACKRANK.iter().enumerate() {
                board.cells[backrank][col] = Some(Piece::new(player, *kind));
                board.cells[pawns][col] = Some(Piece::new(player, PieceKind::Pawn));
            }
        }
        board
    }

    /// Returns the occupant of the square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns the occupant of `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// board.
    pub fn get(&self, row: u8, col: u8) -> Result<Option<Piece>> {
        Ok(self.at(Square::new(row, col)?))
    }

    /// Returns a copy of the board where the occupant of `from` moved to `to`
    /// and `from` became empty. Whatever stood on `to` is captured silently.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> Self {
        let mut result = *self;
        result.cells[to.row() as usize][to.col() as usize] =
            self.cells[from.row() as usize][from.col() as usize];
        result.cells[from.row() as usize][from.col() as usize] = None;
        result
    }

    /// Returns a copy of the board with `piece` placed on `square`,
    /// overwriting the previous occupant.
    #[must_use]
    pub fn with_piece(&self, square: Square, piece: Piece) -> Self {
        let mut result = *self;
        result.cells[square.row() as usize][square.col() as usize] = Some(piece);
        result
    }

    /// Iterates over all occupied squares, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Iterates over the squares occupied by pieces of the given player.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.owner == player)
    }

    /// Finds the king of the given player with a full board scan. Returns
    /// `None` once the king has been captured.
    #[must_use]
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces(player)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Parses the piece placement part of Forsyth-Edwards Notation. The first
    /// rank in the input is row 0, digits stand for runs of empty squares.
    ///
    /// ```
    /// use shakh::chess::board::Board;
    ///
    /// let board = Board::from_placement("4r3/8/8/8/8/8/8/4K3").unwrap();
    /// assert_eq!(board.to_string(), "4r3/8/8/8/8/8/8/4K3");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPlacement`] if there are not exactly 8 ranks of
    /// exactly 8 squares each and [`Error::InvalidSymbol`] on unknown pieces.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let mut board = Self::empty();
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != WIDTH {
            return Err(Error::InvalidPlacement(format!(
                "expected {BOARD_WIDTH} ranks, got {}",
                ranks.len()
            )));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    if skip == 0 {
                        return Err(Error::InvalidPlacement(
                            "increment can not be 0".to_string(),
                        ));
                    }
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::try_from(symbol)?;
                if col >= WIDTH {
                    return Err(Error::InvalidPlacement(format!(
                        "rank {rank} has more than {BOARD_WIDTH} squares"
                    )));
                }
                board.cells[row][col] = Some(piece);
                col += 1;
            }
            if col != WIDTH {
                return Err(Error::InvalidPlacement(format!(
                    "rank size should be exactly {BOARD_WIDTH}, got {rank} of length {col}"
                )));
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Prints the piece placement in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_squares = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if row != WIDTH - 1 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a human-readable format ('.' for empty square, FEN
    /// algebraic symbol for piece).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_char('.')?,
                }
                if col != WIDTH - 1 {
                    f.write_char(' ')?;
                }
            }
            if row != WIDTH - 1 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
