//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};

use itertools::iproduct;

use crate::error::{Error, Result};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A square on the board addressed by `(row, col)`, both within
/// `0..BOARD_WIDTH`.
///
/// Row 0 is Black's back rank and row 7 is White's back rank, so White pawns
/// advance towards decreasing rows.
///
/// ```
/// use shakh::chess::core::Square;
///
/// let square = Square::new(7, 4).unwrap();
/// assert_eq!(square.row(), 7);
/// assert_eq!(square.col(), 4);
/// assert_eq!(square.to_string(), "e1");
/// assert!(Square::new(8, 0).is_err());
/// ```
///
/// Square is a compact representation using only two bytes.
///
/// ```
/// use shakh::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Connects row and column to form a full square.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either coordinate is outside
    /// `0..BOARD_WIDTH`.
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Ok(Self { row, col })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Shifts the square by `(rows, cols)`. Returns `None` when the result
    /// falls off the board.
    #[must_use]
    pub fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(rows);
        let col = i16::from(self.col) + i16::from(cols);
        let (row, col) = (u8::try_from(row).ok()?, u8::try_from(col).ok()?);
        Self::new(row, col).ok()
    }

    /// Moves one step in the given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (rows, cols) = direction.delta();
        self.offset(rows, cols)
    }

    /// Iterates over all squares of the board row by row, starting at
    /// `(0, 0)`.
    pub fn iter() -> impl Iterator<Item = Self> {
        iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH).map(|(row, col)| Self { row, col })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = Error;

    fn try_from((row, col): (u8, u8)) -> Result<Self> {
        Self::new(row, col)
    }
}

impl fmt::Display for Square {
    /// Prints the square in algebraic notation: column 0 is file `a` and row
    /// 7 is rank `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(b'a' + self.col))?;
        write!(f, "{}", BOARD_WIDTH - self.row)
    }
}

/// The game is played between two players: White and Black. Unlike the
/// standard rules, Black moves first by default (see
/// [`crate::game::state::Rules`]).
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn push.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Row where the pawns start and may advance by two squares.
    #[must_use]
    pub const fn pawns_starting(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row where the pieces other than pawns start.
    #[must_use]
    pub const fn backrank(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Kinds of the pieces. Each kind has a fixed movement pattern, see
/// [`crate::chess::movegen`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
            Self::Pawn => "pawn",
        })
    }
}

/// Represents a specific piece owned by a player: the only thing that can
/// occupy a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// FEN letter of the piece: uppercase for White, lowercase for Black.
    #[must_use]
    pub const fn symbol(self) -> char {
        let symbol = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match self.owner {
            Player::White => symbol.to_ascii_uppercase(),
            Player::Black => symbol,
        }
    }

    /// Unicode chess symbol of the piece.
    #[must_use]
    pub const fn glyph(self) -> char {
        match (self.owner, self.kind) {
            (Player::White, PieceKind::King) => '♔',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::Black, PieceKind::King) => '♚',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = Error;

    /// Parses the FEN-style symbol: uppercase for White, lowercase for Black.
    fn try_from(symbol: char) -> Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return Err(Error::InvalidSymbol(symbol)),
        };
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Directions on the board from a perspective of White player, whose pieces
/// start at the bottom (row 7).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// Rook lines.
    pub const ORTHOGONAL: [Self; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];
    /// Bishop lines.
    pub const DIAGONAL: [Self; 4] = [
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];
    /// Queen and king lines.
    pub const ALL: [Self; 8] = [
        Self::Down,
        Self::Up,
        Self::Right,
        Self::Left,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// `(rows, cols)` step of the direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn square() {
        let squares: Vec<_> = [(0, 0), (7, 7), (8, 0), (0, 8), (3, 5), (255, 255)]
            .iter()
            .filter_map(|&(row, col)| Square::new(row, col).ok())
            .map(|square| square.to_string())
            .collect();
        assert_eq!(squares, vec!["a8", "h1", "f5"]);
        assert_eq!(Square::iter().count(), usize::from(BOARD_SIZE));
        assert_eq!(
            Square::iter().nth(9),
            Some(Square::new(1, 1).expect("in bounds"))
        );
    }

    #[test]
    #[should_panic(expected = "OutOfBounds { row: 8, col: 3 }")]
    fn square_out_of_bounds() {
        let _ = Square::new(8, 3).unwrap();
    }

    #[test]
    fn square_from_tuple() {
        assert_eq!(
            Square::try_from((2, 9)),
            Err(Error::OutOfBounds { row: 2, col: 9 })
        );
        assert!(Square::try_from((2, 7)).is_ok());
    }

    #[test]
    fn within_board_shift() {
        let square = Square::new(4, 4).unwrap();
        assert_eq!(square.shift(Direction::Up), Square::new(3, 4).ok());
        assert_eq!(square.shift(Direction::UpLeft), Square::new(3, 3).ok());
        assert_eq!(square.shift(Direction::UpRight), Square::new(3, 5).ok());
        assert_eq!(square.shift(Direction::Left), Square::new(4, 3).ok());
        assert_eq!(square.shift(Direction::Right), Square::new(4, 5).ok());
        assert_eq!(square.shift(Direction::Down), Square::new(5, 4).ok());
        assert_eq!(square.shift(Direction::DownLeft), Square::new(5, 3).ok());
        assert_eq!(square.shift(Direction::DownRight), Square::new(5, 5).ok());
    }

    #[test]
    fn corner_squares_shift() {
        let square = Square::new(0, 0).unwrap();
        assert_eq!(square.shift(Direction::Down), Square::new(1, 0).ok());
        assert_eq!(square.shift(Direction::Right), Square::new(0, 1).ok());
        assert_eq!(square.shift(Direction::DownRight), Square::new(1, 1).ok());
        for direction in [
            Direction::Up,
            Direction::Left,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
        ] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::new(7, 7).unwrap();
        assert_eq!(square.shift(Direction::Up), Square::new(6, 7).ok());
        assert_eq!(square.shift(Direction::Left), Square::new(7, 6).ok());
        assert_eq!(square.shift(Direction::UpLeft), Square::new(6, 6).ok());
        for direction in [
            Direction::Down,
            Direction::Right,
            Direction::DownRight,
            Direction::DownLeft,
            Direction::UpRight,
        ] {
            assert_eq!(square.shift(direction), None);
        }
        // Knight jumps can overshoot by two.
        assert_eq!(square.offset(-2, 1), None);
        assert_eq!(square.offset(-2, -1), Square::new(5, 6).ok());
    }

    #[test]
    fn player() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.push_direction().delta(), (-1, 0));
        assert_eq!(Player::Black.push_direction().delta(), (1, 0));
        assert_eq!(Player::White.to_string(), "White");
    }

    #[test]
    fn piece_symbols() {
        let pieces: String = "KQRBNPkqrbnp"
            .chars()
            .map(|symbol| Piece::try_from(symbol).expect("valid symbol").to_string())
            .collect();
        assert_eq!(pieces, "KQRBNPkqrbnp");
        assert_eq!(
            Piece::try_from('N'),
            Ok(Piece::new(Player::White, PieceKind::Knight))
        );
        assert_eq!(Piece::try_from('x'), Err(Error::InvalidSymbol('x')));
        assert_eq!(Piece::new(Player::Black, PieceKind::King).glyph(), '♚');
    }

    #[test]
    fn primitive_size() {
        // Niche optimization keeps empty cells free.
        assert_eq!(
            std::mem::size_of::<Piece>(),
            std::mem::size_of::<Option<Piece>>()
        );
    }
}
