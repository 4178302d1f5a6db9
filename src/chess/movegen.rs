//! Pseudo-legal move generation for a single piece.
//!
//! The generator only knows the movement patterns and the occupancy rules: it
//! happily returns moves that leave the mover's own king attacked. Filtering
//! those out is the caller's job ([`crate::chess::check::is_checkmate`] does it
//! by simulation; selecting a piece in [`crate::game`] does not).
//!
//! Castling, en passant and promotion are not part of the rules.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Direction, Piece, PieceKind, Player, Square};

/// A queen in the middle of an empty board has the most targets: 27.
pub const MAX_PIECE_MOVES: usize = 27;

/// Destinations of a single piece. Stored on the stack: the capacity is an
/// upper bound for every piece kind.
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

/// Candidate destination of a piece. The origin is not stored: it is always
/// known by whoever asked for the moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Destination square.
    pub to: Square,
    /// Whether an opponent's piece occupies the destination.
    pub capture: bool,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(to: Square, capture: bool) -> Self {
        Self { to, capture }
    }
}

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Calculates the destinations `occupant` standing on `from` can reach,
/// ignoring whether the move exposes its own king. An empty square has no
/// moves.
///
/// `occupant` is passed separately so that callers which already hold the
/// piece (e.g. while scanning the board) don't look it up twice.
///
/// ```
/// use shakh::chess::board::Board;
/// use shakh::chess::core::Square;
/// use shakh::chess::movegen::pseudo_legal_moves;
///
/// let board = Board::starting();
/// let knight = Square::new(0, 1).unwrap();
/// let moves = pseudo_legal_moves(&board, knight, board.at(knight));
/// assert_eq!(moves.len(), 2);
/// ```
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Square, occupant: Option<Piece>) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = occupant else {
        return moves;
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(&mut moves, board, from, piece.owner),
        PieceKind::Rook => sliding_moves(&mut moves, board, from, piece.owner, &Direction::ORTHOGONAL),
        PieceKind::Bishop => sliding_moves(&mut moves, board, from, piece.owner, &Direction::DIAGONAL),
        PieceKind::Queen => sliding_moves(&mut moves, board, from, piece.owner, &Direction::ALL),
        PieceKind::Knight => {
            for (rows, cols) in KNIGHT_JUMPS {
                step_move(&mut moves, board, from.offset(rows, cols), piece.owner);
            }
        },
        PieceKind::King => {
            for direction in Direction::ALL {
                step_move(&mut moves, board, from.shift(direction), piece.owner);
            }
        },
    }
    moves
}

/// Pushes forward onto empty squares (two squares from the starting row) and
/// captures diagonally forward. A diagonal move onto an empty square is never
/// generated.
fn pawn_moves(moves: &mut MoveList, board: &Board, from: Square, owner: Player) {
    let push_direction = owner.push_direction();
    let (forward, _) = push_direction.delta();
    if let Some(push) = from.shift(push_direction) {
        if board.at(push).is_none() {
            moves.push(Move::new(push, false));
            if from.row() == owner.pawns_starting() {
                if let Some(double_push) = push.shift(push_direction) {
                    if board.at(double_push).is_none() {
                        moves.push(Move::new(double_push, false));
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if let Some(victim) = board.at(target) {
            if victim.owner != owner {
                moves.push(Move::new(target, true));
            }
        }
    }
}

/// Casts a ray in each direction until it leaves the board or hits a piece.
/// The blocker is included as a capture only if it belongs to the opponent.
fn sliding_moves(
    moves: &mut MoveList,
    board: &Board,
    from: Square,
    owner: Player,
    directions: &[Direction],
) {
    for &direction in directions {
        let mut ray = from.shift(direction);
        while let Some(target) = ray {
            match board.at(target) {
                None => moves.push(Move::new(target, false)),
                Some(blocker) => {
                    if blocker.owner != owner {
                        moves.push(Move::new(target, true));
                    }
                    break;
                },
            }
            ray = target.shift(direction);
        }
    }
}

/// Single jump of a knight or a king: the target has to be empty or hold an
/// opponent's piece.
fn step_move(moves: &mut MoveList, board: &Board, target: Option<Square>, owner: Player) {
    let Some(target) = target else {
        return;
    };
    match board.at(target) {
        None => moves.push(Move::new(target, false)),
        Some(occupant) if occupant.owner != owner => moves.push(Move::new(target, true)),
        Some(_) => {},
    }
}
