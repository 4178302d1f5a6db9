//! Check and checkmate detection on top of the pseudo-legal
//! [move generator](crate::chess::movegen).
//!
//! Both detectors are brute-force: they scan the whole board and generate the
//! moves of every relevant piece. Checkmate detection additionally simulates
//! every candidate move on a copy of the board. This is plenty fast on an 8×8
//! board and does not need attack maps.

use crate::chess::board::Board;
use crate::chess::core::Player;
use crate::chess::movegen::pseudo_legal_moves;

/// Returns `true` if any opponent's piece can move onto the square of
/// `player`'s king.
///
/// A board without `player`'s king is never "in check": the king has already
/// been captured and the game is decided by other means.
///
/// ```
/// use shakh::chess::board::Board;
/// use shakh::chess::check::is_in_check;
/// use shakh::chess::core::Player;
///
/// let board = Board::from_placement("4r3/8/8/8/8/8/8/4K3").unwrap();
/// assert!(is_in_check(&board, Player::White));
/// assert!(!is_in_check(&board, Player::Black));
/// ```
#[must_use]
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let Some(king) = board.king_square(player) else {
        return false;
    };
    board.pieces(player.opponent()).any(|(square, piece)| {
        pseudo_legal_moves(board, square, Some(piece))
            .iter()
            .any(|m| m.to == king)
    })
}

/// Returns `true` if `player` is in check and no pseudo-legal move of any of
/// its pieces leads to a board where the king is safe.
///
/// A player who is not in check is never checkmated, even without any moves
/// left (stalemate is not handled by the rules).
#[must_use]
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    if !is_in_check(board, player) {
        return false;
    }
    let has_escape = board.pieces(player).any(|(from, piece)| {
        pseudo_legal_moves(board, from, Some(piece))
            .iter()
            .any(|m| !is_in_check(&board.with_move(from, m.to), player))
    });
    !has_escape
}
