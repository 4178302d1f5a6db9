//! The game state machine: who moves next, what is selected, who is in check
//! and who won.
//!
//! [`GameState`] is an immutable value. Every transition ([`GameState::click`]
//! and friends) returns a fresh state and leaves the old one untouched, so the
//! presentation layer owns the only "mutable" reference and simply replaces it
//! after each event.

use std::fmt;

use tracing::{debug, info, trace};

use crate::chess::board::Board;
use crate::chess::check::{is_checkmate, is_in_check};
use crate::chess::core::{Player, Square};
use crate::chess::movegen::{pseudo_legal_moves, Move};

/// Rule switches. [`Rules::default`] reproduces the classic behavior of the
/// game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Side making the first move. Black by default.
    pub first_player: Player,
    /// End the game when two checking moves follow each other (see
    /// [`EndReason::RepeatedCheck`]). Enabled by default.
    pub consecutive_check_ends_game: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            first_player: Player::Black,
            consecutive_check_ends_game: true,
        }
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The loser's king was taken off the board.
    KingCaptured,
    /// The loser is in check and every move leaves the king attacked.
    Checkmate,
    /// A checking move answered the previous checking move. This shortcut
    /// ends the game without proving that the check is inescapable.
    RepeatedCheck,
}

/// Human-readable message describing the last transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The side to move is in check.
    Check,
    /// The game is over.
    Lost {
        #[allow(missing_docs)]
        loser: Player,
        #[allow(missing_docs)]
        reason: EndReason,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check => write!(f, "Check!"),
            Self::Lost {
                loser,
                reason: EndReason::KingCaptured,
            } => write!(f, "{loser} lost (king captured)"),
            Self::Lost { loser, .. } => write!(f, "{loser} lost (checkmate)"),
        }
    }
}

/// Coarse stage of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nobody is in check.
    Playing,
    /// The given player is in check.
    Check(Player),
    /// The game is over and the given player won.
    Ended(Player),
}

/// What a single click did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The game is over: nothing changes.
    Ignored,
    /// A piece of the side to move was selected and its destinations were
    /// calculated.
    Selected {
        #[allow(missing_docs)]
        square: Square,
    },
    /// The click hit neither a destination nor a piece of the side to move.
    Deselected,
    /// A move was made and the opponent is not in check.
    Moved {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
        #[allow(missing_docs)]
        capture: bool,
    },
    /// A move was made and the given player is now in check.
    Check {
        #[allow(missing_docs)]
        player: Player,
    },
    /// A move ended the game.
    Ended {
        #[allow(missing_docs)]
        winner: Player,
        #[allow(missing_docs)]
        reason: EndReason,
    },
}

/// Everything the presentation layer needs to draw the game and everything the
/// rules need to process the next click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    active_selection: Option<Square>,
    legal_destinations: Vec<Move>,
    checked: Option<Player>,
    pending_check: bool,
    winner: Option<Player>,
    status: Option<Status>,
    rules: Rules,
}

impl GameState {
    /// Starting layout with `rules.first_player` to move.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self::from_board(Board::starting(), rules.first_player, rules)
    }

    /// Arbitrary board with `turn` to move. Nothing is selected and nobody is
    /// flagged in check until the first move is made.
    #[must_use]
    pub const fn from_board(board: Board, turn: Player, rules: Rules) -> Self {
        Self {
            board,
            turn,
            active_selection: None,
            legal_destinations: Vec::new(),
            checked: None,
            pending_check: false,
            winner: None,
            status: None,
            rules,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Square of the selected piece, if any.
    #[must_use]
    pub const fn active_selection(&self) -> Option<Square> {
        self.active_selection
    }

    /// Pseudo-legal destinations of the selected piece, in generation order.
    #[must_use]
    pub fn legal_destinations(&self) -> &[Move] {
        &self.legal_destinations
    }

    /// Player whose king was attacked after the last move.
    #[must_use]
    pub const fn checked(&self) -> Option<Player> {
        self.checked
    }

    /// Whether the last move gave check. Another checking move right after it
    /// ends the game when [`Rules::consecutive_check_ends_game`] is set.
    #[must_use]
    pub const fn pending_check(&self) -> bool {
        self.pending_check
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.winner, self.checked) {
            (Some(winner), _) => Phase::Ended(winner),
            (None, Some(player)) => Phase::Check(player),
            (None, None) => Phase::Playing,
        }
    }

    /// Handles a click on `square`: makes a move if the square is one of the
    /// destinations of the selected piece, otherwise (re)selects.
    #[must_use]
    pub fn click(&self, square: Square) -> (Self, Transition) {
        if self.is_game_over() {
            debug!(%square, "click ignored: the game is over");
            return (self.clone(), Transition::Ignored);
        }
        if let Some(from) = self.active_selection {
            if let Some(next_move) = self.legal_destinations.iter().find(|m| m.to == square) {
                return self.attempt_move(from, *next_move);
            }
        }
        self.select_square(square)
    }

    /// Selects the piece on `square` if it belongs to the side to move and
    /// calculates its destinations. Clears the selection otherwise.
    ///
    /// The destinations are pseudo-legal: a move that leaves the mover's own
    /// king attacked is offered, too.
    #[must_use]
    pub fn select_square(&self, square: Square) -> (Self, Transition) {
        if self.is_game_over() {
            return (self.clone(), Transition::Ignored);
        }
        let mut next = self.clone();
        match self.board.at(square) {
            Some(piece) if piece.owner == self.turn => {
                next.active_selection = Some(square);
                next.legal_destinations = pseudo_legal_moves(&self.board, square, Some(piece)).to_vec();
                trace!(%square, destinations = next.legal_destinations.len(), "selected");
                (next, Transition::Selected { square })
            },
            _ => {
                next.active_selection = None;
                next.legal_destinations.clear();
                trace!(%square, "selection cleared");
                (next, Transition::Deselected)
            },
        }
    }

    /// Moves the selected piece to `next_move.to` and evaluates the outcome
    /// for the opponent: king capture, check, or checkmate.
    fn attempt_move(&self, from: Square, next_move: Move) -> (Self, Transition) {
        let mover = self.turn;
        let opponent = mover.opponent();
        let mut next = Self {
            board: self.board.with_move(from, next_move.to),
            turn: opponent,
            active_selection: None,
            legal_destinations: Vec::new(),
            ..self.clone()
        };
        debug!(player = %mover, %from, to = %next_move.to, capture = next_move.capture, "move");

        if next.board.king_square(opponent).is_none() {
            return next.finish(mover, EndReason::KingCaptured);
        }

        if !is_in_check(&next.board, opponent) {
            next.checked = None;
            next.pending_check = false;
            next.status = None;
            let transition = Transition::Moved {
                from,
                to: next_move.to,
                capture: next_move.capture,
            };
            return (next, transition);
        }

        next.checked = Some(opponent);
        if self.pending_check && self.rules.consecutive_check_ends_game {
            return next.finish(mover, EndReason::RepeatedCheck);
        }
        next.pending_check = true;
        next.status = Some(Status::Check);
        if is_checkmate(&next.board, opponent) {
            return next.finish(mover, EndReason::Checkmate);
        }
        info!(player = %opponent, "check");
        (next, Transition::Check { player: opponent })
    }

    fn finish(mut self, winner: Player, reason: EndReason) -> (Self, Transition) {
        info!(%winner, ?reason, "game over");
        self.winner = Some(winner);
        // A captured king leaves the check flags as they were.
        if reason != EndReason::KingCaptured {
            self.pending_check = false;
        }
        self.status = Some(Status::Lost {
            loser: winner.opponent(),
            reason,
        });
        (self, Transition::Ended { winner, reason })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
