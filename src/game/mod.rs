//! The game on top of the [rules](crate::chess): turn order, selection,
//! check tracking and win detection, plus the functions the presentation
//! layer talks to.
//!
//! Everything here works on immutable [`GameState`] values. A front-end keeps
//! the current state, passes it to [`handle_cell_click`] and replaces it with
//! the returned one:
//!
//! ```
//! use shakh::chess::core::Player;
//! use shakh::game::{handle_cell_click, initial_state, Transition};
//!
//! let state = initial_state();
//! let (state, transition) = handle_cell_click(&state, 1, 4).unwrap();
//! assert!(matches!(transition, Transition::Selected { .. }));
//! let (state, _) = handle_cell_click(&state, 3, 4).unwrap();
//! assert_eq!(state.turn(), Player::White);
//! ```

pub mod state;
pub mod view;

pub use state::{EndReason, GameState, Phase, Rules, Status, Transition};
pub use view::{render, renderable_cell, CellMarks, Glyphs, RenderableCell};

use crate::chess::core::Square;
use crate::error::Result;

/// Starting layout with the default [`Rules`]: Black moves first.
#[must_use]
pub fn initial_state() -> GameState {
    initial_state_with(Rules::default())
}

/// Starting layout with custom rules.
#[must_use]
pub fn initial_state_with(rules: Rules) -> GameState {
    GameState::new(rules)
}

/// Processes a click on `(row, col)` and returns the next state together with
/// what happened.
///
/// # Errors
///
/// Returns [`crate::error::Error::OutOfBounds`] if the coordinates are outside
/// the board. The given state is not affected.
pub fn handle_cell_click(state: &GameState, row: u8, col: u8) -> Result<(GameState, Transition)> {
    let square = Square::new(row, col)?;
    Ok(state.click(square))
}

/// Current status message, if any.
#[must_use]
pub fn status_text(state: &GameState) -> Option<String> {
    state.status().map(|status| status.to_string())
}

#[allow(missing_docs)]
#[must_use]
pub const fn is_game_over(state: &GameState) -> bool {
    state.is_game_over()
}

/// One-line summary for a title bar: the status message if there is one,
/// otherwise whose turn it is (or who won).
#[must_use]
pub fn headline(state: &GameState) -> String {
    if let Some(status) = status_text(state) {
        return status;
    }
    match state.winner() {
        Some(winner) => format!("Game over: {winner} won"),
        None => format!("Turn: {}", state.turn()),
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::Player;
    use crate::error::Error;

    #[test]
    fn out_of_bounds_click() {
        let state = initial_state();
        assert_eq!(
            handle_cell_click(&state, 8, 0),
            Err(Error::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            handle_cell_click(&state, 0, 8),
            Err(Error::OutOfBounds { row: 0, col: 8 })
        );
    }

    #[test]
    fn headlines() {
        let state = initial_state();
        assert_eq!(headline(&state), "Turn: Black");
        assert_eq!(status_text(&state), None);
        let state = initial_state_with(Rules {
            first_player: Player::White,
            ..Rules::default()
        });
        assert_eq!(headline(&state), "Turn: White");
        assert!(!is_game_over(&state));
    }
}
