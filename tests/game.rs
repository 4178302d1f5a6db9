use pretty_assertions::assert_eq;
use shakh::chess::board::Board;
use shakh::chess::check::is_checkmate;
use shakh::chess::core::{Piece, PieceKind, Player, Square};
use shakh::error::Error;
use shakh::game::{
    handle_cell_click,
    headline,
    initial_state,
    is_game_over,
    renderable_cell,
    status_text,
    EndReason,
    GameState,
    Phase,
    Rules,
    Transition,
};

fn setup(placement: &str, turn: Player) -> GameState {
    GameState::from_board(
        Board::from_placement(placement).expect("valid placement"),
        turn,
        Rules::default(),
    )
}

/// Clicks on every cell in order and returns the final state with the last
/// transition.
fn clicks(state: &GameState, cells: &[(u8, u8)]) -> (GameState, Transition) {
    cells
        .iter()
        .fold((state.clone(), Transition::Ignored), |(state, _), &(row, col)| {
            handle_cell_click(&state, row, col).expect("cells are on the board")
        })
}

#[test]
fn opening_two_step_push() {
    let state = initial_state();
    assert_eq!(state.turn(), Player::Black);
    assert_eq!(headline(&state), "Turn: Black");

    let (state, transition) = clicks(&state, &[(1, 4), (3, 4)]);
    assert_eq!(
        transition,
        Transition::Moved {
            from: Square::new(1, 4).unwrap(),
            to: Square::new(3, 4).unwrap(),
            capture: false
        }
    );
    assert_eq!(state.turn(), Player::White);
    assert_eq!(state.checked(), None);
    assert!(!state.pending_check());
    assert_eq!(status_text(&state), None);
    assert!(!is_game_over(&state));
    assert_eq!(
        state.board().get(3, 4),
        Ok(Some(Piece::new(Player::Black, PieceKind::Pawn)))
    );
    assert_eq!(state.board().get(1, 4), Ok(None));
    assert_eq!(headline(&state), "Turn: White");
}

#[test]
fn turns_alternate() {
    let (state, _) = clicks(&initial_state(), &[(1, 4), (3, 4), (6, 3), (4, 3)]);
    assert_eq!(state.turn(), Player::Black);
    // Black pawn on e5 takes the White pawn on d4.
    let (state, transition) = clicks(&state, &[(3, 4), (4, 3)]);
    assert!(matches!(transition, Transition::Moved { capture: true, .. }));
    assert_eq!(
        state.board().to_string(),
        "rnbqkbnr/pppp1ppp/8/8/3p4/8/PPP1PPPP/RNBQKBNR"
    );
}

#[test]
fn clicks_out_of_turn_are_not_moves() {
    let state = initial_state();
    // White pawn: Black moves first.
    let (next, transition) = clicks(&state, &[(6, 4), (4, 4)]);
    assert_eq!(transition, Transition::Deselected);
    assert_eq!(next.board(), state.board());
    assert_eq!(next.turn(), Player::Black);
}

#[test]
fn non_destination_click_clears_selection() {
    let (state, _) = clicks(&initial_state(), &[(1, 4)]);
    assert_eq!(state.legal_destinations().len(), 2);
    // Three squares ahead is out of reach.
    let (state, transition) = clicks(&state, &[(4, 4)]);
    assert_eq!(transition, Transition::Deselected);
    assert_eq!(state.active_selection(), None);
    assert!(state.legal_destinations().is_empty());
    assert_eq!(state.turn(), Player::Black);
}

#[test]
fn selection_is_a_pure_function_of_board_and_square() {
    let state = initial_state();
    for square in Square::iter() {
        let (first, _) = state.select_square(square);
        let (second, _) = first.select_square(square);
        assert_eq!(first.legal_destinations(), second.legal_destinations());
        assert_eq!(first.active_selection(), second.active_selection());
    }
}

#[test]
fn king_capture_wins_without_check_phase() {
    // White to move although the Black king stands on an open file.
    let state = setup("4k3/8/8/8/8/8/8/4R2K", Player::White);
    assert_eq!(state.phase(), Phase::Playing);
    let (state, transition) = clicks(&state, &[(7, 4), (0, 4)]);
    assert_eq!(
        transition,
        Transition::Ended {
            winner: Player::White,
            reason: EndReason::KingCaptured
        }
    );
    assert_eq!(state.winner(), Some(Player::White));
    assert_eq!(state.checked(), None);
    assert!(is_game_over(&state));
    assert_eq!(
        status_text(&state),
        Some("Black lost (king captured)".to_string())
    );
    assert_eq!(headline(&state), "Black lost (king captured)");
    assert_eq!(state.board().king_square(Player::Black), None);
}

#[test]
fn clicks_after_game_over_are_ignored() {
    let (ended, _) = clicks(
        &setup("4k3/8/8/8/8/8/8/4R2K", Player::White),
        &[(7, 4), (0, 4)],
    );
    for square in Square::iter() {
        let (next, transition) = handle_cell_click(&ended, square.row(), square.col()).unwrap();
        assert_eq!(transition, Transition::Ignored);
        assert_eq!(next, ended);
    }
}

#[test]
fn two_checks_in_a_row_end_the_game() {
    let state = setup("4k3/8/8/8/8/8/r7/3QK3", Player::Black);
    let (state, transition) = clicks(&state, &[(6, 0), (6, 4)]);
    assert_eq!(transition, Transition::Check {
        player: Player::White
    });
    assert_eq!(status_text(&state), Some("Check!".to_string()));
    assert_eq!(headline(&state), "Check!");
    assert!(renderable_cell(&state, 7, 4)
        .unwrap()
        .is_king_in_check_highlight());

    let (state, transition) = clicks(&state, &[(7, 3), (0, 3)]);
    assert_eq!(
        transition,
        Transition::Ended {
            winner: Player::White,
            reason: EndReason::RepeatedCheck
        }
    );
    assert_eq!(
        status_text(&state),
        Some("Black lost (checkmate)".to_string())
    );
}

#[test]
fn mating_second_check_counts_as_repeated_check() {
    let state = setup("6k1/5ppp/8/8/8/8/r7/R3K3", Player::Black);
    let (state, transition) = clicks(&state, &[(6, 0), (6, 4)]);
    assert_eq!(transition, Transition::Check {
        player: Player::White
    });
    assert!(state.pending_check());

    // Back rank mate on a8 is also the second check in a row.
    let (state, transition) = clicks(&state, &[(7, 0), (0, 0)]);
    assert!(is_checkmate(state.board(), Player::Black));
    assert_eq!(
        transition,
        Transition::Ended {
            winner: Player::White,
            reason: EndReason::RepeatedCheck
        }
    );
    assert!(!state.pending_check());
    assert_eq!(state.checked(), Some(Player::Black));
    assert_eq!(
        status_text(&state),
        Some("Black lost (checkmate)".to_string())
    );
}

#[test]
fn quiet_move_resets_pending_check() {
    let state = setup("4k3/8/8/8/8/8/r7/3QK3", Player::Black);
    // Check, the king escapes, then a second check is not a repeated one.
    let (state, _) = clicks(&state, &[(6, 0), (6, 4)]);
    assert!(state.pending_check());
    let (state, transition) = clicks(&state, &[(7, 4), (6, 4)]);
    assert!(matches!(transition, Transition::Moved { capture: true, .. }));
    assert!(!state.pending_check());
    assert_eq!(status_text(&state), None);
    // Black king steps aside, the queen checks along the f-file.
    let (state, _) = clicks(&state, &[(0, 4), (0, 5)]);
    let (state, transition) = clicks(&state, &[(7, 3), (7, 5)]);
    assert_eq!(transition, Transition::Check {
        player: Player::Black
    });
    assert_eq!(state.winner(), None);
}

#[test]
fn checkmate_is_detected() {
    let state = setup("6k1/5ppp/8/8/8/8/8/R3K3", Player::White);
    let (state, transition) = clicks(&state, &[(7, 0), (0, 0)]);
    assert_eq!(
        transition,
        Transition::Ended {
            winner: Player::White,
            reason: EndReason::Checkmate
        }
    );
    assert_eq!(state.phase(), Phase::Ended(Player::White));
    assert!(renderable_cell(&state, 0, 6)
        .unwrap()
        .is_king_in_check_highlight());
}

#[test]
fn heuristic_can_be_disabled() {
    let rules = Rules {
        first_player: Player::Black,
        consecutive_check_ends_game: false,
    };
    let state = GameState::from_board(
        Board::from_placement("4k3/8/8/8/8/8/r7/3QK3").unwrap(),
        Player::Black,
        rules,
    );
    let (state, _) = clicks(&state, &[(6, 0), (6, 4), (7, 3), (0, 3)]);
    assert_eq!(state.phase(), Phase::Check(Player::Black));
    assert!(!is_game_over(&state));
}

#[test]
fn out_of_bounds_clicks() {
    let state = initial_state();
    for (row, col) in [(8, 0), (0, 8), (255, 3), (8, 8)] {
        assert_eq!(
            handle_cell_click(&state, row, col),
            Err(Error::OutOfBounds { row, col })
        );
        assert_eq!(
            renderable_cell(&state, row, col),
            Err(Error::OutOfBounds { row, col })
        );
    }
}

#[test]
fn renderable_cells_follow_selection() {
    let (state, _) = clicks(&initial_state(), &[(0, 6)]);
    for square in Square::iter() {
        let cell = renderable_cell(&state, square.row(), square.col()).unwrap();
        assert_eq!(cell.occupant, state.board().at(square));
        assert_eq!(cell.is_selected(), square == Square::new(0, 6).unwrap());
        assert_eq!(
            cell.is_legal_destination(),
            [(2, 5), (2, 7)]
                .iter()
                .any(|&(row, col)| square == Square::new(row, col).unwrap())
        );
        assert!(!cell.is_capture());
        assert!(!cell.is_king_in_check_highlight());
    }
}
