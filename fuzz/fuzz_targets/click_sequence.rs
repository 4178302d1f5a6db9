#![no_main]
use libfuzzer_sys::fuzz_target;
use shakh::game::{handle_cell_click, initial_state, is_game_over, Transition};

// Every pair of bytes is a click. Clicks never panic and a finished game
// never changes.
fuzz_target!(|data: &[u8]| {
    let mut state = initial_state();
    for click in data.chunks_exact(2) {
        let Ok((next, transition)) = handle_cell_click(&state, click[0] % 9, click[1] % 9) else {
            continue;
        };
        if is_game_over(&state) {
            assert_eq!(transition, Transition::Ignored);
            assert_eq!(next, state);
        }
        state = next;
    }
});
