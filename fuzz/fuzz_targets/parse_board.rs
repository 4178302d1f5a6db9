#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use shakh::chess::board::Board;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Board::from_placement(s) {
            // Printing normalizes the input: parsing it again gives the same board.
            let printed = board.to_string();
            assert_eq!(Board::from_placement(&printed), Ok(board));
        }
    }
});
