//! Errors reported by the rule engine.
//!
//! The engine has no I/O, so the only real fault class is a caller crossing
//! the board limits. The remaining variants come from parsing textual board
//! placements.

use thiserror::Error;

use crate::chess::core::BOARD_WIDTH;

/// Failures of the rule engine API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row or column is outside `0..BOARD_WIDTH`.
    #[error("square ({row}, {col}) is outside the board: both coordinates should be within 0..{BOARD_WIDTH}")]
    OutOfBounds {
        #[allow(missing_docs)]
        row: u8,
        #[allow(missing_docs)]
        col: u8,
    },
    /// Piece symbol is not one of "KQRBNPkqrbnp".
    #[error("piece symbol should be within \"KQRBNPkqrbnp\", got '{0}'")]
    InvalidSymbol(char),
    /// Board placement string has the wrong shape.
    #[error("incorrect placement: {0}")]
    InvalidPlacement(String),
}

/// Shorthand for results produced by the rule engine.
pub type Result<T> = std::result::Result<T, Error>;
