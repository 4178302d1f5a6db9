//! Implementation of the board, movement rules and check detection.

pub mod board;
pub mod check;
pub mod core;
pub mod movegen;
