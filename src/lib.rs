//! Rule engine for a two-player chess-like game played by clicking on cells of
//! an 8×8 board.
//!
//! The crate is split into two layers:
//!
//! - [`chess`] knows the board and the rules: how each piece moves, whether a
//!   king is in check and whether that check is a checkmate.
//! - [`game`] drives a single game: turn order, piece selection, check
//!   tracking and win detection. It is a pure state machine over immutable
//!   [`game::GameState`] values, so any front-end can sit on top of it.
//!
//! [`session`] is one such front-end: a line-oriented text protocol used by
//! the `shakh` binary.

// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::private_doc_tests,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]

pub mod chess;
pub mod error;
pub mod game;
pub mod session;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version and the build type on startup.
pub fn print_engine_info() {
    println!("Shakh rule engine {}", engine_version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
