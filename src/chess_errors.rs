//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate. Illegal moves are
//! not errors: they are ordinary `false` / `Some(MoveRejection)` results. The
//! variants here cover malformed text handed to the parsing helpers, console
//! I/O failures, and corrupted board state.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidFENtoken`, ...) are
//!   recoverable and suitable for presenting to end users.
//! - `BoardDoesNotContainAKing` means the grid no longer holds a king for one
//!   side. No rule in this engine removes a king, so this indicates a bug in
//!   board setup or a future rule extension and must not be recovered from.

use std::fmt;

use crate::game_state::chess_types::Color;

/// Unified error type for the chess engine.
#[derive(Debug)]
pub enum ChessErrors {
    /// The board has no king of the given color.
    ///
    /// Fatal: the position is corrupted and no legality question about it can
    /// be answered.
    BoardDoesNotContainAKing(Color),

    /// Invalid file or rank indices were provided (outside 0..=7).
    ///
    /// Payload: (file_index, rank_index) zero-based.
    InvalidFileOrRank((u8, u8)),

    /// A coordinate string (for example `"e2"`) failed to parse.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// Found an unexpected character while parsing a placement string.
    InvalidFENtoken(char),

    /// Placement string had malformed structure (wrong rank count or width).
    ///
    /// Payload: the original offending string for diagnostics.
    InvalidFENstringForm(String),

    /// Reading from or writing to the console failed.
    ConsoleIo(std::io::Error),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::BoardDoesNotContainAKing(color) => {
                write!(f, "no {color} king found on the board")
            }
            ChessErrors::InvalidFileOrRank((file, rank)) => {
                write!(f, "file/rank ({file}, {rank}) is off the board")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid square: {text:?}")
            }
            ChessErrors::InvalidFENtoken(ch) => write!(f, "invalid placement character '{ch}'"),
            ChessErrors::InvalidFENstringForm(text) => {
                write!(f, "malformed placement string: {text:?}")
            }
            ChessErrors::ConsoleIo(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl std::error::Error for ChessErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChessErrors::ConsoleIo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::ConsoleIo(err)
    }
}
