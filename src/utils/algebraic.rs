//! Square conversions for coordinate text.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and grid squares.
//! Files `a`-`h` map to `x = 0..=7`; rank `8` maps to `y = 0` and rank `1` to
//! `y = 7`. Letters are accepted in either case.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert coordinate text (for example: "e4" or "E4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(square.to_owned());

    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Square::new(file - b'a', b'8' - rank)
}

/// Convert a square to lowercase coordinate text (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.x());
    let rank_char = char::from(b'8' - square.y());
    format!("{file_char}{rank_char}")
}
