//! Placement-text-to-Board parser.
//!
//! Reads the piece-placement field of Forsyth-Edwards Notation: eight ranks
//! separated by `/`, rank 8 first, upper case for White. The first rank of the
//! text is grid row `y = 0`. Side to move, castling, en passant and clocks are
//! not part of this engine's state and are not accepted here.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let malformed = || ChessErrors::InvalidFENstringForm(placement.to_owned());

    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed());
    }

    let mut board = Board::empty();

    for (y, rank_str) in ranks.iter().enumerate() {
        let mut x = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                x += empty_count as u8;
                if x > 8 {
                    return Err(malformed());
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let square = Square::new(x, y as u8).map_err(|_| malformed())?;
            board.place(square, Some(piece));
            x += 1;
        }

        if x != 8 {
            return Err(malformed());
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
