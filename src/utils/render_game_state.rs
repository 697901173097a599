//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the grid, rank 8 on top, with file
//! letters above and below and rank numbers on both sides. `render_board`
//! prints plain glyphs; `render_board_colored` adds an ANSI checkerboard with
//! a separate foreground color per side.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::fen_generator::piece_to_fen_char;

/// Glyph set used for pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceStyle {
    #[default]
    Unicode,
    /// FEN letters, upper case for White.
    Ascii,
}

pub fn render_board(board: &Board, style: PieceStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..8u8 {
        let rank = char::from(b'8' - y);
        out.push(rank);
        out.push(' ');

        for x in 0..8u8 {
            match board.piece_at(Square::from_xy(x, y)) {
                Some(piece) => out.push(piece_glyph(piece, style)),
                None => out.push('·'),
            }

            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_LIGHT_SQUARE: &str = "\x1b[47m";
const ANSI_DARK_SQUARE: &str = "\x1b[40m";
const ANSI_WHITE_PIECE: &str = "\x1b[33m";
const ANSI_BLACK_PIECE: &str = "\x1b[34m";

/// Render with ANSI colors: alternating square backgrounds (a8 is light) and
/// yellow White pieces, blue Black pieces.
pub fn render_board_colored(board: &Board, style: PieceStyle) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for y in 0..8u8 {
        let rank = char::from(b'8' - y);
        out.push(rank);
        out.push(' ');

        for x in 0..8u8 {
            out.push_str(square_background(x, y));
            match board.piece_at(Square::from_xy(x, y)) {
                Some(piece) => {
                    out.push_str(piece_foreground(piece.color));
                    out.push(' ');
                    out.push(piece_glyph(piece, style));
                    out.push(' ');
                }
                None => out.push_str("   "),
            }
        }

        out.push_str(ANSI_RESET);
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn square_background(x: u8, y: u8) -> &'static str {
    if (x + y) % 2 == 0 {
        ANSI_LIGHT_SQUARE
    } else {
        ANSI_DARK_SQUARE
    }
}

fn piece_foreground(color: Color) -> &'static str {
    match color {
        Color::White => ANSI_WHITE_PIECE,
        Color::Black => ANSI_BLACK_PIECE,
    }
}

fn piece_glyph(piece: Piece, style: PieceStyle) -> char {
    match style {
        PieceStyle::Ascii => piece_to_fen_char(piece),
        PieceStyle::Unicode => piece_to_unicode(piece),
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_board_colored, PieceStyle};
    use crate::game_state::board::Board;

    #[test]
    fn ascii_render_of_start_position() {
        let rendered = render_board(&Board::new(), PieceStyle::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn unicode_render_marks_colors() {
        let rendered = render_board(&Board::new(), PieceStyle::Unicode);
        assert!(rendered.contains("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8"));
        assert!(rendered.contains("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1"));
    }

    #[test]
    fn colored_render_alternates_squares_and_piece_colors() {
        let rendered = render_board_colored(&Board::new(), PieceStyle::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   a  b  c  d  e  f  g  h");
        assert!(lines[1].starts_with("8 \x1b[47m\x1b[34m r \x1b[40m\x1b[34m n "));
        assert!(lines[1].ends_with("\x1b[0m 8"));
        assert!(lines[4].starts_with("5 \x1b[40m   \x1b[47m   "));
        assert!(lines[8].starts_with("1 \x1b[40m\x1b[33m R \x1b[47m\x1b[33m N "));
        assert_eq!(lines[1].matches("\x1b[47m").count(), 4);
        assert_eq!(lines[1].matches("\x1b[40m").count(), 4);
    }
}
