use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::{deltas, destination_is_open};

/// King rule: one square in any direction onto an empty or enemy square.
/// No castling.
pub fn king_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dx, dy) = deltas(from, to);
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0) && destination_is_open(board, to, color)
}

#[cfg(test)]
mod tests {
    use super::king_can_step;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn king_steps_once_in_any_direction() {
        let mut board = Board::empty();
        board.place(sq("e4"), Some(Piece::new(Color::White, PieceKind::King)));
        let reachable = Square::all()
            .filter(|to| king_can_step(Color::White, sq("e4"), *to, &board))
            .count();
        assert_eq!(reachable, 8);
        assert!(!king_can_step(Color::White, sq("e4"), sq("e6"), &board));
        assert!(!king_can_step(Color::White, sq("e4"), sq("e4"), &board));
    }

    #[test]
    fn king_in_corner_has_three_squares() {
        let mut board = Board::empty();
        board.place(sq("h8"), Some(Piece::new(Color::Black, PieceKind::King)));
        let reachable = Square::all()
            .filter(|to| king_can_step(Color::Black, sq("h8"), *to, &board))
            .count();
        assert_eq!(reachable, 3);
    }
}
