use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::{destination_is_open, path_is_clear};

/// Rook rule: along a rank or file, nothing in between, target empty or enemy.
pub fn rook_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if from.x() != to.x() && from.y() != to.y() {
        return false;
    }
    destination_is_open(board, to, color) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::rook_can_step;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn rook_on_open_board_reaches_fourteen_squares() {
        let mut board = Board::empty();
        board.place(sq("d4"), Some(Piece::new(Color::White, PieceKind::Rook)));
        let reachable = Square::all()
            .filter(|to| rook_can_step(Color::White, sq("d4"), *to, &board))
            .count();
        assert_eq!(reachable, 14);
    }

    #[test]
    fn rook_blocked_regardless_of_target() {
        let mut board = Board::empty();
        board.place(sq("a1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.place(sq("a4"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.place(sq("a7"), Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert!(rook_can_step(Color::White, sq("a1"), sq("a4"), &board));
        assert!(!rook_can_step(Color::White, sq("a1"), sq("a5"), &board));
        assert!(!rook_can_step(Color::White, sq("a1"), sq("a7"), &board));
    }

    #[test]
    fn rook_refuses_diagonals_and_null_moves() {
        let mut board = Board::empty();
        board.place(sq("c3"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(!rook_can_step(Color::Black, sq("c3"), sq("d4"), &board));
        assert!(!rook_can_step(Color::Black, sq("c3"), sq("c3"), &board));
    }
}
