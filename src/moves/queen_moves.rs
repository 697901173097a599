use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_can_step;
use crate::moves::rook_moves::rook_can_step;

/// Queen rule: the union of the rook and bishop rules from the same square.
#[inline]
pub fn queen_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    rook_can_step(color, from, to, board) || bishop_can_step(color, from, to, board)
}
