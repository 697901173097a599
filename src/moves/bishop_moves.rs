use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::{deltas, destination_is_open, path_is_clear};

/// Bishop rule: strict diagonal (`|dx| == |dy| > 0`), nothing in between,
/// target empty or enemy.
pub fn bishop_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dx, dy) = deltas(from, to);
    if dx == 0 || dx.abs() != dy.abs() {
        return false;
    }
    destination_is_open(board, to, color) && path_is_clear(board, from, to)
}
