use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::{deltas, destination_is_open};

/// Knight rule: an (1, 2) or (2, 1) jump onto an empty or enemy square.
/// Nothing in between can block it.
pub fn knight_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dx, dy) = deltas(from, to);
    let (ax, ay) = (dx.abs(), dy.abs());
    ((ax == 1 && ay == 2) || (ax == 2 && ay == 1)) && destination_is_open(board, to, color)
}
