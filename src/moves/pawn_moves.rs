use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::deltas;

/// Pawn rule: one square forward onto an empty square, two from the start row
/// with both squares empty, or one diagonal step forward onto an enemy.
///
/// No en passant and no promotion.
pub fn pawn_can_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let forward = color.forward();
    let (dx, dy) = deltas(from, to);
    let target = board.piece_at(to);

    if dx == 0 && dy == forward {
        return target.is_none();
    }

    if dx == 0 && dy == 2 * forward && from.y() == color.pawn_start_row() {
        let passed_over_is_empty = from
            .offset(0, forward)
            .is_some_and(|between| board.piece_at(between).is_none());
        return passed_over_is_empty && target.is_none();
    }

    if dx.abs() == 1 && dy == forward {
        return target.is_some_and(|piece| piece.is_enemy_of(color));
    }

    false
}
