//! Piece-kind dispatch and helpers shared by the per-piece rules.
//!
//! Every rule answers pseudo-legality only: can a piece of this kind and color
//! reach `to` from `from` on the current board, with `to` empty or holding an
//! enemy. Whether the mover's own king ends up attacked is the board's
//! concern, not the rules'.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_can_step;
use crate::moves::king_moves::king_can_step;
use crate::moves::knight_moves::knight_can_step;
use crate::moves::pawn_moves::pawn_can_step;
use crate::moves::queen_moves::queen_can_step;
use crate::moves::rook_moves::rook_can_step;

/// Whether `piece`, standing on `from`, can step to `to`.
#[inline]
pub fn can_step(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_can_step(piece.color, from, to, board),
        PieceKind::Knight => knight_can_step(piece.color, from, to, board),
        PieceKind::Rook => rook_can_step(piece.color, from, to, board),
        PieceKind::Bishop => bishop_can_step(piece.color, from, to, board),
        PieceKind::Queen => queen_can_step(piece.color, from, to, board),
        PieceKind::King => king_can_step(piece.color, from, to, board),
    }
}

/// Signed `(dx, dy)` from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.x() as i8 - from.x() as i8,
        to.y() as i8 - from.y() as i8,
    )
}

/// True if `to` is empty or holds a piece of the other color.
#[inline]
pub fn destination_is_open(board: &Board, to: Square, mover: Color) -> bool {
    board
        .piece_at(to)
        .map_or(true, |piece| piece.is_enemy_of(mover))
}

/// True if every square strictly between `from` and `to` is empty.
///
/// `to` must lie on a rank, file or diagonal through `from`. Walks one square
/// at a time in the direction of the signs of `dx` and `dy`.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dx, dy) = deltas(from, to);
    let (step_x, step_y) = (dx.signum(), dy.signum());
    if step_x == 0 && step_y == 0 {
        return false;
    }

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_x, step_y) else {
            return false;
        };
        if next == to {
            return true;
        }
        if board.piece_at(next).is_some() {
            return false;
        }
        current = next;
    }
}
