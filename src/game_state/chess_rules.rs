//! Canonical chess-rule constants.
//!
//! The standard starting position: the back-rank order from file A to file H,
//! and the grid rows the two back ranks occupy. Pawn rows come from
//! `Color::pawn_start_row`.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order, file A first. Both colors use the same order.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid row of Black's back rank (rank 8).
pub const BLACK_BACK_ROW: usize = 0;

/// Grid row of White's back rank (rank 1).
pub const WHITE_BACK_ROW: usize = 7;
