//! Outcomes reported by the board to the turn driver.

/// Classification of a position for the color about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStatus {
    /// At least one legal move exists.
    Continue,
    /// No legal move and the king is attacked.
    Checkmate,
    /// No legal move and the king is not attacked.
    Stalemate,
}

/// Why a proposed move would be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    EmptyOrigin,
    NotYourPiece,
    /// The piece cannot reach the destination (geometry, blockers, own piece on target).
    IllegalStep,
    LeavesKingInCheck,
}
