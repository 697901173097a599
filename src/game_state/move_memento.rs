use crate::game_state::chess_types::{Piece, Square};

/// Single undo record for `Board::apply_trial` / `Board::revert`.
///
/// Holds exactly what is needed to put one move back: where the piece came
/// from, where it went, and what stood on the destination before. Not `Clone`:
/// reverting consumes the memento, so a move cannot be undone twice.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a trial move stays on the board unless it is reverted"]
pub struct MoveMemento {
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl MoveMemento {
    pub(crate) fn new(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Self { from, to, captured }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// Piece that occupied `to` before the move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}
