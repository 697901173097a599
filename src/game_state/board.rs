//! Board state and the move-legality / game-termination engine.
//!
//! `Board` owns the 8x8 grid and is mutated in place for the whole game. Every
//! legality question goes through the same path: apply a trial move, look at
//! the mover's king, then keep or revert the trial. Real moves
//! (`attempt_legal_move`), rejection reasons, legal-move listing and
//! checkmate/stalemate classification all share it, so they can never
//! disagree about what "legal" means.
//!
//! Trials must be strictly nested: never apply a second trial while an
//! unreverted `MoveMemento` from an earlier one is still pending.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BACK_RANK, BLACK_BACK_ROW, WHITE_BACK_ROW};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::move_memento::MoveMemento;
use crate::game_state::position_status::{MoveRejection, PositionStatus};
use crate::moves::move_rules::can_step;

/// The 8x8 grid of optional pieces, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard initial position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (x, kind) in BACK_RANK.into_iter().enumerate() {
            board.grid[BLACK_BACK_ROW][x] = Some(Piece::new(Color::Black, kind));
            board.grid[WHITE_BACK_ROW][x] = Some(Piece::new(Color::White, kind));
            for color in [Color::Black, Color::White] {
                let pawn_row = color.pawn_start_row() as usize;
                board.grid[pawn_row][x] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Board with no pieces, for setting up arbitrary positions.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.y() as usize][square.x() as usize]
    }

    /// Put `piece` (or nothing) on `square`, returning what was there.
    ///
    /// Setup only: no rule checking.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.grid[square.y() as usize][square.x() as usize],
            piece,
        )
    }

    /// Every occupied square with its piece, in `Square::all` order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Square of `color`'s king.
    ///
    /// A missing king means the position is corrupted; the error is fatal and
    /// callers propagate it rather than default.
    pub fn king_square(&self, color: Color) -> Result<Square, ChessErrors> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied_squares()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
            .ok_or(ChessErrors::BoardDoesNotContainAKing(color))
    }

    /// True if any piece of the other color can step onto `color`'s king.
    pub fn is_king_in_check(&self, color: Color) -> Result<bool, ChessErrors> {
        let king = self.king_square(color)?;
        Ok(self
            .occupied_squares()
            .filter(|(_, piece)| piece.is_enemy_of(color))
            .any(|(square, piece)| can_step(piece, square, king, self)))
    }

    /// Move the piece on `from` to `to` if it belongs to `color` and its
    /// movement rule allows the step. Own-king safety is not checked.
    ///
    /// On success the grid is mutated and the returned memento undoes it; on
    /// `None` the grid is untouched.
    pub fn apply_trial(&mut self, from: Square, to: Square, color: Color) -> Option<MoveMemento> {
        let piece = self.piece_at(from)?;
        if piece.color != color || !can_step(piece, from, to, self) {
            return None;
        }
        let captured = self.place(to, Some(piece));
        self.place(from, None);
        Some(MoveMemento::new(from, to, captured))
    }

    /// Undo the trial recorded by `memento`. The board must not have changed
    /// since that trial was applied.
    pub fn revert(&mut self, memento: MoveMemento) {
        let moved = self.place(memento.to(), memento.captured());
        self.place(memento.from(), moved);
    }

    /// Make the move if it is legal for `color`, including own-king safety.
    ///
    /// Returns `Ok(true)` with the move committed, or `Ok(false)` with the
    /// board unchanged.
    pub fn attempt_legal_move(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<bool, ChessErrors> {
        match self.apply_trial(from, to, color) {
            Some(memento) => self.settle_trial(memento, color, true),
            None => Ok(false),
        }
    }

    /// Why `attempt_legal_move(from, to, color)` would refuse, or `None` if it
    /// would accept. Leaves the board as it found it.
    pub fn move_rejection(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<Option<MoveRejection>, ChessErrors> {
        let Some(piece) = self.piece_at(from) else {
            return Ok(Some(MoveRejection::EmptyOrigin));
        };
        if piece.color != color {
            return Ok(Some(MoveRejection::NotYourPiece));
        }
        let Some(memento) = self.apply_trial(from, to, color) else {
            return Ok(Some(MoveRejection::IllegalStep));
        };
        if self.settle_trial(memento, color, false)? {
            Ok(None)
        } else {
            Ok(Some(MoveRejection::LeavesKingInCheck))
        }
    }

    /// Classify the position for `color`, the side about to move.
    ///
    /// Tries every (origin, destination) pair through the trial/revert path
    /// and stops at the first move that leaves the king safe. The grid is
    /// restored before returning.
    pub fn classify(&mut self, color: Color) -> Result<PositionStatus, ChessErrors> {
        for from in Square::all() {
            for to in Square::all() {
                if let Some(memento) = self.apply_trial(from, to, color) {
                    if self.settle_trial(memento, color, false)? {
                        return Ok(PositionStatus::Continue);
                    }
                }
            }
        }

        if self.is_king_in_check(color)? {
            Ok(PositionStatus::Checkmate)
        } else {
            Ok(PositionStatus::Stalemate)
        }
    }

    /// Every (from, to) pair `attempt_legal_move` would accept for `color`.
    pub fn legal_moves(&mut self, color: Color) -> Result<Vec<(Square, Square)>, ChessErrors> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if self.piece_at(from).map_or(true, |piece| piece.color != color) {
                continue;
            }
            for to in Square::all() {
                if let Some(memento) = self.apply_trial(from, to, color) {
                    if self.settle_trial(memento, color, false)? {
                        moves.push((from, to));
                    }
                }
            }
        }
        Ok(moves)
    }

    /// Decide an applied trial: `Ok(true)` if `color`'s king is safe.
    ///
    /// The trial is reverted unless it is safe and `keep_if_safe` is set. On a
    /// missing-king error it is reverted before the error is returned.
    fn settle_trial(
        &mut self,
        memento: MoveMemento,
        color: Color,
        keep_if_safe: bool,
    ) -> Result<bool, ChessErrors> {
        let in_check = self.is_king_in_check(color);
        if !(keep_if_safe && matches!(in_check, Ok(false))) {
            self.revert(memento);
        }
        in_check.map(|attacked| !attacked)
    }
}
