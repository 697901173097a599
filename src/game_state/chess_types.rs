//! Value types shared by the board, the movement rules, and the text helpers.
//!
//! Squares use `(x, y)` coordinates on the 8x8 grid: `x = 0` is file A and
//! `y = 0` is Black's back rank (rank 8), so `y = 7` is White's back rank.

use std::fmt;

use crate::chess_errors::ChessErrors;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward `y = 0`.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns start and may double-step.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
}

/// An immutable (color, kind) pair. Moving a piece copies it to a new square;
/// its fields never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color != color
    }
}

/// A square on the 8x8 grid. Both coordinates are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Range-checked constructor.
    pub fn new(x: u8, y: u8) -> Result<Self, ChessErrors> {
        if x > 7 || y > 7 {
            return Err(ChessErrors::InvalidFileOrRank((x, y)));
        }
        Ok(Self { x, y })
    }

    /// Constructor for coordinates known to be in range (literals, loop indices).
    ///
    /// Panics on out-of-range input, including in const contexts.
    pub const fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < 8 && y < 8, "square coordinates out of range");
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Square displaced by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row from `y = 0`, each row from `x = 0`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|y| (0..8u8).map(move |x| Square { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_out_of_range_coordinates() {
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessErrors::InvalidFileOrRank((8, 0)))
        ));
        assert!(Square::new(0, 9).is_err());
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::from_xy(0, 7);
        assert_eq!(corner.offset(1, -1), Some(Square::from_xy(1, 6)));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
    }

    #[test]
    fn all_squares_scan_rows_then_files() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::from_xy(0, 0));
        assert_eq!(squares[1], Square::from_xy(1, 0));
        assert_eq!(squares[8], Square::from_xy(0, 1));
        assert_eq!(squares[63], Square::from_xy(7, 7));
    }

    #[test]
    fn pawn_direction_follows_color() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
    }
}
