//! Board squares and the row/column arithmetic behind them.
//!
//! A square is a linear index `row * 8 + col`. Row 0 is Black's back rank and
//! row 7 White's; column 0 is the a-file. Every destination computed by the
//! move generators passes through [`in_bounds`] before it becomes a square
//! again, which is what keeps a piece on column 0 from wrapping onto the
//! previous row's column 7.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::error::SquareError;

/// Row of a linear index.
///
/// Defined for any index, including the off-board probes used by
/// [`Direction::delta`]; callers wanting a board row must pass `0..64`.
#[inline]
pub const fn row_of(index: i8) -> i8 {
    index.div_euclid(8)
}

/// Column of a linear index. Same precondition as [`row_of`].
#[inline]
pub const fn col_of(index: i8) -> i8 {
    index.rem_euclid(8)
}

/// Return `true` if both `row` and `col` lie in `0..8`.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    0 <= row && row < 8 && 0 <= col && col < 8
}

/// A square on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, both in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Create a square from a linear index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Linear index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Move by a row/column delta, or `None` if that leaves the board.
    #[inline]
    pub const fn translate(self, row_delta: i8, col_delta: i8) -> Option<Square> {
        let row = self.row() as i8 + row_delta;
        let col = self.col() as i8 + col_delta;
        if in_bounds(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Apply a linear direction offset with edge detection.
    ///
    /// Resolves the offset through [`Direction::delta`] on every call; loops
    /// over many squares should resolve the delta once and use
    /// [`Square::translate`].
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        let (row_delta, col_delta) = dir.delta();
        self.translate(row_delta, col_delta)
    }

    /// A bitboard holding only this square.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Square, SquareError> {
        Square::from_index(index).ok_or(SquareError::OutOfRange { index })
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

/// Algebraic name: index 0 is `a8`, index 63 is `h1`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{file}{}", 8 - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.0, self)
    }
}
