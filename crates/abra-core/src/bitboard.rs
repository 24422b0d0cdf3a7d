//! Bitboards: a 64-bit set of squares, bit `i` standing for square `i`.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::square::Square;

/// A set of squares packed into a `u64`.
///
/// Row 0 occupies the low byte, so shifting left by 8 moves every square one
/// row toward row 7 (White's back rank).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares.
    pub const FULL: Bitboard = Bitboard(!0);

    // Row masks (row 0 = Black's back rank)
    pub const ROW_0: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const ROW_1: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const ROW_2: Bitboard = Bitboard(0x0000_0000_00FF_0000);
    pub const ROW_3: Bitboard = Bitboard(0x0000_0000_FF00_0000);
    pub const ROW_4: Bitboard = Bitboard(0x0000_00FF_0000_0000);
    pub const ROW_5: Bitboard = Bitboard(0x0000_FF00_0000_0000);
    pub const ROW_6: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const ROW_7: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Row masks indexed by row.
    pub const ROWS: [Bitboard; 8] = [
        Self::ROW_0, Self::ROW_1, Self::ROW_2, Self::ROW_3,
        Self::ROW_4, Self::ROW_5, Self::ROW_6, Self::ROW_7,
    ];

    // Column masks (column 0 = a-file)
    pub const COL_0: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const COL_7: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Create a bitboard from raw bits.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// Raw bits.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Build a bitboard from an arbitrary collection of squares.
    pub fn from_squares(squares: impl IntoIterator<Item = Square>) -> Bitboard {
        squares.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb.with(sq))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a copy with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Return a copy with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Mask of every square on `row`.
    #[inline]
    pub const fn row_mask(row: u8) -> Bitboard {
        Self::ROWS[row as usize]
    }

    /// Mask of every square on `col`.
    #[inline]
    pub const fn col_mask(col: u8) -> Bitboard {
        Bitboard(Self::COL_0.0 << col)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Whole-board shift toward row 7. Bits pushed past square 63 are lost.
impl Shl<u8> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, rhs: u8) -> Bitboard {
        Bitboard(self.0 << rhs)
    }
}

/// Whole-board shift toward row 0. Bits pushed past square 0 are lost.
impl Shr<u8> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, rhs: u8) -> Bitboard {
        Bitboard(self.0 >> rhs)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        Bitboard::from_squares(iter)
    }
}

/// Yields the set squares in ascending index order.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

// Row 0 printed first, matching the index layout.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..8 {
            write!(f, "  {} ", 8 - row)?;
            for col in 0..8 {
                if (self.0 >> (row * 8 + col)) & 1 == 1 {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
