//! Side colors and the pawn geometry that depends on them.

use std::fmt;
use std::ops::Not;

use crate::direction::Direction;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// One pawn step toward the opponent: White moves toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> Direction {
        match self {
            Color::White => Direction::UP,
            Color::Black => Direction::DOWN,
        }
    }

    /// Row from which this color's pawns may double-push.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
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

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::direction::Direction;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn pawn_direction_points_at_opponent() {
        assert_eq!(Color::White.pawn_direction(), Direction::UP);
        assert_eq!(Color::Black.pawn_direction(), Direction::DOWN);
        assert_eq!(Color::White.pawn_direction().offset(), -8);
        assert_eq!(Color::Black.pawn_direction().offset(), 8);
    }

    #[test]
    fn start_rows() {
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Color::ALL.len(), Color::COUNT);
        assert_eq!(Color::ALL[Color::Black.index()], Color::Black);
    }
}
