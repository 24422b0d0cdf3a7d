//! Direction offsets expressed as linear-index deltas.

use crate::square::{col_of, row_of};

/// Interior square used to decode an offset into a row/column delta.
///
/// Row 4, column 4: every offset the generators use (at most two rows and two
/// columns) lands on the board without wrapping from here.
const PROBE: i8 = 36;

/// A signed offset added to a square index.
///
/// Offsets compose with plain integer arithmetic, so a knight jump is
/// `UP.times(2).plus(LEFT)`. The 2-D meaning needed for edge detection is
/// recovered with [`Direction::delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction(i8);

impl Direction {
    /// Toward row 0 (White's forward).
    pub const UP: Direction = Direction(-8);
    /// Toward row 7 (Black's forward).
    pub const DOWN: Direction = Direction(8);
    /// Toward column 0.
    pub const LEFT: Direction = Direction(-1);
    /// Toward column 7.
    pub const RIGHT: Direction = Direction(1);

    pub const UP_LEFT: Direction = Self::UP.plus(Self::LEFT);
    pub const UP_RIGHT: Direction = Self::UP.plus(Self::RIGHT);
    pub const DOWN_LEFT: Direction = Self::DOWN.plus(Self::LEFT);
    pub const DOWN_RIGHT: Direction = Self::DOWN.plus(Self::RIGHT);

    /// Raw linear offset.
    #[inline]
    pub const fn offset(self) -> i8 {
        self.0
    }

    /// Sum of two offsets.
    #[inline]
    pub const fn plus(self, other: Direction) -> Direction {
        Direction(self.0 + other.0)
    }

    /// The offset repeated `n` times.
    #[inline]
    pub const fn times(self, n: i8) -> Direction {
        Direction(self.0 * n)
    }

    /// Decode this offset into `(row_delta, col_delta)`.
    ///
    /// Applies the offset to a fixed interior square and diffs the resulting
    /// row and column against the square's own.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        let target = PROBE + self.0;
        (row_of(target) - row_of(PROBE), col_of(target) - col_of(PROBE))
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn primitive_deltas() {
        assert_eq!(Direction::UP.delta(), (-1, 0));
        assert_eq!(Direction::DOWN.delta(), (1, 0));
        assert_eq!(Direction::LEFT.delta(), (0, -1));
        assert_eq!(Direction::RIGHT.delta(), (0, 1));
    }

    #[test]
    fn diagonal_deltas() {
        assert_eq!(Direction::UP_LEFT.delta(), (-1, -1));
        assert_eq!(Direction::UP_RIGHT.delta(), (-1, 1));
        assert_eq!(Direction::DOWN_LEFT.delta(), (1, -1));
        assert_eq!(Direction::DOWN_RIGHT.delta(), (1, 1));
    }

    #[test]
    fn knight_composites_decode() {
        let up = Direction::UP;
        let left = Direction::LEFT;
        assert_eq!(up.times(2).plus(left).offset(), -17);
        assert_eq!(up.times(2).plus(left).delta(), (-2, -1));
        assert_eq!(up.plus(left.times(2)).delta(), (-1, -2));
        assert_eq!(Direction::DOWN.plus(Direction::RIGHT.times(2)).delta(), (1, 2));
        assert_eq!(Direction::DOWN.times(2).plus(Direction::RIGHT).delta(), (2, 1));
    }

    #[test]
    fn delta_is_stable_for_double_push() {
        assert_eq!(Direction::UP.times(2).delta(), (-2, 0));
        assert_eq!(Direction::DOWN.times(2).delta(), (2, 0));
    }
}
