//! Knight destinations.

use crate::bitboard::Bitboard;

use super::tables::knight_table;

/// Union of knight jumps from every square in `sources`.
#[inline]
pub fn knight_moves(sources: Bitboard) -> Bitboard {
    knight_table().moves(sources)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::bitboard::Bitboard;
    use crate::square::Square;

    #[test]
    fn center_has_eight() {
        assert_eq!(knight_moves(Square::new(4, 4).bitboard()).count(), 8);
    }

    #[test]
    fn corner_has_two() {
        assert_eq!(knight_moves(Square::new(7, 7).bitboard()).count(), 2);
    }

    #[test]
    fn column_zero_never_reaches_far_columns() {
        for row in 0..8 {
            let moves = knight_moves(Square::new(row, 0).bitboard());
            assert!((moves & (Bitboard::col_mask(6) | Bitboard::col_mask(7))).is_empty());
        }
    }
}
