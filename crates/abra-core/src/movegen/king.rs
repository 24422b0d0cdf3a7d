//! King destinations.

use crate::bitboard::Bitboard;

use super::tables::king_table;

/// Union of single steps from every square in `sources`.
#[inline]
pub fn king_moves(sources: Bitboard) -> Bitboard {
    king_table().moves(sources)
}
