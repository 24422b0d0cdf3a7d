//! Position-independent jump tables for knights, kings and pawn attacks.

use std::sync::OnceLock;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::square::Square;

const UP: Direction = Direction::UP;
const DOWN: Direction = Direction::DOWN;
const LEFT: Direction = Direction::LEFT;
const RIGHT: Direction = Direction::RIGHT;

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    UP.times(2).plus(LEFT),
    UP.times(2).plus(RIGHT),
    DOWN.times(2).plus(LEFT),
    DOWN.times(2).plus(RIGHT),
    UP.plus(LEFT.times(2)),
    DOWN.plus(LEFT.times(2)),
    UP.plus(RIGHT.times(2)),
    DOWN.plus(RIGHT.times(2)),
];

pub const KING_OFFSETS: [Direction; 8] = [
    UP,
    DOWN,
    LEFT,
    RIGHT,
    Direction::UP_LEFT,
    Direction::UP_RIGHT,
    Direction::DOWN_LEFT,
    Direction::DOWN_RIGHT,
];

/// Lateral neighbours of a square already shifted one row forward.
pub const PAWN_ATTACK_OFFSETS: [Direction; 2] = [LEFT, RIGHT];

/// Per-square destinations for a fixed offset pattern.
#[derive(Clone, PartialEq, Eq)]
pub struct JumpTable {
    table: [Bitboard; 64],
}

impl JumpTable {
    /// Build the table for `offsets`.
    ///
    /// Each offset is decoded once; destinations that would leave the board
    /// are dropped. Offset order does not matter.
    pub fn build(offsets: &[Direction]) -> JumpTable {
        let deltas: Vec<(i8, i8)> = offsets.iter().map(|dir| dir.delta()).collect();
        let mut table = [Bitboard::EMPTY; 64];
        for sq in Square::all() {
            table[sq.index()] = deltas
                .iter()
                .filter_map(|&(dr, dc)| sq.translate(dr, dc))
                .collect();
        }
        JumpTable { table }
    }

    /// Destinations from a single square.
    #[inline]
    pub fn get(&self, sq: Square) -> Bitboard {
        self.table[sq.index()]
    }

    /// Union of the destinations of every square in `sources`.
    #[inline]
    pub fn moves(&self, sources: Bitboard) -> Bitboard {
        sources.fold(Bitboard::EMPTY, |acc, sq| acc | self.get(sq))
    }
}

static KNIGHT_TABLE: OnceLock<JumpTable> = OnceLock::new();
static KING_TABLE: OnceLock<JumpTable> = OnceLock::new();
static PAWN_ATTACK_TABLE: OnceLock<JumpTable> = OnceLock::new();

fn init(cell: &'static OnceLock<JumpTable>, name: &'static str, offsets: &[Direction]) -> &'static JumpTable {
    cell.get_or_init(|| {
        let table = JumpTable::build(offsets);
        debug!(
            table = name,
            offsets = offsets.len(),
            destinations = table.table.iter().map(|bb| bb.count()).sum::<u32>(),
            "built jump table"
        );
        table
    })
}

pub(crate) fn knight_table() -> &'static JumpTable {
    init(&KNIGHT_TABLE, "knight", &KNIGHT_OFFSETS)
}

pub(crate) fn king_table() -> &'static JumpTable {
    init(&KING_TABLE, "king", &KING_OFFSETS)
}

pub(crate) fn pawn_attack_table() -> &'static JumpTable {
    init(&PAWN_ATTACK_TABLE, "pawn attack", &PAWN_ATTACK_OFFSETS)
}

/// Build every jump table now instead of on first use.
///
/// Optional: the generators initialise their tables lazily and safely from
/// any thread. Hosts that want table construction out of their first search
/// call can run this at startup.
pub fn warm_tables() {
    knight_table();
    king_table();
    pawn_attack_table();
    debug!("jump tables ready");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilding_is_bit_identical() {
        for offsets in [&KNIGHT_OFFSETS[..], &KING_OFFSETS[..], &PAWN_ATTACK_OFFSETS[..]] {
            assert!(JumpTable::build(offsets) == JumpTable::build(offsets));
        }
    }

    #[test]
    fn cached_table_matches_fresh_build() {
        assert!(*knight_table() == JumpTable::build(&KNIGHT_OFFSETS));
        assert!(std::ptr::eq(knight_table(), knight_table()));
    }

    #[test]
    fn offset_order_is_irrelevant() {
        let mut reversed = KING_OFFSETS;
        reversed.reverse();
        assert!(JumpTable::build(&reversed) == JumpTable::build(&KING_OFFSETS));
    }

    #[test]
    fn knight_corner_and_center() {
        let table = JumpTable::build(&KNIGHT_OFFSETS);
        let corner = table.get(Square::new(0, 0));
        assert_eq!(corner, Bitboard::from_squares([Square::new(1, 2), Square::new(2, 1)]));
        assert_eq!(table.get(Square::new(4, 4)).count(), 8);
    }

    #[test]
    fn pawn_attack_table_is_lateral_neighbours() {
        let table = JumpTable::build(&PAWN_ATTACK_OFFSETS);
        assert_eq!(table.get(Square::new(3, 0)), Square::new(3, 1).bitboard());
        assert_eq!(table.get(Square::new(3, 7)), Square::new(3, 6).bitboard());
        assert_eq!(table.get(Square::new(3, 4)).count(), 2);
    }

    #[test]
    fn moves_unions_sources() {
        let table = JumpTable::build(&KING_OFFSETS);
        let a = Square::new(0, 0);
        let h = Square::new(7, 7);
        let sources = Bitboard::from_squares([a, h]);
        assert_eq!(table.moves(sources), table.get(a) | table.get(h));
        assert_eq!(table.moves(Bitboard::EMPTY), Bitboard::EMPTY);
    }

    #[test]
    fn warm_tables_populates_every_cell() {
        warm_tables();
        assert!(KNIGHT_TABLE.get().is_some());
        assert!(KING_TABLE.get().is_some());
        assert!(PAWN_ATTACK_TABLE.get().is_some());
    }
}
