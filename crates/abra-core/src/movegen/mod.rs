//! Pseudo-legal destination sets for every piece kind.
//!
//! Each generator maps a bitboard of source squares to the union of their
//! destinations. Nothing here checks king safety, pins, or whether a
//! destination holds a friendly piece; that filtering belongs to the caller.

mod king;
mod knights;
mod pawns;
mod sliders;
mod tables;

pub use self::king::king_moves;
pub use self::knights::knight_moves;
pub use self::pawns::{pawn_attacks, pawn_moves};
pub use self::sliders::{bishop_moves, queen_moves, rook_moves};
pub use self::tables::{JumpTable, warm_tables};

/// Offset patterns behind the jump tables, for hosts building their own.
pub mod offsets {
    pub use super::sliders::{BISHOP_DIRECTIONS as BISHOP, ROOK_DIRECTIONS as ROOK};
    pub use super::tables::{KING_OFFSETS as KING, KNIGHT_OFFSETS as KNIGHT, PAWN_ATTACK_OFFSETS as PAWN_ATTACK};
}
