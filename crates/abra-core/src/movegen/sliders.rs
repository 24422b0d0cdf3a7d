//! Sliding pieces: bishop, rook and queen rays.

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::position::Position;

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::DOWN_RIGHT,
    Direction::DOWN_LEFT,
    Direction::UP_RIGHT,
    Direction::UP_LEFT,
];

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::DOWN,
    Direction::UP,
    Direction::RIGHT,
    Direction::LEFT,
];

/// Walk every ray in `directions` from every source square.
///
/// Each ray includes the first occupied square it meets, of either color, and
/// nothing beyond it.
fn ray_moves(sources: Bitboard, occupied: Bitboard, directions: &[Direction]) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    for src in sources {
        for dir in directions {
            let (dr, dc) = dir.delta();
            let mut cursor = src;
            while let Some(next) = cursor.translate(dr, dc) {
                moves = moves.with(next);
                if occupied.contains(next) {
                    break;
                }
                cursor = next;
            }
        }
    }
    moves
}

/// Diagonal rays from every square in `sources`.
pub fn bishop_moves(pos: &Position, sources: Bitboard) -> Bitboard {
    ray_moves(sources, pos.occupied(), &BISHOP_DIRECTIONS)
}

/// Orthogonal rays from every square in `sources`.
pub fn rook_moves(pos: &Position, sources: Bitboard) -> Bitboard {
    ray_moves(sources, pos.occupied(), &ROOK_DIRECTIONS)
}

/// Bishop and rook rays combined.
#[inline]
pub fn queen_moves(pos: &Position, sources: Bitboard) -> Bitboard {
    bishop_moves(pos, sources) | rook_moves(pos, sources)
}
