//! Pawn pushes, captures and attack sets.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::direction::Direction;
use crate::position::Position;

use super::tables::pawn_attack_table;

/// Squares the pawns in `sources` of `color` may move to.
///
/// Includes single pushes, double pushes from the start row when both squares
/// ahead are vacant, and diagonal steps onto any occupied square or onto the
/// en passant target. The owner of a captured piece is not checked.
pub fn pawn_moves(pos: &Position, sources: Bitboard, color: Color) -> Bitboard {
    let dir = color.pawn_direction();
    let (push_dr, push_dc) = dir.delta();
    let (left_dr, left_dc) = dir.plus(Direction::LEFT).delta();
    let (right_dr, right_dc) = dir.plus(Direction::RIGHT).delta();
    let start_row = color.pawn_start_row();
    let vacant = pos.vacant();
    let en_passant = pos.en_passant();

    let mut moves = Bitboard::EMPTY;
    for src in sources {
        // Pushes
        if let Some(single) = src.translate(push_dr, push_dc) {
            if vacant.contains(single) {
                moves = moves.with(single);
                if src.row() == start_row {
                    if let Some(double) = single.translate(push_dr, push_dc) {
                        if vacant.contains(double) {
                            moves = moves.with(double);
                        }
                    }
                }
            }
        }

        // Captures, en passant included; translate drops the edge-file cases
        for (dr, dc) in [(left_dr, left_dc), (right_dr, right_dc)] {
            if let Some(target) = src.translate(dr, dc) {
                if !vacant.contains(target) || en_passant == Some(target) {
                    moves = moves.with(target);
                }
            }
        }
    }
    moves
}

/// Squares threatened by the pawns in `sources` of `color`, whatever stands there.
pub fn pawn_attacks(sources: Bitboard, color: Color) -> Bitboard {
    // One whole-board row shift toward the opponent, then lateral neighbours.
    let advanced = match color {
        Color::White => sources >> 8,
        Color::Black => sources << 8,
    };
    pawn_attack_table().moves(advanced)
}
