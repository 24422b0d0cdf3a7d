//! Host view of a position: per-side occupancy and the en passant target.
//!
//! This is all the generators read. Piece identities, castling rights and
//! move history stay with whoever owns the game; they hand in a source
//! bitboard per piece kind and get a destination bitboard back.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::PositionError;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Occupancy and en passant state of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Squares held by each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    /// Square a pawn may capture onto en passant, if any.
    en_passant: Option<Square>,
}

impl Position {
    /// Build a position, rejecting overlapping sides and impossible en
    /// passant targets.
    pub fn new(white: Bitboard, black: Bitboard, en_passant: Option<Square>) -> Result<Position, PositionError> {
        let overlap = white & black;
        if overlap.is_nonempty() {
            return Err(PositionError::OverlappingSides { overlap });
        }
        if let Some(square) = en_passant {
            if square.row() != 2 && square.row() != 5 {
                return Err(PositionError::EnPassantRow { square });
            }
            if (white | black).contains(square) {
                return Err(PositionError::EnPassantOccupied { square });
            }
        }
        Ok(Position {
            sides: [white, black],
            en_passant,
        })
    }

    /// A board with no pieces and no en passant target.
    pub const fn empty() -> Position {
        Position {
            sides: [Bitboard::EMPTY; Color::COUNT],
            en_passant: None,
        }
    }

    /// Squares held by `color`.
    #[inline]
    pub const fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Squares held by either side.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::White.index()] | self.sides[Color::Black.index()]
    }

    /// Squares held by neither side.
    #[inline]
    pub fn vacant(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// See [`movegen::pawn_moves`].
    #[inline]
    pub fn pawn_moves(&self, sources: Bitboard, color: Color) -> Bitboard {
        movegen::pawn_moves(self, sources, color)
    }

    /// See [`movegen::pawn_attacks`].
    #[inline]
    pub fn pawn_attacks(&self, sources: Bitboard, color: Color) -> Bitboard {
        movegen::pawn_attacks(sources, color)
    }

    #[inline]
    pub fn knight_moves(&self, sources: Bitboard) -> Bitboard {
        movegen::knight_moves(sources)
    }

    #[inline]
    pub fn king_moves(&self, sources: Bitboard) -> Bitboard {
        movegen::king_moves(sources)
    }

    #[inline]
    pub fn bishop_moves(&self, sources: Bitboard) -> Bitboard {
        movegen::bishop_moves(self, sources)
    }

    #[inline]
    pub fn rook_moves(&self, sources: Bitboard) -> Bitboard {
        movegen::rook_moves(self, sources)
    }

    #[inline]
    pub fn queen_moves(&self, sources: Bitboard) -> Bitboard {
        movegen::queen_moves(self, sources)
    }

    /// Pseudo-legal destinations of `kind` pieces of `color` on `sources`.
    ///
    /// `color` only matters for pawns.
    pub fn moves(&self, kind: PieceKind, sources: Bitboard, color: Color) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawn_moves(sources, color),
            PieceKind::Knight => self.knight_moves(sources),
            PieceKind::Bishop => self.bishop_moves(sources),
            PieceKind::Rook => self.rook_moves(sources),
            PieceKind::Queen => self.queen_moves(sources),
            PieceKind::King => self.king_moves(sources),
        }
    }

    /// Squares threatened by `kind` pieces of `color` on `sources`.
    ///
    /// Same as [`Position::moves`] except for pawns, which threaten their
    /// diagonals regardless of occupancy and never threaten their push squares.
    pub fn attacks(&self, kind: PieceKind, sources: Bitboard, color: Color) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawn_attacks(sources, color),
            _ => self.moves(kind, sources, color),
        }
    }
}
