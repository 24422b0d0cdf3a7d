//! Errors raised when a square or a host position is built from raw parts.
//!
//! Move generation itself is total; these only guard the boundary.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// A linear index that does not name a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("square index {index} is outside 0..64")]
    OutOfRange {
        /// The rejected index.
        index: u8,
    },
}

/// Inconsistent occupancy or en passant state handed to [`Position::new`](crate::Position::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A square is claimed by both sides.
    #[error("white and black occupancy overlap on {:#018x}", .overlap.inner())]
    OverlappingSides {
        /// Squares present in both side bitboards.
        overlap: Bitboard,
    },
    /// The en passant target holds a piece.
    #[error("en passant target {square} is occupied")]
    EnPassantOccupied {
        /// The offending target.
        square: Square,
    },
    /// The en passant target is not a square a double push passes over.
    #[error("en passant target {square} is not on row 2 or row 5")]
    EnPassantRow {
        /// The offending target.
        square: Square,
    },
}
