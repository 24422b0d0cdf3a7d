//! Bitboard geometry and pseudo-legal move-set generation.

mod bitboard;
mod color;
mod direction;
mod error;
pub mod movegen;
mod piece_kind;
mod position;
mod square;

pub use bitboard::Bitboard;
pub use color::Color;
pub use direction::Direction;
pub use error::{PositionError, SquareError};
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::{Square, col_of, in_bounds, row_of};
