//! Bitboard primitives, square coordinates and the piece-centric position.

mod bitboard;
mod position;
mod square;

pub use bitboard::Bitboard;
pub use position::{Position, PositionError};
pub use square::{
    CoordinateError, FILES, NUM_SQUARES, RANKS, Square, algebraic_to_bit, algebraic_to_cartesian,
    bit_to_algebraic, bit_to_cartesian, cartesian_to_algebraic, cartesian_to_bit,
};
