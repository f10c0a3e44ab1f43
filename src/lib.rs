//! Piece-centric chess position built on 64-bit bitboards.
//!
//! One [`Bitboard`](game_state::Bitboard) per [`PieceKind`](pieces::PieceKind)
//! plus their union, with square coordinates in bit index, Cartesian and
//! algebraic form.

pub mod game_state;
pub mod interop;
pub mod pieces;
pub mod visualization;

/// Trait for displaying a position to the user.
///
/// Abstracts over output targets so the driver does not depend on
/// a particular terminal or writer.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given position.
    fn show(&mut self, position: &game_state::Position) -> Result<(), Self::Error>;
}
