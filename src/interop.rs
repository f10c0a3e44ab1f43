//! Conversions to and from [`shakmaty`] types.
//!
//! Both crates use the same little-endian rank-major square numbering, so
//! squares and bitboards convert by value.

use crate::game_state::{Bitboard, Position, Square};
use crate::pieces::{Color, PieceKind, Role};

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        shakmaty::Square::new(u32::from(square.value()))
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        Square::from_index_masked(square as u8)
    }
}

impl From<Bitboard> for shakmaty::Bitboard {
    fn from(board: Bitboard) -> Self {
        shakmaty::Bitboard(board.value())
    }
}

impl From<shakmaty::Bitboard> for Bitboard {
    fn from(board: shakmaty::Bitboard) -> Self {
        Bitboard::new(board.0)
    }
}

impl From<Color> for shakmaty::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => shakmaty::Color::White,
            Color::Black => shakmaty::Color::Black,
        }
    }
}

impl From<shakmaty::Color> for Color {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }
}

impl From<Role> for shakmaty::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => shakmaty::Role::Pawn,
            Role::Knight => shakmaty::Role::Knight,
            Role::Bishop => shakmaty::Role::Bishop,
            Role::Rook => shakmaty::Role::Rook,
            Role::Queen => shakmaty::Role::Queen,
            Role::King => shakmaty::Role::King,
        }
    }
}

impl From<shakmaty::Role> for Role {
    fn from(role: shakmaty::Role) -> Self {
        match role {
            shakmaty::Role::Pawn => Role::Pawn,
            shakmaty::Role::Knight => Role::Knight,
            shakmaty::Role::Bishop => Role::Bishop,
            shakmaty::Role::Rook => Role::Rook,
            shakmaty::Role::Queen => Role::Queen,
            shakmaty::Role::King => Role::King,
        }
    }
}

impl From<PieceKind> for shakmaty::Piece {
    fn from(kind: PieceKind) -> Self {
        shakmaty::Piece {
            color: kind.color().into(),
            role: kind.role().into(),
        }
    }
}

impl From<shakmaty::Piece> for PieceKind {
    fn from(piece: shakmaty::Piece) -> Self {
        PieceKind::from_parts(piece.color.into(), piece.role.into())
    }
}

impl From<&shakmaty::Board> for Position {
    fn from(board: &shakmaty::Board) -> Self {
        let mut position = Position::empty();
        for square in Square::all() {
            if let Some(piece) = board.piece_at(square.into()) {
                position.place(piece.into(), square);
            }
        }
        position
    }
}

/// Lossy when two kinds claim one square: the kind reported by
/// [`Position::square_at`] wins.
impl From<&Position> for shakmaty::Board {
    fn from(position: &Position) -> Self {
        let mut board = shakmaty::Board::empty();
        for square in position.occupied().squares() {
            if let Some(kind) = position.square_at(square) {
                board.set_piece_at(square.into(), kind.into());
            }
        }
        board
    }
}
