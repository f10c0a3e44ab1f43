use std::fmt;

use thiserror::Error;

/// Error when resolving a raw board slot to a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("piece kind index {0} is out of range (0-11)")]
    InvalidKindIndex(usize),
}

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a piece is, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub const fn name(self) -> &'static str {
        match self {
            Role::Pawn => "pawn",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::Queen => "queen",
            Role::King => "king",
        }
    }

    /// Notation letter. Pawns have none.
    pub const fn symbol(self) -> Option<char> {
        match self {
            Role::Pawn => None,
            Role::Knight => Some('N'),
            Role::Bishop => Some('B'),
            Role::Rook => Some('R'),
            Role::Queen => Some('Q'),
            Role::King => Some('K'),
        }
    }

    /// Material value. The king is priceless and counts as 0.
    pub const fn value(self) -> u8 {
        match self {
            Role::Pawn => 1,
            Role::Knight | Role::Bishop => 3,
            Role::Rook => 5,
            Role::Queen => 9,
            Role::King => 0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 12 kinds of piece, each tracked on its own bitboard.
///
/// The declaration order is the board slot order used by
/// [`Position`](crate::game_state::Position): white rook, knight, bishop,
/// queen, king, pawn, then the same for black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    WhiteRook,
    WhiteKnight,
    WhiteBishop,
    WhiteQueen,
    WhiteKing,
    WhitePawn,
    BlackRook,
    BlackKnight,
    BlackBishop,
    BlackQueen,
    BlackKing,
    BlackPawn,
}

impl PieceKind {
    pub const COUNT: usize = 12;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::WhiteRook,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::WhitePawn,
        PieceKind::BlackRook,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
        PieceKind::BlackPawn,
    ];

    /// Board slot of this kind (0-11).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_parts(color: Color, role: Role) -> PieceKind {
        match (color, role) {
            (Color::White, Role::Rook) => PieceKind::WhiteRook,
            (Color::White, Role::Knight) => PieceKind::WhiteKnight,
            (Color::White, Role::Bishop) => PieceKind::WhiteBishop,
            (Color::White, Role::Queen) => PieceKind::WhiteQueen,
            (Color::White, Role::King) => PieceKind::WhiteKing,
            (Color::White, Role::Pawn) => PieceKind::WhitePawn,
            (Color::Black, Role::Rook) => PieceKind::BlackRook,
            (Color::Black, Role::Knight) => PieceKind::BlackKnight,
            (Color::Black, Role::Bishop) => PieceKind::BlackBishop,
            (Color::Black, Role::Queen) => PieceKind::BlackQueen,
            (Color::Black, Role::King) => PieceKind::BlackKing,
            (Color::Black, Role::Pawn) => PieceKind::BlackPawn,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            PieceKind::WhiteRook
            | PieceKind::WhiteKnight
            | PieceKind::WhiteBishop
            | PieceKind::WhiteQueen
            | PieceKind::WhiteKing
            | PieceKind::WhitePawn => Color::White,
            _ => Color::Black,
        }
    }

    pub const fn role(self) -> Role {
        match self {
            PieceKind::WhiteRook | PieceKind::BlackRook => Role::Rook,
            PieceKind::WhiteKnight | PieceKind::BlackKnight => Role::Knight,
            PieceKind::WhiteBishop | PieceKind::BlackBishop => Role::Bishop,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => Role::Queen,
            PieceKind::WhiteKing | PieceKind::BlackKing => Role::King,
            PieceKind::WhitePawn | PieceKind::BlackPawn => Role::Pawn,
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.role().value()
    }

    /// Console glyph for this piece.
    pub const fn unicode(self) -> char {
        match self {
            PieceKind::WhiteRook => '♖',
            PieceKind::WhiteKnight => '♘',
            PieceKind::WhiteBishop => '♗',
            PieceKind::WhiteQueen => '♕',
            PieceKind::WhiteKing => '♔',
            PieceKind::WhitePawn => '♙',
            PieceKind::BlackRook => '♜',
            PieceKind::BlackKnight => '♞',
            PieceKind::BlackBishop => '♝',
            PieceKind::BlackQueen => '♛',
            PieceKind::BlackKing => '♚',
            PieceKind::BlackPawn => '♟',
        }
    }

    /// ASCII letter, uppercase for white and lowercase for black.
    pub const fn letter(self) -> char {
        let upper = match self.role() {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        };
        match self.color() {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }
}

impl TryFrom<usize> for PieceKind {
    type Error = PieceError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        PieceKind::ALL
            .get(index)
            .copied()
            .ok_or(PieceError::InvalidKindIndex(index))
    }
}

/// "white rook", "black pawn", ...
impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.role())
    }
}
