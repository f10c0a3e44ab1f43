use std::fmt;

use log::{debug, trace, warn};
use thiserror::Error;

use super::bitboard::Bitboard;
use super::square::{CoordinateError, Square};
use crate::pieces::{Color, PieceKind};

const INIT_WHITE_ROOKS: Bitboard = Bitboard::new(0x0000_0000_0000_0081);
const INIT_WHITE_KNIGHTS: Bitboard = Bitboard::new(0x0000_0000_0000_0042);
const INIT_WHITE_BISHOPS: Bitboard = Bitboard::new(0x0000_0000_0000_0024);
const INIT_WHITE_QUEEN: Bitboard = Bitboard::new(0x0000_0000_0000_0008);
const INIT_WHITE_KING: Bitboard = Bitboard::new(0x0000_0000_0000_0010);
const INIT_WHITE_PAWNS: Bitboard = Bitboard::new(0x0000_0000_0000_ff00);
const INIT_BLACK_ROOKS: Bitboard = Bitboard::new(0x8100_0000_0000_0000);
const INIT_BLACK_KNIGHTS: Bitboard = Bitboard::new(0x4200_0000_0000_0000);
const INIT_BLACK_BISHOPS: Bitboard = Bitboard::new(0x2400_0000_0000_0000);
const INIT_BLACK_QUEEN: Bitboard = Bitboard::new(0x0800_0000_0000_0000);
const INIT_BLACK_KING: Bitboard = Bitboard::new(0x1000_0000_0000_0000);
const INIT_BLACK_PAWNS: Bitboard = Bitboard::new(0x00ff_0000_0000_0000);

/// Standard starting layout, in [`PieceKind::ALL`] order.
const STARTING_BOARDS: [Bitboard; PieceKind::COUNT] = [
    INIT_WHITE_ROOKS,
    INIT_WHITE_KNIGHTS,
    INIT_WHITE_BISHOPS,
    INIT_WHITE_QUEEN,
    INIT_WHITE_KING,
    INIT_WHITE_PAWNS,
    INIT_BLACK_ROOKS,
    INIT_BLACK_KNIGHTS,
    INIT_BLACK_BISHOPS,
    INIT_BLACK_QUEEN,
    INIT_BLACK_KING,
    INIT_BLACK_PAWNS,
];

/// Error when building a position from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error(
        "unable to determine board position: expected {expected} bitboards, received {received}"
    )]
    InvalidPositionSize { expected: usize, received: usize },
}

/// Piece-centric board: one bitboard per [`PieceKind`] plus their union.
///
/// `occupied` is derived state. Every mutating method updates the kind's
/// board and `occupied` together so that `occupied` always equals the union
/// of the twelve boards.
///
/// Two kinds claiming the same square is representable and not rejected;
/// [`Position::square_at`] reports the first kind in slot order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    boards: [Bitboard; PieceKind::COUNT],
    occupied: Bitboard,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        debug!("creating starting position");
        Self::from_array(STARTING_BOARDS)
    }

    /// Creates a position with no pieces.
    pub fn empty() -> Self {
        Self::from_array([Bitboard::EMPTY; PieceKind::COUNT])
    }

    /// Creates a position from a snapshot of per-kind bitboards, in
    /// [`PieceKind::ALL`] order.
    ///
    /// An empty slice yields the starting position. Any length other than 0
    /// or 12 is rejected.
    pub fn from_bitboards(boards: &[Bitboard]) -> Result<Self, PositionError> {
        if boards.is_empty() {
            return Ok(Self::new());
        }

        let boards: [Bitboard; PieceKind::COUNT] =
            boards
                .try_into()
                .map_err(|_| PositionError::InvalidPositionSize {
                    expected: PieceKind::COUNT,
                    received: boards.len(),
                })?;

        debug!("creating position from snapshot");
        Ok(Self::from_array(boards))
    }

    fn from_array(boards: [Bitboard; PieceKind::COUNT]) -> Self {
        let occupied = Bitboard::union(boards);

        let claimed: u32 = boards.iter().map(|b| b.population()).sum();
        if claimed != occupied.population() {
            warn!(
                "{} square(s) claimed by more than one piece kind",
                claimed - occupied.population()
            );
        }

        Self { boards, occupied }
    }

    /// Union of all piece boards.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Board of a single piece kind.
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.boards[kind.index()]
    }

    /// All twelve boards in [`PieceKind::ALL`] order.
    #[inline]
    pub fn bitboards(&self) -> &[Bitboard; PieceKind::COUNT] {
        &self.boards
    }

    /// Union of the six boards of one color.
    pub fn by_color(&self, color: Color) -> Bitboard {
        PieceKind::ALL
            .iter()
            .filter(|kind| kind.color() == color)
            .map(|&kind| self.pieces(kind))
            .collect()
    }

    /// Number of pieces of the given kind.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.pieces(kind).population()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied.is_set(square)
    }

    /// Which kind occupies `square`, if any.
    ///
    /// Looks at occupancy first, then scans kinds in slot order and returns
    /// the first match.
    pub fn square_at(&self, square: Square) -> Option<PieceKind> {
        if !self.is_occupied(square) {
            return None;
        }
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces(kind).is_set(square))
    }

    /// Marks `square` as holding a piece of `kind`.
    pub fn place(&mut self, kind: PieceKind, square: Square) {
        trace!("place {kind} on {square}");
        self.boards[kind.index()].set(square);
        self.occupied.set(square);
    }

    /// Clears `square` on the board of `kind`.
    ///
    /// The occupancy bit is cleared only when no other kind still claims
    /// `square`.
    pub fn remove(&mut self, kind: PieceKind, square: Square) {
        trace!("remove {kind} from {square}");
        self.boards[kind.index()].clear(square);
        if self.square_at(square).is_none() {
            self.occupied.clear(square);
        }
    }

    /// Moves a piece of `kind` from `from` to `to`.
    ///
    /// Equivalent to [`remove`](Self::remove) followed by
    /// [`place`](Self::place).
    pub fn move_piece(&mut self, kind: PieceKind, from: Square, to: Square) {
        trace!("move {kind} {from} -> {to}");
        self.remove(kind, from);
        self.place(kind, to);
    }

    /// [`place`](Self::place) addressed by file and rank (0-7).
    pub fn place_cartesian(
        &mut self,
        kind: PieceKind,
        x: u8,
        y: u8,
    ) -> Result<(), CoordinateError> {
        let square = Square::from_coords(x, y)?;
        self.place(kind, square);
        Ok(())
    }

    /// [`remove`](Self::remove) addressed by file and rank (0-7).
    pub fn remove_cartesian(
        &mut self,
        kind: PieceKind,
        x: u8,
        y: u8,
    ) -> Result<(), CoordinateError> {
        let square = Square::from_coords(x, y)?;
        self.remove(kind, square);
        Ok(())
    }

    /// [`move_piece`](Self::move_piece) addressed by file and rank (0-7).
    ///
    /// Both squares are resolved before anything changes.
    pub fn move_cartesian(
        &mut self,
        kind: PieceKind,
        (from_x, from_y): (u8, u8),
        (to_x, to_y): (u8, u8),
    ) -> Result<(), CoordinateError> {
        let from = Square::from_coords(from_x, from_y)?;
        let to = Square::from_coords(to_x, to_y)?;
        self.move_piece(kind, from, to);
        Ok(())
    }

    /// [`place`](Self::place) addressed in algebraic notation, e.g. "e4".
    pub fn place_algebraic(
        &mut self,
        kind: PieceKind,
        square: &str,
    ) -> Result<(), CoordinateError> {
        let square: Square = square.parse()?;
        self.place(kind, square);
        Ok(())
    }

    /// [`remove`](Self::remove) addressed in algebraic notation.
    pub fn remove_algebraic(
        &mut self,
        kind: PieceKind,
        square: &str,
    ) -> Result<(), CoordinateError> {
        let square: Square = square.parse()?;
        self.remove(kind, square);
        Ok(())
    }

    /// [`move_piece`](Self::move_piece) addressed in algebraic notation.
    ///
    /// Both squares are parsed before anything changes.
    pub fn move_algebraic(
        &mut self,
        kind: PieceKind,
        from: &str,
        to: &str,
    ) -> Result<(), CoordinateError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.move_piece(kind, from, to);
        Ok(())
    }
}

impl From<[Bitboard; PieceKind::COUNT]> for Position {
    fn from(boards: [Bitboard; PieceKind::COUNT]) -> Self {
        Self::from_array(boards)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in PieceKind::ALL {
            map.entry(&kind, &format_args!("{:#018x}", self.pieces(kind)));
        }
        map.entry(&"occupied", &format_args!("{:#018x}", self.occupied));
        map.finish()
    }
}
