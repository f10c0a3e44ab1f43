use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of files (columns) on the board.
pub const FILES: u8 = 8;

/// Number of ranks (rows) on the board.
pub const RANKS: u8 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: u8 = FILES * RANKS;

const FILE_LETTERS: [char; FILES as usize] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Error type for coordinate conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Bit index must be in 0-63
    #[error("square index {0} is out of range (0-63)")]
    IndexOutOfRange(u8),
    /// File must be in 0-7
    #[error("file {0} is out of range (0-7)")]
    FileOutOfRange(u8),
    /// Rank must be in 0-7
    #[error("rank {0} is out of range (0-7)")]
    RankOutOfRange(u8),
    /// Algebraic notation must be a file a-h followed by a rank 1-8
    #[error("invalid algebraic coordinate: '{0}'")]
    InvalidCoordinate(String),
}

/// Represents a single square on the chess board (0-63).
///
/// Internally stores index 0-63 where:
/// - 0 = a1, 7 = h1
/// - 56 = a8, 63 = h8
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    /// Creates a new Square if the index is valid (0-63).
    pub const fn new(index: u8) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    /// For indices already known to be 0-63, e.g. from another chess library.
    pub(crate) const fn from_index_masked(index: u8) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Square(index & (NUM_SQUARES - 1))
    }

    /// Creates a Square from a file (0-7, a-h) and rank (0-7, ranks 1-8).
    pub fn from_coords(file: u8, rank: u8) -> Result<Self, CoordinateError> {
        cartesian_to_bit(file, rank).map(Square)
    }

    /// Returns the internal index value (0-63).
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the 0-based file of this square (0 = a).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % FILES
    }

    /// Returns the 0-based rank of this square (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / FILES
    }

    /// Returns `(file, rank)`.
    #[inline]
    pub const fn coords(self) -> (u8, u8) {
        (self.file(), self.rank())
    }

    /// Returns the file letter ('a'-'h') of this square.
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// Returns the rank digit ('1'-'8') of this square.
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Mask with only this square's bit set.
    #[inline]
    pub(crate) const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Iterates all 64 squares from a1 to h8.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..NUM_SQUARES).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = CoordinateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(CoordinateError::IndexOutOfRange(index))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use bitboard_position::game_state::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!(square.value(), 28);
/// ```
impl FromStr for Square {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_bit(s).map(Square)
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Converts a file and rank (both 0-7) to a bit index.
pub fn cartesian_to_bit(x: u8, y: u8) -> Result<u8, CoordinateError> {
    if x >= FILES {
        return Err(CoordinateError::FileOutOfRange(x));
    }
    if y >= RANKS {
        return Err(CoordinateError::RankOutOfRange(y));
    }
    Ok(y * FILES + x)
}

/// Converts a bit index to `(file, rank)`.
pub fn bit_to_cartesian(index: u8) -> Result<(u8, u8), CoordinateError> {
    Square::try_from(index).map(Square::coords)
}

/// Converts algebraic notation ("a1".."h8") to `(file, rank)`.
///
/// Only lowercase file letters are accepted.
pub fn algebraic_to_cartesian(s: &str) -> Result<(u8, u8), CoordinateError> {
    let invalid = || CoordinateError::InvalidCoordinate(s.to_string());

    let mut chars = s.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let x = FILE_LETTERS
        .iter()
        .position(|&letter| letter == file)
        .ok_or_else(invalid)?;
    let y = rank
        .to_digit(10)
        .filter(|digit| (1..=u32::from(RANKS)).contains(digit))
        .ok_or_else(invalid)?;

    Ok((x as u8, (y - 1) as u8))
}

/// Converts `(file, rank)` to algebraic notation.
pub fn cartesian_to_algebraic(x: u8, y: u8) -> Result<String, CoordinateError> {
    Square::from_coords(x, y).map(|square| square.to_string())
}

/// Converts algebraic notation to a bit index.
pub fn algebraic_to_bit(s: &str) -> Result<u8, CoordinateError> {
    let (x, y) = algebraic_to_cartesian(s)?;
    cartesian_to_bit(x, y)
}

/// Converts a bit index to algebraic notation.
pub fn bit_to_algebraic(index: u8) -> Result<String, CoordinateError> {
    let (x, y) = bit_to_cartesian(index)?;
    cartesian_to_algebraic(x, y)
}
