use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::square::{FILES, RANKS, Square};

/// A bitboard representing a set of squares on the chess board.
///
/// Each bit represents one square: bit 0 = a1, bit 7 = h1, bit 63 = h8.
/// Rank 1 occupies the lowest byte and file a is the lowest bit of each
/// rank byte:
///
/// ```text
///  8 | 56 57 58 59 60 61 62 63
///  7 | 48 49 50 51 52 53 54 55
///  6 | 40 41 42 43 44 45 46 47
///  5 | 32 33 34 35 36 37 38 39
///  4 | 24 25 26 27 28 29 30 31
///  3 | 16 17 18 19 20 21 22 23
///  2 |  8  9 10 11 12 13 14 15
///  1 |  0  1  2  3  4  5  6  7
///      a  b  c  d  e  f  g  h
/// ```
///
/// Transforms return new values, bit mutators work in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares set.
    pub const FULL: Bitboard = Bitboard(!0);

    /// Creates a new bitboard with the given value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    /// Creates a bitboard with only `square` set.
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(square.mask())
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets the bit at the given square.
    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= square.mask();
    }

    /// Clears the bit at the given square.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !square.mask();
    }

    /// Toggles the bit at the given square.
    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= square.mask();
    }

    /// Returns the bit at the given square as 0 or 1.
    #[inline]
    pub const fn get(self, square: Square) -> u8 {
        ((self.0 >> square.value()) & 1) as u8
    }

    #[inline]
    pub const fn is_set(self, square: Square) -> bool {
        self.0 & square.mask() != 0
    }

    /// Overlays any number of bitboards into one. The union of nothing is
    /// [`Bitboard::EMPTY`].
    pub fn union<I>(boards: I) -> Bitboard
    where
        I: IntoIterator<Item = Bitboard>,
    {
        boards.into_iter().fold(Bitboard::EMPTY, |acc, b| acc | b)
    }

    /// Number of set bits (Hamming weight).
    ///
    /// Divide-and-conquer SWAR count: 2-bit sums, then nibbles, bytes, and
    /// the 16/32-bit folds. The result fits in the low 7 bits.
    pub const fn population(self) -> u32 {
        const M1: u64 = 0x5555_5555_5555_5555;
        const M2: u64 = 0x3333_3333_3333_3333;
        const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;

        let mut b = self.0;
        b -= (b >> 1) & M1;
        b = (b & M2) + ((b >> 2) & M2);
        b = (b + (b >> 4)) & M4;
        b += b >> 8;
        b += b >> 16;
        b += b >> 32;
        (b & 0x7f) as u32
    }

    /// Mirrors ranks: rank 1 swaps with rank 8.
    pub const fn flip_vertical(self) -> Bitboard {
        const K1: u64 = 0x00FF_00FF_00FF_00FF;
        const K2: u64 = 0x0000_FFFF_0000_FFFF;

        let mut b = self.0;
        b = ((b >> 8) & K1) | ((b & K1) << 8);
        b = ((b >> 16) & K2) | ((b & K2) << 16);
        b = (b >> 32) | (b << 32);
        Bitboard(b)
    }

    /// Mirrors files: file a swaps with file h.
    pub const fn flip_horizontal(self) -> Bitboard {
        const K1: u64 = 0x5555_5555_5555_5555;
        const K2: u64 = 0x3333_3333_3333_3333;
        const K4: u64 = 0x0f0f_0f0f_0f0f_0f0f;

        // Masked halves never overlap, so the multiplications cannot carry.
        let mut b = self.0;
        b = ((b >> 1) & K1) + 2 * (b & K1);
        b = ((b >> 2) & K2) + 4 * (b & K2);
        b = ((b >> 4) & K4) + 16 * (b & K4);
        Bitboard(b)
    }

    /// Reflects across the a1-h8 diagonal.
    pub const fn flip_diagonal_a1h8(self) -> Bitboard {
        const K1: u64 = 0x5500_5500_5500_5500;
        const K2: u64 = 0x3333_0000_3333_0000;
        const K4: u64 = 0x0f0f_0f0f_0000_0000;

        let mut b = self.0;
        let mut t = K4 & (b ^ (b << 28));
        b ^= t ^ (t >> 28);
        t = K2 & (b ^ (b << 14));
        b ^= t ^ (t >> 14);
        t = K1 & (b ^ (b << 7));
        b ^= t ^ (t >> 7);
        Bitboard(b)
    }

    /// Reflects across the a8-h1 diagonal.
    pub const fn flip_diagonal_a8h1(self) -> Bitboard {
        const K1: u64 = 0xaa00_aa00_aa00_aa00;
        const K2: u64 = 0xcccc_0000_cccc_0000;
        const K4: u64 = 0xf0f0_f0f0_0f0f_0f0f;

        let mut b = self.0;
        let mut t = b ^ (b << 36);
        b ^= K4 & (t ^ (b >> 36));
        t = K2 & (b ^ (b << 18));
        b ^= t ^ (t >> 18);
        t = K1 & (b ^ (b << 9));
        b ^= t ^ (t >> 9);
        Bitboard(b)
    }

    pub const fn rotate_180(self) -> Bitboard {
        self.flip_vertical().flip_horizontal()
    }

    /// Rotates 90 degrees clockwise.
    pub const fn rotate_90(self) -> Bitboard {
        self.flip_diagonal_a1h8().flip_vertical()
    }

    /// Rotates 90 degrees counter-clockwise.
    ///
    /// Same two flips as [`Bitboard::rotate_90`], applied in the opposite order.
    pub const fn rotate_270(self) -> Bitboard {
        self.flip_vertical().flip_diagonal_a1h8()
    }

    /// Iterates set squares from a1 towards h8.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |&square| self.is_set(square))
    }
}

impl From<u64> for Bitboard {
    fn from(value: u64) -> Self {
        Bitboard(value)
    }
}

impl From<Bitboard> for u64 {
    fn from(board: Bitboard) -> u64 {
        board.0
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Bitboard::from_square(square)
    }
}

impl FromIterator<Bitboard> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Bitboard>>(iter: I) -> Self {
        Bitboard::union(iter)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// 8x8 grid of `1`/`.` with rank 8 on top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..RANKS).rev() {
            for file in 0..FILES {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let bit = (self.0 >> (rank * FILES + file)) & 1;
                f.write_str(if bit == 1 { "1" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const DARK_SQUARES: Bitboard = Bitboard::new(0xaa55_aa55_aa55_aa55);
    const LIGHT_SQUARES: Bitboard = Bitboard::new(0x55aa_55aa_55aa_55aa);

    // The letter R drawn on files b-f:
    //
    // . 1 1 1 1 . . .
    // . 1 . . . 1 . .
    // . 1 . . . 1 . .
    // . 1 . . 1 . . .
    // . 1 1 1 . . . .
    // . 1 . 1 . . . .
    // . 1 . . 1 . . .
    // . 1 . . . 1 . .
    const LETTER_R: Bitboard = Bitboard::new(0x1e22_2212_0e0a_1222);
    const R_VERTICAL: Bitboard = Bitboard::new(0x2212_0a0e_1222_221e);
    const R_HORIZONTAL: Bitboard = Bitboard::new(0x7844_4448_7050_4844);
    const R_A1H8: Bitboard = Bitboard::new(0x0000_6192_8c88_ff00);
    const R_A8H1: Bitboard = Bitboard::new(0x00ff_1131_4986_0000);

    fn sq(index: u8) -> Square {
        Square::new(index).unwrap()
    }

    /// Cheap xorshift so the sampled values are fixed across runs.
    fn samples() -> impl Iterator<Item = Bitboard> {
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        std::iter::repeat_with(move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            Bitboard::new(state)
        })
        .take(256)
        .chain([
            Bitboard::EMPTY,
            Bitboard::FULL,
            DARK_SQUARES,
            LIGHT_SQUARES,
            LETTER_R,
            Bitboard::new(1),
            Bitboard::new(1 << 63),
        ])
    }

    #[test]
    fn test_bitboard_new() {
        assert_eq!(Bitboard::new(0), Bitboard::EMPTY);
        assert_eq!(Bitboard::new(0xFFFF_FFFF_FFFF_FFFF), Bitboard::FULL);
        assert_eq!(Bitboard::default(), Bitboard::EMPTY);
    }

    #[test]
    fn test_single_bit_operations() {
        for index in 0..64 {
            let square = sq(index);
            let mut bb = Bitboard::EMPTY;

            bb.set(square);
            assert_eq!(bb.get(square), 1);
            assert!(bb.is_set(square));
            assert_eq!(bb.population(), 1);
            assert_ne!(bb, Bitboard::EMPTY);
            assert_eq!(bb, Bitboard::from_square(square));

            bb.toggle(square);
            assert_eq!(bb, Bitboard::EMPTY);
            assert_eq!(bb.get(square), 0);

            bb.set(square);
            bb.clear(square);
            assert_eq!(bb, Bitboard::EMPTY);
            assert_eq!(bb.population(), 0);
        }
    }

    #[test]
    fn test_set_and_clear_are_idempotent() {
        let mut bb = Bitboard::EMPTY;
        bb.set(sq(5));
        bb.set(sq(5));
        assert_eq!(bb.value(), 1 << 5);

        bb.clear(sq(5));
        bb.clear(sq(5));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_bitboard_multiple_squares() {
        let mut bb = Bitboard::EMPTY;

        bb.toggle(sq(0)); // a1
        bb.toggle(sq(7)); // h1
        bb.toggle(sq(63)); // h8

        assert_eq!(bb.value(), 0x8000000000000081);
        assert_eq!(bb.population(), 3);
        assert_eq!(bb.squares().collect::<Vec<_>>(), vec![sq(0), sq(7), sq(63)]);
    }

    #[test]
    fn test_union() {
        assert_eq!(Bitboard::union(std::iter::empty()), Bitboard::EMPTY);
        assert_eq!(Bitboard::union((0..64).map(|i| Bitboard::from_square(sq(i)))), Bitboard::FULL);
        assert_eq!(
            [DARK_SQUARES, LIGHT_SQUARES].into_iter().collect::<Bitboard>(),
            Bitboard::FULL
        );
    }

    #[test]
    fn test_population_matches_count_ones() {
        for bb in samples() {
            assert_eq!(bb.population(), bb.value().count_ones(), "{bb:?}");
        }
        assert_eq!(Bitboard::FULL.population(), 64);
        assert_eq!(LETTER_R.population(), 19);
    }

    #[test_case(LETTER_R, R_VERTICAL, Bitboard::flip_vertical ; "vertical")]
    #[test_case(LETTER_R, R_HORIZONTAL, Bitboard::flip_horizontal ; "horizontal")]
    #[test_case(LETTER_R, R_A1H8, Bitboard::flip_diagonal_a1h8 ; "diagonal a1h8")]
    #[test_case(LETTER_R, R_A8H1, Bitboard::flip_diagonal_a8h1 ; "diagonal a8h1")]
    fn test_flip_fixtures(input: Bitboard, expected: Bitboard, flip: fn(Bitboard) -> Bitboard) {
        let flipped = flip(input);
        assert_eq!(flipped, expected);
        assert_eq!(flipped.population(), 19);
    }

    #[test_case(Bitboard::flip_vertical ; "vertical")]
    #[test_case(Bitboard::flip_horizontal ; "horizontal")]
    #[test_case(Bitboard::flip_diagonal_a1h8 ; "diagonal a1h8")]
    #[test_case(Bitboard::flip_diagonal_a8h1 ; "diagonal a8h1")]
    fn test_flips_are_involutions(flip: fn(Bitboard) -> Bitboard) {
        for bb in samples() {
            assert_eq!(flip(flip(bb)), bb);
            assert_eq!(flip(bb).population(), bb.population());
        }
    }

    #[test]
    fn test_flip_moves_corners() {
        let a1 = Bitboard::from_square(Square::A1);
        assert_eq!(a1.flip_vertical(), Bitboard::from_square(Square::A8));
        assert_eq!(a1.flip_horizontal(), Bitboard::from_square(Square::H1));
        assert_eq!(a1.flip_diagonal_a1h8(), a1);
        assert_eq!(a1.flip_diagonal_a8h1(), Bitboard::from_square(Square::H8));
    }

    #[test]
    fn test_rotation_laws() {
        for bb in samples() {
            assert_eq!(bb.rotate_90().rotate_90(), bb.rotate_180());
            assert_eq!(bb.rotate_90().rotate_90().rotate_90().rotate_90(), bb);
            assert_eq!(bb.rotate_90().rotate_270(), bb);
            assert_eq!(bb.rotate_270().rotate_90(), bb);
            assert_eq!(bb.rotate_90().rotate_90().rotate_90(), bb.rotate_270());
            assert_eq!(bb.rotate_90().population(), bb.population());
            assert_eq!(bb.rotate_180().population(), bb.population());
            assert_eq!(bb.rotate_270().population(), bb.population());
        }
    }

    #[test]
    fn test_rotate_90_is_clockwise() {
        // a1 ends up in the top-left corner, h1 in the bottom-left.
        let a1 = Bitboard::from_square(Square::A1);
        assert_eq!(a1.rotate_90(), Bitboard::from_square(Square::A8));
        assert_eq!(a1.rotate_270(), Bitboard::from_square(Square::H1));
        assert_ne!(a1.rotate_90(), a1.rotate_270());
    }

    #[test]
    fn test_checkerboard_rotations() {
        let mut board = LIGHT_SQUARES;
        board = board.rotate_90();
        assert_eq!(board, DARK_SQUARES);
        board = board.rotate_90();
        assert_eq!(board, LIGHT_SQUARES);
        assert_eq!(board.flip_diagonal_a1h8(), LIGHT_SQUARES);
        assert_ne!(board.flip_horizontal(), LIGHT_SQUARES);

        assert_eq!(DARK_SQUARES.rotate_180(), DARK_SQUARES);
        assert_eq!(DARK_SQUARES.flip_vertical(), LIGHT_SQUARES);
        assert_eq!(LIGHT_SQUARES.rotate_270(), DARK_SQUARES);
    }

    #[test]
    fn test_display_grid() {
        let text = Bitboard::from_square(Square::A1).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ". . . . . . . .");
        assert_eq!(lines[7], "1 . . . . . . .");
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(format!("{:#018X}", Bitboard::new(0xff00)), "0x000000000000FF00");
        assert_eq!(format!("{:x}", LETTER_R), "1e2222120e0a1222");
    }
}
