use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use thiserror::Error;

use super::notation;

/// Number of squares on the board
pub const NUM_SQUARES: u8 = 64;

/// Width (and height) of the board
pub const BOARD_SIZE: u8 = 8;

/// A single in-range square on the board.
///
/// Coordinates are zero-based `(x, y)`:
/// - `x` is the row, `0` = rank 8, `7` = rank 1
/// - `y` is the column, `0` = file a, `7` = file h
///
/// Internally stores `x + 8 * y`, which is also the bit a piece mask uses
/// for this square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square if both coordinates are in `0..8`.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Self(x + y * BOARD_SIZE))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, rejecting anything off the board.
    #[inline]
    pub fn from_coords(x: i32, y: i32) -> Option<Self> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        Self::new(x, y)
    }

    /// Creates a square from a file letter (`a`-`h`, either case) and rank number (`1`-`8`).
    #[inline]
    pub fn from_notation(file: char, rank: i32) -> Option<Self> {
        Self::from_coords(notation::rank_to_x(rank), notation::file_to_y(file))
    }

    /// Row coordinate (`0` = rank 8).
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Column coordinate (`0` = file a).
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the file ('a'-'h') of this square.
    #[inline]
    pub const fn file(self) -> char {
        notation::y_to_file(self.y())
    }

    /// Returns the rank (1-8) of this square.
    #[inline]
    pub const fn rank(self) -> u8 {
        notation::x_to_rank(self.x())
    }

    /// All 64 squares, row by row from rank 8 down to rank 1, files a to h.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Square(x + y * BOARD_SIZE)))
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use bitboard_chess::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.x(), square.y()), (4, 4));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength(s.to_string()));
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile(file));
        }
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(SquareParseError::BadRank(rank))?;

        // Both parts were range checked above.
        Self::from_notation(file, rank as i32).ok_or(SquareParseError::BadRank('?'))
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4'), got '{0}'")]
    WrongLength(String),
    #[error("file must be a-h, got '{0}'")]
    BadFile(char),
    #[error("rank must be 1-8, got '{0}'")]
    BadRank(char),
    #[error("rank must be 1-8, got {0}")]
    RankOutOfRange(i32),
}

/// A 64-bit mask, one bit per square.
///
/// The bit a square maps to depends on which mask this is; see
/// [`crate::Board`] for the two layouts in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a new bitboard with the given value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, bit: u8) -> bool {
        self.0 & (1 << bit) != 0
    }

    #[inline]
    pub fn set(&mut self, bit: u8) {
        self.0 |= 1 << bit;
    }

    #[inline]
    pub fn clear(&mut self, bit: u8) {
        self.0 &= !(1 << bit);
    }

    /// Toggles the given bit.
    #[inline]
    pub fn toggle(&mut self, bit: u8) {
        self.0 ^= 1 << bit;
    }

    /// Number of set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices of the set bits, lowest first.
    pub fn bits(self) -> impl Iterator<Item = u8> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let bit = rest.trailing_zeros() as u8;
            rest &= rest - 1;
            Some(bit)
        })
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
