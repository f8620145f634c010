//! Conversions between chess notation and zero-based board coordinates.
//!
//! Files map to the `y` coordinate (`a` = 0 .. `h` = 7) and ranks map to the
//! `x` coordinate (rank 8 = 0 .. rank 1 = 7). The letter/number to coordinate
//! direction does no range checking: an off-board letter or rank produces an
//! off-board coordinate, which the guarded query path reports as out of bounds.
//!
//! File letters are case-insensitive everywhere, matching square parsing.

/// `a`..`h` (or `A`..`H`) -> `0..7`. Other characters land outside `0..7`.
#[inline]
pub const fn file_to_y(file: char) -> i32 {
    file.to_ascii_lowercase() as i32 - 'a' as i32
}

/// Inverse of [`file_to_y`] for an in-range column.
#[inline]
pub const fn y_to_file(y: u8) -> char {
    (b'a' + y) as char
}

/// Rank `8` is row `0`, rank `1` is row `7`.
#[inline]
pub const fn rank_to_x(rank: i32) -> i32 {
    8i32.saturating_sub(rank)
}

/// Inverse of [`rank_to_x`] for an in-range row.
#[inline]
pub const fn x_to_rank(x: u8) -> u8 {
    8 - x
}
