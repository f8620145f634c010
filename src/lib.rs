//! Mutable chess board stored as one 64-bit mask per piece kind plus an
//! occupancy mask for quick emptiness checks.
//!
//! The board moves bits around; it knows nothing about legal moves, turns or
//! check. Those belong in code layered on top of [`Board`].

pub mod board;
pub mod render;
pub mod script;

pub use board::{
    Bitboard, Board, Color, ConsistencyError, Piece, PieceKind, Role, Square, SquareContent,
    SquareParseError, is_white,
};

/// Trait for showing a board to the player.
///
/// Abstracts over where the board ends up (a terminal, a test buffer),
/// providing a uniform interface for front ends.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show `board`, highlighting `marks`.
    fn show(&mut self, board: &Board, marks: &[Square]) -> Result<(), Self::Error>;
}
