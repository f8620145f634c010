pub mod bitboard;
pub mod notation;
pub mod piece;

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

pub use bitboard::{Bitboard, Square, SquareParseError};
pub use piece::{Color, NUM_KINDS, Piece, PieceKind, Role, SquareContent, is_white};

/// Piece masks of the standard starting position, in [`PieceKind::ALL`] order.
pub const STANDARD_MASKS: [u64; NUM_KINDS] = [
    0x4040_4040_4040_4040, // white pawns
    0x8000_0000_0000_0080, // white rooks
    0x0080_0000_0000_8000, // white knights
    0x0000_8000_0080_0000, // white bishops
    0x0000_0000_8000_0000, // white queen
    0x0000_0080_0000_0000, // white king
    0x0202_0202_0202_0202, // black pawns
    0x0100_0000_0000_0001, // black rooks
    0x0001_0000_0000_0100, // black knights
    0x0000_0100_0001_0000, // black bishops
    0x0000_0000_0100_0000, // black queen
    0x0000_0001_0000_0000, // black king
];

/// Occupancy of the standard starting position: ranks 8, 7, 2 and 1.
pub const STANDARD_OCCUPANCY: u64 = 0xFFFF_0000_0000_FFFF;

/// Bit for a square in a piece mask: `x + 8 * y`.
#[inline]
const fn piece_bit(sq: Square) -> u8 {
    sq.x() + sq.y() * 8
}

/// Bit for a square in the occupancy mask: `y + 8 * x`, the transpose of
/// [`piece_bit`]. Keeps the starting-position literals bit compatible.
#[inline]
const fn occupancy_bit(sq: Square) -> u8 {
    sq.y() + sq.x() * 8
}

/// Invariant breakage found by [`Board::check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("{first:?} and {second:?} both occupy {square}")]
    Overlap {
        first: PieceKind,
        second: PieceKind,
        square: Square,
    },
    #[error("{kind:?} on {square} is missing from the occupancy mask")]
    MissingOccupancy { kind: PieceKind, square: Square },
    #[error("occupancy marks {0} but no piece is there")]
    StaleOccupancy(Square),
}

/// Chess position as one bitmask per piece kind plus a cached occupancy mask.
///
/// Piece masks store square `(x, y)` at bit `x + 8 * y`; the occupancy mask
/// stores it at bit `y + 8 * x`.
///
/// Every public mutator keeps the occupancy mask equal to the union of the
/// piece masks, provided the caller honours the preconditions of the fast
/// paths ([`Board::set_piece`], [`Board::remove_piece_fast`],
/// [`Board::move_piece_fast`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    masks: [Bitboard; NUM_KINDS],
    occupancy: Bitboard,
}

impl Board {
    /// Board set up with the standard starting position.
    pub const fn new_standard() -> Self {
        let mut masks = [Bitboard::EMPTY; NUM_KINDS];
        let mut i = 0;
        while i < NUM_KINDS {
            masks[i] = Bitboard::new(STANDARD_MASKS[i]);
            i += 1;
        }
        Self {
            masks,
            occupancy: Bitboard::new(STANDARD_OCCUPANCY),
        }
    }

    /// Board with no pieces.
    pub const fn empty() -> Self {
        Self {
            masks: [Bitboard::EMPTY; NUM_KINDS],
            occupancy: Bitboard::EMPTY,
        }
    }

    /// Put every piece back on its starting square.
    pub fn reset(&mut self) {
        debug!("resetting board to the starting position");
        *self = Self::new_standard();
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        debug!("clearing board");
        *self = Self::empty();
    }

    /// Mask of a single piece kind.
    #[inline]
    pub fn mask(&self, kind: PieceKind) -> Bitboard {
        self.masks[kind.index()]
    }

    /// Aggregate occupancy mask (transposed layout, see [`Board`]).
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupancy.contains(occupancy_bit(sq))
    }

    /// Classify `(x, y)`. Any integers are accepted; coordinates off the
    /// board yield [`SquareContent::OutOfBounds`].
    pub fn get_piece(&self, x: i32, y: i32) -> SquareContent {
        match Square::from_coords(x, y) {
            Some(sq) => self.piece_at(sq).into(),
            None => SquareContent::OutOfBounds,
        }
    }

    /// Piece on an in-range square, scanning kinds in [`PieceKind::ALL`] order.
    pub fn piece_at(&self, sq: Square) -> Option<PieceKind> {
        if !self.is_occupied(sq) {
            return None;
        }
        let bit = piece_bit(sq);
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.masks[kind.index()].contains(bit))
    }

    /// [`Board::get_piece`] addressed by file letter and rank number.
    pub fn get_piece_by_notation(&self, file: char, rank: i32) -> SquareContent {
        self.get_piece(notation::rank_to_x(rank), notation::file_to_y(file))
    }

    /// Squares holding `kind`.
    pub fn squares_of(&self, kind: PieceKind) -> impl Iterator<Item = Square> + use<> {
        self.mask(kind)
            .bits()
            .filter_map(|bit| Square::new(bit % 8, bit / 8))
    }

    /// Place `kind` on `sq`.
    ///
    /// Does not clear whatever else is on the square; the square must be
    /// empty or the board ends up with two pieces on it.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, kind: PieceKind) {
        self.masks[kind.index()].set(piece_bit(sq));
        self.occupancy.set(occupancy_bit(sq));
    }

    /// Remove whatever is on `sq`, returning it. Empty squares are left alone.
    pub fn remove_piece(&mut self, sq: Square) -> Option<PieceKind> {
        let kind = self.piece_at(sq)?;
        self.remove_piece_fast(sq, kind);
        Some(kind)
    }

    /// Clear `kind` from `sq` without looking first.
    ///
    /// `kind` must be the piece actually on the square. Passing the wrong
    /// kind clears the occupancy bit but leaves the real occupant's mask set.
    #[inline]
    pub fn remove_piece_fast(&mut self, sq: Square, kind: PieceKind) {
        self.masks[kind.index()].clear(piece_bit(sq));
        self.occupancy.clear(occupancy_bit(sq));
    }

    /// Move the piece on `from` to `to`, capturing anything already on `to`.
    ///
    /// Moving from an empty square, or onto the same square, changes nothing.
    /// Returns the captured piece.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<PieceKind> {
        if from == to {
            return None;
        }
        let piece = self.piece_at(from)?;
        let captured = self.piece_at(to);
        if let Some(victim) = captured {
            self.remove_piece_fast(to, victim);
        }
        self.set_piece(to, piece);
        self.remove_piece_fast(from, piece);
        trace!("{piece:?} {from} -> {to}, captured {captured:?}");
        captured
    }

    /// Move `kind` from `from` to `to` without reading either square.
    ///
    /// `to` must be empty and `kind` must be the piece on `from`.
    #[inline]
    pub fn move_piece_fast(&mut self, from: Square, to: Square, kind: PieceKind) {
        self.remove_piece_fast(from, kind);
        self.set_piece(to, kind);
    }

    /// [`Board::move_piece`] addressed by file letter and rank number.
    ///
    /// Off-board notation is rejected before the board is touched.
    pub fn move_piece_by_notation(
        &mut self,
        from_file: char,
        from_rank: i32,
        to_file: char,
        to_rank: i32,
    ) -> Result<Option<PieceKind>, SquareParseError> {
        let from = notation_square(from_file, from_rank)?;
        let to = notation_square(to_file, to_rank)?;
        Ok(self.move_piece(from, to))
    }

    /// Verify that no two kinds share a square and that the occupancy mask
    /// is exactly the union of the piece masks.
    ///
    /// Mutators never call this; a board broken by a misused fast path keeps
    /// working with whatever the masks say.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for (i, first) in PieceKind::ALL.into_iter().enumerate() {
            for second in PieceKind::ALL.into_iter().skip(i + 1) {
                let shared = self.mask(first) & self.mask(second);
                if let Some(square) = shared
                    .bits()
                    .next()
                    .and_then(|bit| Square::new(bit % 8, bit / 8))
                {
                    return Err(ConsistencyError::Overlap {
                        first,
                        second,
                        square,
                    });
                }
            }
        }

        let mut expected = Bitboard::EMPTY;
        for kind in PieceKind::ALL {
            for square in self.squares_of(kind) {
                if !self.is_occupied(square) {
                    return Err(ConsistencyError::MissingOccupancy { kind, square });
                }
                expected.set(occupancy_bit(square));
            }
        }

        match (self.occupancy & !expected)
            .bits()
            .next()
            .and_then(|bit| Square::new(bit / 8, bit % 8))
        {
            Some(square) => Err(ConsistencyError::StaleOccupancy(square)),
            None => Ok(()),
        }
    }
}

fn notation_square(file: char, rank: i32) -> Result<Square, SquareParseError> {
    if !(0..8).contains(&notation::file_to_y(file)) {
        return Err(SquareParseError::BadFile(file));
    }
    Square::from_notation(file, rank).ok_or(SquareParseError::RankOutOfRange(rank))
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Board");
        for kind in PieceKind::ALL {
            s.field(
                &format!("{kind:?}"),
                &format_args!("{:#018X}", self.mask(kind)),
            );
        }
        s.field("occupancy", &format_args!("{:#018X}", self.occupancy))
            .finish()
    }
}
