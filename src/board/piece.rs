pub use shakmaty::{Color, Piece, Role};

/// One of the twelve colored piece kinds, each owning one mask on the board.
///
/// The declaration order is the order [`crate::Board::get_piece`] scans the
/// masks in: all white kinds first, then all black kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    WhitePawn,
    WhiteRook,
    WhiteKnight,
    WhiteBishop,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackRook,
    BlackKnight,
    BlackBishop,
    BlackQueen,
    BlackKing,
}

/// Number of piece kinds (and masks on a board)
pub const NUM_KINDS: usize = 12;

impl PieceKind {
    pub const ALL: [PieceKind; NUM_KINDS] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteRook,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackRook,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    #[inline]
    pub const fn new(color: Color, role: Role) -> Self {
        match (color, role) {
            (Color::White, Role::Pawn) => PieceKind::WhitePawn,
            (Color::White, Role::Rook) => PieceKind::WhiteRook,
            (Color::White, Role::Knight) => PieceKind::WhiteKnight,
            (Color::White, Role::Bishop) => PieceKind::WhiteBishop,
            (Color::White, Role::Queen) => PieceKind::WhiteQueen,
            (Color::White, Role::King) => PieceKind::WhiteKing,
            (Color::Black, Role::Pawn) => PieceKind::BlackPawn,
            (Color::Black, Role::Rook) => PieceKind::BlackRook,
            (Color::Black, Role::Knight) => PieceKind::BlackKnight,
            (Color::Black, Role::Bishop) => PieceKind::BlackBishop,
            (Color::Black, Role::Queen) => PieceKind::BlackQueen,
            (Color::Black, Role::King) => PieceKind::BlackKing,
        }
    }

    /// Position in [`PieceKind::ALL`], which is also the mask slot.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.is_white() {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn role(self) -> Role {
        match self {
            PieceKind::WhitePawn | PieceKind::BlackPawn => Role::Pawn,
            PieceKind::WhiteRook | PieceKind::BlackRook => Role::Rook,
            PieceKind::WhiteKnight | PieceKind::BlackKnight => Role::Knight,
            PieceKind::WhiteBishop | PieceKind::BlackBishop => Role::Bishop,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => Role::Queen,
            PieceKind::WhiteKing | PieceKind::BlackKing => Role::King,
        }
    }

    /// True for the first half of the kind ordering.
    #[inline]
    pub const fn is_white(self) -> bool {
        self.index() < NUM_KINDS / 2
    }

    /// Render character: uppercase for white, lowercase for black.
    #[inline]
    pub fn glyph(self) -> char {
        Piece::from(self).char()
    }

    /// Inverse of [`PieceKind::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Piece::from_char(glyph).map(Self::from)
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Piece {
            color: kind.color(),
            role: kind.role(),
        }
    }
}

impl From<Piece> for PieceKind {
    fn from(piece: Piece) -> Self {
        PieceKind::new(piece.color, piece.role)
    }
}

/// Free-standing form of [`PieceKind::is_white`].
#[inline]
pub const fn is_white(kind: PieceKind) -> bool {
    kind.is_white()
}

/// What a square lookup found.
///
/// Out-of-bounds and empty are ordinary results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareContent {
    OutOfBounds,
    Empty,
    Piece(PieceKind),
}

impl SquareContent {
    #[inline]
    pub const fn piece(self) -> Option<PieceKind> {
        match self {
            SquareContent::Piece(kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_out_of_bounds(self) -> bool {
        matches!(self, SquareContent::OutOfBounds)
    }

    /// False for both sentinels.
    #[inline]
    pub const fn is_white(self) -> bool {
        match self {
            SquareContent::Piece(kind) => kind.is_white(),
            _ => false,
        }
    }
}

impl From<Option<PieceKind>> for SquareContent {
    fn from(piece: Option<PieceKind>) -> Self {
        piece.map_or(SquareContent::Empty, SquareContent::Piece)
    }
}
