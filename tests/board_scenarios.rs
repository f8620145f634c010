use bitboard_chess::{Board, PieceKind, Square, SquareContent};
use shakmaty::{Chess, File, Position, Rank};
use test_case::test_case;

/// Helper: parse a square that the test knows is valid.
fn sq(s: &str) -> Square {
    s.parse().expect("test square should be valid")
}

// ---------------------------------------------------------------
// Starting position
// ---------------------------------------------------------------

#[test]
fn starting_position_landmarks() {
    let board = Board::new_standard();

    assert_eq!(
        board.get_piece_by_notation('a', 1),
        SquareContent::Piece(PieceKind::WhiteRook)
    );
    assert_eq!(
        board.get_piece_by_notation('e', 1),
        SquareContent::Piece(PieceKind::WhiteKing)
    );
    assert_eq!(
        board.get_piece_by_notation('d', 8),
        SquareContent::Piece(PieceKind::BlackQueen)
    );
}

#[test]
fn starting_position_black_pawns_on_rank_seven() {
    let board = Board::new_standard();

    for file in 'a'..='h' {
        assert_eq!(
            board.get_piece_by_notation(file, 7),
            SquareContent::Piece(PieceKind::BlackPawn),
            "expected black pawn on {file}7"
        );
    }
}

#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
fn starting_position_middle_ranks_empty(rank: i32) {
    let board = Board::new_standard();

    for file in 'a'..='h' {
        assert_eq!(
            board.get_piece_by_notation(file, rank),
            SquareContent::Empty,
            "expected {file}{rank} to be empty"
        );
    }
}

#[test]
fn starting_position_agrees_with_shakmaty() {
    let board = Board::new_standard();
    let reference = Chess::default();

    for square in Square::all() {
        let theirs = shakmaty::Square::from_coords(
            File::ALL[square.y() as usize],
            Rank::ALL[7 - square.x() as usize],
        );
        assert_eq!(
            board.piece_at(square),
            reference.board().piece_at(theirs).map(PieceKind::from),
            "mismatch on {square}"
        );
    }
}

// ---------------------------------------------------------------
// Bounds sentinel
// ---------------------------------------------------------------

#[test_case(-1, 3; "x below range")]
#[test_case(8, 3; "x above range")]
#[test_case(3, -1; "y below range")]
#[test_case(3, 8; "y above range")]
fn out_of_bounds_is_a_sentinel(x: i32, y: i32) {
    let board = Board::new_standard();
    let content = board.get_piece(x, y);

    assert_eq!(content, SquareContent::OutOfBounds);
    assert_ne!(content, SquareContent::Empty);
    assert_eq!(content.piece(), None);
}

// ---------------------------------------------------------------
// Moves
// ---------------------------------------------------------------

#[test]
fn capture_replaces_destination() {
    let mut board = Board::empty();
    board.set_piece(sq("a1"), PieceKind::WhiteRook);
    board.set_piece(sq("a2"), PieceKind::BlackPawn);

    let captured = board.move_piece(sq("a1"), sq("a2"));

    assert_eq!(captured, Some(PieceKind::BlackPawn));
    assert_eq!(board.get_piece_by_notation('a', 1), SquareContent::Empty);
    assert_eq!(
        board.get_piece_by_notation('a', 2),
        SquareContent::Piece(PieceKind::WhiteRook)
    );
    assert!(board.mask(PieceKind::BlackPawn).is_empty());
    assert_eq!(board.check_consistency(), Ok(()));
}

#[test]
fn move_and_back_restores_board_when_destination_was_empty() {
    let mut board = Board::new_standard();
    let before = board;

    board.move_piece(sq("g1"), sq("f3"));
    board.move_piece(sq("f3"), sq("g1"));

    assert_eq!(board, before);
}

#[test]
fn move_and_back_loses_captured_piece() {
    let mut board = Board::new_standard();

    board.move_piece(sq("d1"), sq("d7"));
    board.move_piece(sq("d7"), sq("d1"));

    // The queen is home, but the pawn it took is gone for good.
    assert_eq!(board.piece_at(sq("d1")), Some(PieceKind::WhiteQueen));
    assert_eq!(board.piece_at(sq("d7")), None);
    assert_ne!(board, Board::new_standard());
    assert_eq!(board.mask(PieceKind::BlackPawn).count(), 7);
}

#[test]
fn move_from_empty_square_changes_nothing() {
    let mut board = Board::new_standard();
    let before = board;

    assert_eq!(board.move_piece(sq("e5"), sq("e2")), None);

    for kind in PieceKind::ALL {
        assert_eq!(board.mask(kind), before.mask(kind));
    }
    assert_eq!(board.occupancy(), before.occupancy());
}

#[test]
fn notation_move_matches_coordinate_move() {
    let mut by_notation = Board::new_standard();
    let mut by_square = Board::new_standard();

    by_notation
        .move_piece_by_notation('b', 1, 'c', 3)
        .expect("valid notation");
    by_square.move_piece(sq("b1"), sq("c3"));

    assert_eq!(by_notation, by_square);
}

// ---------------------------------------------------------------
// Cloning
// ---------------------------------------------------------------

#[test]
fn clone_is_independent() {
    let original = Board::new_standard();
    let mut copy = original.clone();

    copy.move_piece(sq("e2"), sq("e4"));
    copy.remove_piece(sq("a8"));
    copy.set_piece(sq("d4"), PieceKind::BlackKnight);

    assert_eq!(original, Board::new_standard());
    assert_ne!(copy, original);
}

#[test]
fn clone_can_move_to_another_thread() {
    let original = Board::new_standard();
    let mut copy = original;

    let handle = std::thread::spawn(move || {
        copy.move_piece(sq("e7"), sq("e5"));
        copy
    });
    let moved = handle.join().expect("thread should not panic");

    assert_eq!(moved.piece_at(sq("e5")), Some(PieceKind::BlackPawn));
    assert_eq!(original.piece_at(sq("e7")), Some(PieceKind::BlackPawn));
}

// ---------------------------------------------------------------
// Scripts and rendering together
// ---------------------------------------------------------------

#[test]
fn scripted_opening_renders() {
    let mut board = Board::new_standard();
    board
        .play_script("e2e4 e7e5. g1f3 b8c6")
        .expect("valid script");

    assert_eq!(
        board.render(),
        "r.bqkbnr\n\
         pppp.ppp\n\
         ..n.....\n\
         ....p...\n\
         ....P...\n\
         .....N..\n\
         PPPP.PPP\n\
         RNBQKB.R"
    );
}
