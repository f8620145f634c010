use std::fmt;
use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{Board, Square};

/// Glyph for a marked square holding a piece.
pub const MARK_OCCUPIED: char = '+';
/// Glyph for a marked empty square.
pub const MARK_EMPTY: char = '*';
/// Glyph for an unmarked empty square.
pub const EMPTY: char = '.';

/// Board rendering with a set of highlighted squares.
///
/// Marked squares show [`MARK_OCCUPIED`] or [`MARK_EMPTY`] instead of their
/// piece glyph.
#[derive(Debug, Clone, Copy)]
pub struct Marked<'a> {
    board: &'a Board,
    marks: &'a [Square],
}

impl fmt::Display for Marked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.board, self.marks)
    }
}

/// 8 rows from rank 8 down to rank 1, files a to h, no trailing newline.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, &[])
    }
}

impl Board {
    /// Plain text grid, one character per square.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Grid with `marks` highlighted.
    pub fn render_marked(&self, marks: &[Square]) -> String {
        self.marked(marks).to_string()
    }

    /// Displayable view with `marks` highlighted.
    pub fn marked<'a>(&'a self, marks: &'a [Square]) -> Marked<'a> {
        Marked { board: self, marks }
    }

    /// Print the grid to stdout.
    pub fn print(&self) -> Result<(), RenderError> {
        print_to(&mut io::stdout(), self, &[])
    }
}

fn write_grid(w: &mut impl fmt::Write, board: &Board, marks: &[Square]) -> fmt::Result {
    for (i, square) in Square::all().enumerate() {
        if i > 0 && square.y() == 0 {
            w.write_char('\n')?;
        }
        w.write_char(square_glyph(board, square, marks))?;
    }
    Ok(())
}

fn square_glyph(board: &Board, square: Square, marks: &[Square]) -> char {
    let piece = board.piece_at(square);
    if marks.contains(&square) {
        return if piece.is_some() {
            MARK_OCCUPIED
        } else {
            MARK_EMPTY
        };
    }
    piece.map_or(EMPTY, |kind| kind.glyph())
}

/// Error type for printing a board.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write board: {0}")]
    Io(#[from] io::Error),
}

/// Write the grid plus a trailing newline to any writer.
pub fn print_to(w: &mut impl Write, board: &Board, marks: &[Square]) -> Result<(), RenderError> {
    writeln!(w, "{}", board.marked(marks))?;
    w.flush()?;
    Ok(())
}

/// Terminal display printing the plain grid with rank and file labels.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

impl BoardDisplay for TerminalDisplay {
    type Error = RenderError;

    fn show(&mut self, board: &Board, marks: &[Square]) -> Result<(), Self::Error> {
        render_labelled(&mut io::stdout(), board, marks)
    }
}

/// Grid framed with rank numbers and file letters. Extracted for testability.
fn render_labelled(
    w: &mut impl Write,
    board: &Board,
    marks: &[Square],
) -> Result<(), RenderError> {
    let grid = board.render_marked(marks);
    for (row, line) in grid.lines().enumerate() {
        writeln!(w, " {} {line}", 8 - row)?;
    }
    writeln!(w, "   abcdefgh")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    const STANDARD: &str = "rnbqkbnr\n\
                            pppppppp\n\
                            ........\n\
                            ........\n\
                            ........\n\
                            ........\n\
                            PPPPPPPP\n\
                            RNBQKBNR";

    fn sq(s: &str) -> Square {
        s.parse().expect("test square should be valid")
    }

    #[test]
    fn render_standard_position() {
        assert_eq!(Board::new_standard().render(), STANDARD);
    }

    #[test]
    fn render_empty_board() {
        let expected = vec!["........"; 8].join("\n");
        assert_eq!(Board::empty().render(), expected);
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let output = Board::new_standard().render();
        assert_eq!(output.lines().count(), 8);
        assert!(!output.ends_with('\n'));
        assert!(output.lines().all(|line| line.len() == 8));
    }

    #[test]
    fn render_marked_overrides_glyphs() {
        let board = Board::new_standard();

        let output = board.render_marked(&[sq("e2"), sq("e4"), sq("e8")]);
        let rows: Vec<&str> = output.lines().collect();

        assert_eq!(rows[0], "rnbq+bnr");
        assert_eq!(rows[4], "....*...");
        assert_eq!(rows[6], "PPPP+PPP");
    }

    #[test]
    fn render_marked_with_no_marks_matches_render() {
        let board = Board::new_standard();
        assert_eq!(board.render_marked(&[]), board.render());
    }

    #[test]
    fn render_single_piece() {
        let mut board = Board::empty();
        board.set_piece(sq("h1"), PieceKind::BlackKing);

        let output = board.render();

        assert_eq!(output.lines().last(), Some(".......k"));
        assert_eq!(output.chars().filter(|&c| c != '.' && c != '\n').count(), 1);
    }

    #[test]
    fn print_to_appends_newline() {
        let mut buf = Vec::new();
        print_to(&mut buf, &Board::new_standard(), &[]).expect("writing to buffer should succeed");
        let output = String::from_utf8(buf).expect("output should be valid UTF-8");
        assert_eq!(output, format!("{STANDARD}\n"));
    }

    #[test]
    fn labelled_output_contains_ranks_and_files() {
        let mut buf = Vec::new();
        render_labelled(&mut buf, &Board::new_standard(), &[sq("a1")])
            .expect("writing to buffer should succeed");
        let output = String::from_utf8(buf).expect("output should be valid UTF-8");

        assert!(output.starts_with(" 8 rnbqkbnr\n"));
        assert!(output.contains(" 1 +NBQKBNR\n"));
        assert!(output.ends_with("   abcdefgh\n"));
    }
}
