use log::debug;
use thiserror::Error;

use crate::board::{Board, PieceKind, Square, SquareParseError};

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("move must be 4 characters (e.g., 'e2e4'), got '{0}'")]
    BadMove(String),
    #[error("invalid square in move '{token}': {source}")]
    BadSquare {
        token: String,
        #[source]
        source: SquareParseError,
    },
}

/// One parsed script move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptMove {
    pub from: Square,
    pub to: Square,
}

/// Parse a move script into moves.
///
/// Format:
/// - Each move is a source and destination square (e.g., "e2e4")
/// - Whitespace or periods separate moves
///
/// Examples:
/// - `"e2e4 e7e5"` - two moves
/// - `"e2e4. e7e5."` - same
pub fn parse_script(script: &str) -> Result<Vec<ScriptMove>, ScriptError> {
    script
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<ScriptMove, ScriptError> {
    if token.chars().count() != 4 || !token.is_ascii() {
        return Err(ScriptError::BadMove(token.to_string()));
    }
    let square = |s: &str| {
        s.parse::<Square>().map_err(|source| ScriptError::BadSquare {
            token: token.to_string(),
            source,
        })
    };
    Ok(ScriptMove {
        from: square(&token[..2])?,
        to: square(&token[2..])?,
    })
}

impl Board {
    /// Parse `script` and play every move with [`Board::move_piece`].
    ///
    /// Nothing is played unless the whole script parses. Returns the pieces
    /// captured along the way, in order.
    pub fn play_script(&mut self, script: &str) -> Result<Vec<PieceKind>, ScriptError> {
        let moves = parse_script(script)?;
        debug!("playing {} scripted moves", moves.len());
        Ok(moves
            .into_iter()
            .filter_map(|mv| self.move_piece(mv.from, mv.to))
            .collect())
    }
}
