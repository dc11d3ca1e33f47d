//! Parser error types.

use thiserror::Error;

use crate::lexer::{Position, Span, Token};

/// The token stream does not match the grammar.
///
/// The error points at the first token no grammar alternative accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at {pos}")]
pub struct ParseError {
    /// What the parser was looking for.
    pub expected: String,
    /// A description of the offending token.
    pub found: String,
    /// Where the offending token starts.
    pub pos: Position,
    /// Byte range of the offending token; empty at the end of input.
    pub span: Span,
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self {
            expected: expected.into(),
            found: found.describe(),
            pos: found.pos,
            span: found.span,
        }
    }

    /// Creates an error for input nested deeper than `limit` levels.
    #[must_use]
    pub fn too_deep(limit: usize, found: &Token) -> Self {
        Self::unexpected(format!("at most {limit} levels of nesting"), found)
    }

    /// Returns true if the parser ran out of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.found == "end of input"
    }
}
