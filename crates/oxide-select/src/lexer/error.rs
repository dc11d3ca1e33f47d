//! Lexer error types.

use thiserror::Error;

use super::Position;

/// The input contains a character sequence that no rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input {found:?} at {pos}")]
pub struct LexError {
    /// Where the unmatched input starts.
    pub pos: Position,
    /// The first unmatched character.
    pub found: char,
}

/// A rule table that cannot be compiled.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The rule names a token class the grammar engine does not know.
    #[error("unknown token class: {0}")]
    UnknownClass(String),

    /// The rule pattern is not a valid regular expression.
    #[error("invalid pattern for rule {name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The rule would match without consuming input.
    #[error("rule {0} matches the empty string")]
    MatchesEmpty(String),
}
