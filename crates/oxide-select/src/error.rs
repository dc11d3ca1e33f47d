//! Crate-level error type and diagnostic rendering.

use std::fmt::Write as _;

use thiserror::Error;

use crate::lexer::{LexError, Position};
use crate::parser::ParseError;

/// Any failure to turn SQL text into a [`Query`](crate::ast::Query).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a character no lexer rule matches.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type alias for parsing.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns where the failure was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(err) => err.pos,
            Self::Parse(err) => err.pos,
        }
    }

    /// Renders the error against the input it came from: the message, the
    /// offending line and carets under the failing token.
    ///
    /// A parse error underlines the whole token, up to the end of its first
    /// line. A lex error and the end of input get a single caret.
    ///
    /// ```
    /// let sql = "SELECT * FROM";
    /// let err = oxide_select::parse(sql).unwrap_err();
    /// assert_eq!(
    ///     err.report(sql),
    ///     "error: expected table name, function call or subquery, found end of input\n \
    ///      --> line 1, column 14\n  |\n1 | SELECT * FROM\n  |              ^\n"
    /// );
    /// ```
    #[must_use]
    pub fn report(&self, source: &str) -> String {
        let pos = self.position();
        let line = source.lines().nth(pos.line.saturating_sub(1)).unwrap_or("");
        let number = pos.line.to_string();
        let gutter = " ".repeat(number.len());

        let mut out = String::new();
        let _ = writeln!(out, "error: {}", self.summary());
        let _ = writeln!(out, "{gutter}--> line {}, column {}", pos.line, pos.column);
        let _ = writeln!(out, "{gutter} |");
        let _ = writeln!(out, "{number} | {line}");
        let _ = writeln!(
            out,
            "{gutter} | {}{}",
            " ".repeat(pos.column.saturating_sub(1)),
            "^".repeat(self.underline_width(source))
        );
        out
    }

    fn underline_width(&self, source: &str) -> usize {
        match self {
            Self::Lex(_) => 1,
            Self::Parse(err) => source
                .get(err.span.start..err.span.end)
                .map_or(0, |text| text.chars().take_while(|&c| c != '\n').count())
                .max(1),
        }
    }

    fn summary(&self) -> String {
        match self {
            Self::Lex(err) => format!("unrecognized input {:?}", err.found),
            Self::Parse(err) => format!("expected {}, found {}", err.expected, err.found),
        }
    }
}
