//! Source location tracking for tokens and AST nodes.

use std::fmt;

/// Represents a span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A point in the source text.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
/// Every AST node stores the position of its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the position reached after reading `text` from here.
    #[must_use]
    pub fn advance(self, text: &str) -> Self {
        let mut next = self;
        for c in text.chars() {
            next.offset += c.len_utf8();
            if c == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5).is_empty());
    }

    #[test]
    fn test_position_advance_same_line() {
        let pos = Position::default().advance("SELECT ");
        assert_eq!(pos, Position::new(7, 1, 8));
    }

    #[test]
    fn test_position_advance_newline() {
        let pos = Position::default().advance("SELECT\n  a");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 4);
        assert_eq!(pos.offset, 10);
    }

    #[test]
    fn test_position_counts_chars_not_bytes() {
        let pos = Position::default().advance("'é'");
        assert_eq!(pos.offset, 4);
        assert_eq!(pos.column, 4);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(
            Position::new(14, 2, 3).to_string(),
            "line 2, column 3 (offset 14)"
        );
    }
}
