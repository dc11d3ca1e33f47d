//! SQL Parser implementation.
//!
//! A recursive-descent parser over a token vector. Alternatives are tried in
//! a fixed order and chosen by looking at most two tokens past the current
//! one; a consumed token is never given back.

use super::error::ParseError;
use crate::ast::Query;
use crate::lexer::{Position, Token, TokenKind};

/// Default bound on nested queries, groups and call arguments.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How far past the current token the grammar may look.
const LOOKAHEAD: usize = 2;

/// SQL Parser.
///
/// A parser is built for one token stream and consumed by [`Parser::parse`].
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current token.
    cursor: usize,
    /// Returned for reads past the end of `tokens`.
    eof: Token,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser for a token stream produced by the lexer.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or_else(Position::default, |t| t.pos);
        Self {
            tokens,
            cursor: 0,
            eof: Token::eof(end),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting bound.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete statement: a query, an optional `;`, then the end
    /// of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first token the grammar rejects.
    pub fn parse(mut self) -> Result<Query, ParseError> {
        tracing::trace!(tokens = self.tokens.len(), "parsing query");
        let query = self.parse_query()?;
        self.eat_symbol(";");
        if !self.current().is_eof() {
            return Err(self.error("end of input"));
        }
        Ok(query)
    }

    // ---- navigation ----

    /// Returns the token `n` places past the current one.
    pub(super) fn peek_nth(&self, n: usize) -> &Token {
        debug_assert!(n <= LOOKAHEAD);
        self.tokens.get(self.cursor + n).unwrap_or(&self.eof)
    }

    pub(super) fn current(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Consumes the current token and returns it.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    pub(super) fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(super) fn check_keyword(&self, word: &str) -> bool {
        self.current().is_keyword(word)
    }

    pub(super) fn check_symbol(&self, symbol: &str) -> bool {
        self.current().is_symbol(symbol)
    }

    /// Consumes the keyword if it is current.
    pub(super) fn eat_keyword(&mut self, word: &str) -> bool {
        let found = self.check_keyword(word);
        if found {
            self.advance();
        }
        found
    }

    /// Consumes the symbol if it is current.
    pub(super) fn eat_symbol(&mut self, symbol: &str) -> bool {
        let found = self.check_symbol(symbol);
        if found {
            self.advance();
        }
        found
    }

    pub(super) fn expect_keyword(&mut self, word: &str) -> Result<Token, ParseError> {
        if self.check_keyword(word) {
            Ok(self.advance())
        } else {
            Err(self.error(word))
        }
    }

    pub(super) fn expect_symbol(&mut self, symbol: &str) -> Result<Token, ParseError> {
        if self.check_symbol(symbol) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("'{symbol}'")))
        }
    }

    /// Expects an identifier. Function and aggregate names are accepted too,
    /// so `t.count` or `AS sum` read naturally.
    pub(super) fn expect_name(&mut self) -> Result<String, ParseError> {
        if is_name(self.current()) {
            Ok(self.advance().text)
        } else {
            Err(self.error("identifier"))
        }
    }

    pub(super) fn expect_int(&mut self) -> Result<i64, ParseError> {
        if !self.check_kind(TokenKind::Int) {
            return Err(self.error("integer"));
        }
        let value = self
            .current()
            .text
            .parse()
            .map_err(|_| self.error("integer that fits in 64 bits"))?;
        self.advance();
        Ok(value)
    }

    /// Builds an error pointing at the current token.
    pub(super) fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError::unexpected(expected, self.current())
    }

    // ---- shared productions ----

    /// Parses one or more items separated by commas.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.eat_symbol(",") {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Runs `f` one nesting level deeper.
    pub(super) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::too_deep(self.max_depth, self.current()));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Skips an ignored clause (`ORDER BY`, `LIMIT`, ...) if one starts here.
    ///
    /// Everything up to and including the next `;` is discarded. Skipping
    /// also stops, without consuming, at the end of input and at a `)` that
    /// closes a parenthesis opened before the clause.
    pub(super) fn skip_ignored_clause(&mut self) -> bool {
        if !self.check_kind(TokenKind::Ignore) {
            return false;
        }
        let start = self.current().pos;
        let clause = self.current().normalized();
        let mut open = 0usize;
        let mut skipped = 0usize;
        loop {
            let token = self.current();
            if token.is_eof() {
                break;
            }
            if token.is_symbol(";") {
                self.advance();
                skipped += 1;
                break;
            }
            if token.is_symbol("(") {
                open += 1;
            } else if token.is_symbol(")") {
                if open == 0 {
                    break;
                }
                open -= 1;
            }
            self.advance();
            skipped += 1;
        }
        tracing::debug!(
            clause = %clause,
            line = start.line,
            column = start.column,
            skipped,
            "skipped ignored clause"
        );
        true
    }

    /// Returns true if the token `n` places ahead is a JSONB path operator.
    pub(super) fn is_path_operator(&self, n: usize) -> bool {
        let token = self.peek_nth(n);
        token.kind == TokenKind::Operator
            && crate::ast::PathOperator::from_symbol(&token.text).is_some()
    }
}

/// Returns true for tokens that can name a column, table or alias.
pub(super) fn is_name(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Ident | TokenKind::Function | TokenKind::Aggregate
    )
}
