//! SQL Tokenizer implementation.

use super::error::LexError;
use super::rules::CompiledRules;
use super::{Position, Span, Token, TokenKind};

/// A lazy lexer driven by a compiled rule table.
///
/// The lexer yields tokens in source order, drops comments and whitespace,
/// and finishes with exactly one [`TokenKind::Eof`] token. Input that no
/// rule matches yields a single [`LexError`] and ends the stream.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The rule table used to classify lexemes.
    rules: &'a CompiledRules,
    /// The position of the next unread character.
    pos: Position,
    /// Set once EOF or an error has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str, rules: &'a CompiledRules) -> Self {
        Self {
            input,
            rules,
            pos: Position::default(),
            finished: false,
        }
    }

    /// Scans the next token, including elided ones.
    fn scan(&mut self) -> Result<Token, LexError> {
        let rest = &self.input[self.pos.offset..];
        let Some(first) = rest.chars().next() else {
            return Ok(Token::eof(self.pos));
        };

        let (kind, len) = self
            .rules
            .match_prefix(rest)
            .ok_or(LexError {
                pos: self.pos,
                found: first,
            })?;

        let lexeme = &rest[..len];
        let start = self.pos;
        self.pos = start.advance(lexeme);

        let text = if kind == TokenKind::String {
            unquote(lexeme)
        } else {
            lexeme
        };
        Ok(Token::new(
            kind,
            text,
            Span::new(start.offset, self.pos.offset),
            start,
        ))
    }

    /// Tokenizes the entire input.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered; no tokens are returned in
    /// that case.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.scan() {
                Ok(token) if token.kind.is_elided() => continue,
                Ok(token) => {
                    tracing::trace!(kind = %token.kind, text = %token.text, offset = token.pos.offset, "token");
                    self.finished = token.is_eof();
                    return Some(Ok(token));
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Strips the delimiting quotes of a string literal.
fn unquote(lexeme: &str) -> &str {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && (open == '\'' || open == '"') => {
            &lexeme[1..lexeme.len() - 1]
        }
        _ => lexeme,
    }
}
