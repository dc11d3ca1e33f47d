//! Token types for the SQL lexer.

use std::fmt;

use super::{Position, Span};

/// The class of a token.
///
/// Each class corresponds to one named rule of the lexer rule table. The
/// names returned by [`TokenKind::name`] are the stable contract between a
/// rule table and the grammar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Clause and operator keywords (`SELECT`, `FROM`, `AND`, `LIKE`, ...).
    Keyword,
    /// Subquery quantifiers: `ANY`, `ALL`, `EXISTS`.
    SubQueryOperator,
    /// Built-in array and JSONB functions (`ARRAY_LENGTH`, `JSONB_EACH`, ...).
    Function,
    /// Trailing clauses that are recognized only to be skipped.
    Ignore,
    /// `UNION`, `INTERSECT`, `EXCEPT`.
    SetOperation,
    /// `SUM`, `MIN`, `MAX`, `AVG`, `COUNT`.
    Aggregate,
    /// Join phrases (`JOIN`, `LEFT JOIN`, `FULL OUTER JOIN`, ...).
    Join,
    /// Identifier.
    Ident,
    /// Float literal; always contains a decimal point.
    Float,
    /// Integer literal.
    Int,
    /// Quoted string literal; the token text excludes the quotes.
    String,
    /// Operators, including multi-character ones like `->>` and `::`.
    Operator,
    /// Any other punctuation character, including `;`, `[` and `]`.
    Punct,
    /// Comment; never surfaced to the parser.
    Comment,
    /// Whitespace; never surfaced to the parser.
    Whitespace,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// All kinds that a rule table may name, in default priority order.
    pub const RULE_KINDS: [Self; 15] = [
        Self::Keyword,
        Self::SubQueryOperator,
        Self::Function,
        Self::Ignore,
        Self::SetOperation,
        Self::Aggregate,
        Self::Join,
        Self::Ident,
        Self::Float,
        Self::Int,
        Self::Operator,
        Self::String,
        Self::Comment,
        Self::Punct,
        Self::Whitespace,
    ];

    /// Returns the rule name of this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::SubQueryOperator => "SubQueryOperators",
            Self::Function => "Functions",
            Self::Ignore => "Ignore",
            Self::SetOperation => "SetOperations",
            Self::Aggregate => "Aggregate",
            Self::Join => "Joins",
            Self::Ident => "Ident",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::String => "String",
            Self::Operator => "Operators",
            Self::Punct => "Punct",
            Self::Comment => "Comment",
            Self::Whitespace => "Whitespace",
            Self::Eof => "EOF",
        }
    }

    /// Looks up a kind by its rule name.
    ///
    /// `EOF` is not a rule name: end of input is produced by the lexer
    /// itself.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::RULE_KINDS.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns true for kinds that are dropped from the token stream.
    #[must_use]
    pub const fn is_elided(&self) -> bool {
        matches!(self, Self::Comment | Self::Whitespace)
    }

    /// Returns true for the case-insensitive keyword classes.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(
            self,
            Self::Keyword
                | Self::SubQueryOperator
                | Self::Function
                | Self::Ignore
                | Self::SetOperation
                | Self::Aggregate
                | Self::Join
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token with its location in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The class of the token.
    pub kind: TokenKind,
    /// The token text. String literals exclude their quotes.
    pub text: String,
    /// The byte range of the whole lexeme.
    pub span: Span,
    /// Where the lexeme starts.
    pub pos: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            pos,
        }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(pos.offset, pos.offset), pos)
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this token belongs to a keyword class and spells `word`,
    /// ignoring case.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind.is_word() && self.text.eq_ignore_ascii_case(word)
    }

    /// Returns true if this is the operator or punctuation `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Punct) && self.text == symbol
    }

    /// Returns the text with runs of whitespace collapsed and letters
    /// upper-cased, e.g. `left   join` becomes `LEFT JOIN`.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.text
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Describes the token for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => String::from("end of input"),
            TokenKind::String => format!("string '{}'", self.text),
            kind => format!("{} {:?}", kind.name(), self.text),
        }
    }
}
