//! # oxide-select
//!
//! A recursive-descent parser for PostgreSQL/H2-flavoured `SELECT`
//! statements.
//!
//! This crate provides:
//! - A regex-driven lexer whose rule table can be swapped per [`Dialect`]
//! - A hand-written parser with two tokens of lookahead
//! - A position-annotated AST covering projections, joins, conditions,
//!   JSONB path chains, `ARRAY[...]` literals and set operations
//!
//! Trailing `GROUP BY`, `ORDER BY`, `HAVING`, `LIMIT`, `FETCH`, `OFFSET` and
//! `OVER` clauses are recognised and skipped.
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_select::ast::{JoinKind, SelectItem};
//!
//! let query = oxide_select::parse(
//!     "SELECT u.name, COUNT(*) FROM users u JOIN orders o ON u.id = o.user_id",
//! )
//! .unwrap();
//!
//! let projection = query.select.projection().unwrap();
//! assert!(matches!(projection.columns[1].item, SelectItem::Aggregate(_)));
//!
//! let from = query.select.from.unwrap();
//! assert_eq!(from.joins[0].kind, JoinKind::Join);
//! ```
//!
//! ## Diagnostics
//!
//! Every failure carries a line and column, and can be rendered against the
//! input:
//!
//! ```rust
//! let sql = "SELECT name FROM";
//! let err = oxide_select::parse(sql).unwrap_err();
//! assert_eq!(err.position().column, 17);
//! println!("{}", err.report(sql));
//! ```

use std::sync::LazyLock;

pub mod ast;
pub mod dialect;
mod error;
pub mod lexer;
pub mod parser;

pub use ast::Query;
pub use dialect::{Dialect, PostgresDialect};
pub use error::{Error, Result};
pub use lexer::{Lexer, LexerRules, Position, RuleError, Token, TokenKind};
pub use parser::{ParseError, Parser};

use lexer::CompiledRules;

/// A reusable parser bound to one dialect.
///
/// The compiled rule table is read-only, so a `SelectParser` can be shared
/// across threads and used for any number of inputs.
#[derive(Debug, Clone)]
pub struct SelectParser {
    rules: CompiledRules,
    max_depth: usize,
    dialect: &'static str,
}

impl SelectParser {
    /// Creates a parser for the default PostgreSQL dialect.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in rule table is covered by tests.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dialect(&PostgresDialect).expect("built-in rule table compiles")
    }

    /// Creates a parser for a custom dialect.
    ///
    /// # Errors
    ///
    /// Returns a `RuleError` if the dialect's rule table is invalid.
    pub fn with_dialect<D: Dialect + ?Sized>(dialect: &D) -> std::result::Result<Self, RuleError> {
        let rules = dialect.lexer_rules().compile()?;
        tracing::debug!(
            dialect = dialect.name(),
            rules = rules.len(),
            "compiled lexer rules"
        );
        Ok(Self {
            rules,
            max_depth: dialect.max_nesting_depth(),
            dialect: dialect.name(),
        })
    }

    /// Returns a lazy token stream for `sql`.
    #[must_use]
    pub fn tokenize<'a>(&'a self, sql: &'a str) -> Lexer<'a> {
        Lexer::new(sql, &self.rules)
    }

    /// Parses one `SELECT` statement, optionally followed by `;`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] if the input contains a character no rule
    /// matches, or [`Error::Parse`] at the first token the grammar rejects.
    pub fn parse(&self, sql: &str) -> Result<Query> {
        let result = self.parse_inner(sql);
        match &result {
            Ok(_) => tracing::debug!(dialect = self.dialect, len = sql.len(), "parsed query"),
            Err(err) => tracing::debug!(
                dialect = self.dialect,
                line = err.position().line,
                column = err.position().column,
                error = %err,
                "parse failed"
            ),
        }
        result
    }

    fn parse_inner(&self, sql: &str) -> Result<Query> {
        let tokens = self.tokenize(sql).tokenize()?;
        let query = Parser::new(tokens).with_max_depth(self.max_depth).parse()?;
        Ok(query)
    }
}

impl Default for SelectParser {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_PARSER: LazyLock<SelectParser> = LazyLock::new(SelectParser::new);

/// Parses one `SELECT` statement with the default dialect.
///
/// # Errors
///
/// See [`SelectParser::parse`].
pub fn parse(sql: &str) -> Result<Query> {
    DEFAULT_PARSER.parse(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parser_is_shareable() {
        assert_send_sync::<SelectParser>();
        let parser = std::sync::Arc::new(SelectParser::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = std::sync::Arc::clone(&parser);
                std::thread::spawn(move || parser.parse(&format!("SELECT {i} FROM t")).is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_depth_limit_from_dialect() {
        struct Shallow;
        impl Dialect for Shallow {
            fn name(&self) -> &'static str {
                "shallow"
            }
            fn max_nesting_depth(&self) -> usize {
                2
            }
        }
        let parser = SelectParser::with_dialect(&Shallow).unwrap();
        assert!(parser.parse("SELECT (SELECT 1)").is_ok());
        let err = parser.parse("SELECT (SELECT (SELECT 1))").unwrap_err();
        assert!(matches!(err, Error::Parse(ref e) if e.expected.contains("nesting")));

        let unions = ["SELECT a->'b'->'c'->'d' FROM t"; 10].join(" UNION ");
        assert!(parser.parse(&unions).is_ok());
    }

    #[test]
    fn test_invalid_dialect_rules() {
        struct Broken;
        impl Dialect for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }
            fn lexer_rules(&self) -> LexerRules {
                LexerRules::empty().rule("Ident", "[a-z")
            }
        }
        assert!(matches!(
            SelectParser::with_dialect(&Broken),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_lex_error_surfaces() {
        let err = parse("SELECT `a` FROM t").unwrap_err();
        assert!(matches!(err, Error::Lex(_)));
        assert_eq!(err.position().column, 8);
    }
}
