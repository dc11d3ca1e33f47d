//! SQL Dialect support.
//!
//! A dialect decides how input is tokenized and how deeply it may nest. The
//! grammar itself is the same for every dialect.

mod postgres;

pub use postgres::PostgresDialect;

use crate::lexer::LexerRules;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the lexer rule table.
    ///
    /// Entries are tried in order and the first match wins. Every entry must
    /// name one of the token classes the grammar knows.
    fn lexer_rules(&self) -> LexerRules {
        LexerRules::default()
    }

    /// Returns the maximum nesting of subqueries, groups and call arguments.
    fn max_nesting_depth(&self) -> usize {
        DEFAULT_MAX_DEPTH
    }
}
