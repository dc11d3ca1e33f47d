//! PostgreSQL dialect.

use super::Dialect;

/// PostgreSQL flavoured SQL: JSONB path operators, array functions and
/// `ILIKE`/`SIMILAR TO` predicates.
///
/// This is the dialect [`SelectParser::new`](crate::SelectParser::new) uses.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }
}
