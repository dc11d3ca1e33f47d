//! `FROM` clause AST types: table sources, aliases and joins.

use super::condition::{ComparisonOp, ConditionExpress};
use super::query::{FunctionCall, Query};
use super::value::ColumnRef;
use crate::lexer::Position;

/// A `FROM` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    /// Position of the first source.
    pub pos: Position,
    /// A parenthesized subquery source.
    pub subquery: Option<SubquerySource>,
    /// Comma-separated table sources.
    pub tables: Vec<TableExpression>,
    /// Joins, in source order.
    pub joins: Vec<Join>,
    /// The `WHERE` condition.
    pub where_clause: Option<ConditionExpress>,
}

/// `(SELECT ...) [AS] alias`
#[derive(Debug, Clone, PartialEq)]
pub struct SubquerySource {
    /// Position of the opening parenthesis.
    pub pos: Position,
    /// The nested query.
    pub query: Box<Query>,
    /// The alias.
    pub alias: Option<String>,
}

/// A table source with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExpression {
    /// Where the source starts.
    pub pos: Position,
    /// The source.
    pub source: TableSource,
    /// The alias.
    pub alias: Option<TableAlias>,
}

/// What a table expression reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    /// `name` or `schema.name`
    Table {
        /// The schema qualifier.
        schema: Option<String>,
        /// The table name.
        name: String,
    },
    /// A set-returning function such as `jsonb_each(data)`.
    Function(FunctionCall),
}

/// `[AS] name` or `AS name (col, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    /// The alias.
    pub name: String,
    /// Column renames; empty for a plain alias.
    pub columns: Vec<String>,
}

/// Join kinds, one per join phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Bare `JOIN`.
    Join,
    /// `INNER JOIN`
    Inner,
    /// `LEFT [OUTER] JOIN`
    Left,
    /// `RIGHT [OUTER] JOIN`
    Right,
    /// `FULL [OUTER] JOIN`
    FullOuter,
    /// `CROSS JOIN`
    Cross,
}

impl JoinKind {
    /// Parses a whitespace-normalized, upper-cased join phrase.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        match phrase {
            "JOIN" => Some(Self::Join),
            "INNER JOIN" => Some(Self::Inner),
            "LEFT JOIN" | "LEFT OUTER JOIN" => Some(Self::Left),
            "RIGHT JOIN" | "RIGHT OUTER JOIN" => Some(Self::Right),
            "FULL JOIN" | "FULL OUTER JOIN" => Some(Self::FullOuter),
            "CROSS JOIN" => Some(Self::Cross),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }

    /// Returns true for `JOIN` and `INNER JOIN`.
    #[must_use]
    pub const fn is_inner(&self) -> bool {
        matches!(self, Self::Join | Self::Inner)
    }
}

/// A join against the sources before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Position of the join phrase.
    pub pos: Position,
    /// The join kind.
    pub kind: JoinKind,
    /// The right-hand source.
    pub table: TableExpression,
    /// The `ON` constraint; absent only for `CROSS JOIN`.
    pub on: Option<JoinConstraint>,
}

/// The `ON` part of a join.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    /// `ON a.id = b.id`: a single comparison between two qualified columns.
    Columns {
        /// Left column.
        left: ColumnRef,
        /// The comparison.
        operator: ComparisonOp,
        /// Right column.
        right: ColumnRef,
    },
    /// Any other condition.
    Condition(ConditionExpress),
}
