//! Query-level AST types: the statement, its projection list and set
//! operations.

use super::from::FromClause;
use super::value::{ColumnRef, Expression};
use crate::lexer::Position;

/// A complete `SELECT` statement.
///
/// Nested queries (subqueries and set-operation operands) are owned by
/// their parent node and have their own scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Position of the `SELECT` keyword.
    pub pos: Position,
    /// Everything after `SELECT`.
    pub select: SelectCmd,
}

/// The body of a `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectCmd {
    /// Where the body starts.
    pub pos: Position,
    /// `DISTINCT` or `DISTINCT ON (...)`, which owns the projection list.
    pub distinct: Option<Distinct>,
    /// Whether `ALL` was given.
    pub all: bool,
    /// The projection list when there is no `DISTINCT`.
    pub expression: Option<SelectExpression>,
    /// The `FROM` clause.
    pub from: Option<FromClause>,
    /// A trailing `UNION`, `INTERSECT` or `EXCEPT`.
    pub set_operation: Option<SetOperation>,
}

impl SelectCmd {
    /// Returns the projection list, wherever it was parsed.
    #[must_use]
    pub fn projection(&self) -> Option<&SelectExpression> {
        match &self.distinct {
            Some(Distinct::On { expression, .. } | Distinct::Plain { expression, .. }) => {
                Some(expression)
            }
            None => self.expression.as_ref(),
        }
    }
}

/// Set operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    /// `UNION`
    Union,
    /// `INTERSECT`
    Intersect,
    /// `EXCEPT`
    Except,
}

impl SetOperator {
    /// Parses a set operator keyword, ignoring case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
        }
    }
}

/// `ALL` or `DISTINCT` after a set operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    /// `ALL`
    All,
    /// `DISTINCT`
    Distinct,
}

/// A set operation and its right operand.
///
/// The chain is right-recursive: `A UNION B UNION C` is
/// `A UNION (B UNION C)`. This matches left-associative grouping whenever the
/// operators are the same, but can differ when `UNION`, `INTERSECT` and
/// `EXCEPT` are mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOperation {
    /// Position of the operator.
    pub pos: Position,
    /// The operator.
    pub operator: SetOperator,
    /// `ALL` or `DISTINCT`, if given.
    pub quantifier: Option<SetQuantifier>,
    /// The right operand, which may carry its own set operation.
    pub query: Box<Query>,
}

/// `DISTINCT` forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Distinct {
    /// `DISTINCT ON (c1, c2) projection`
    On {
        /// Position of `ON`.
        pos: Position,
        /// The columns inside the parentheses.
        columns: Vec<ColumnRef>,
        /// The projection list that follows.
        expression: SelectExpression,
    },
    /// `DISTINCT projection`
    Plain {
        /// Where the projection list starts.
        pos: Position,
        /// The projection list.
        expression: SelectExpression,
    },
}

/// A projection list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpression {
    /// Where the list starts.
    pub pos: Position,
    /// The projection items, never empty.
    pub columns: Vec<AsExpression>,
}

/// A projection item with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct AsExpression {
    /// Where the item starts.
    pub pos: Position,
    /// The item.
    pub item: SelectItem,
    /// The alias, with or without `AS`.
    pub alias: Option<String>,
}

/// What a projection item (or a function argument) can be.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `c` or `t.c`
    Column(ColumnRef),
    /// `c[1]` or `t.c[1]`
    Index {
        /// The subscripted column.
        column: ColumnRef,
        /// The subscript.
        index: i64,
    },
    /// `*`
    Wildcard,
    /// `t.*`
    QualifiedWildcard(String),
    /// `COUNT(*)`, `SUM(x)`, ...
    Aggregate(Aggregate),
    /// `f(args...)`
    Function(FunctionCall),
    /// A literal or path chain, e.g. `'a'` or `data->>'name'`.
    Expression(Expression),
    /// `(SELECT ...)`
    Subquery(Box<Query>),
}

/// A function call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Position of the function name.
    pub pos: Position,
    /// The function name as written.
    pub name: String,
    /// The arguments, which may themselves be calls or subqueries.
    pub args: Vec<SelectItem>,
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// `SUM`
    Sum,
    /// `MIN`
    Min,
    /// `MAX`
    Max,
    /// `AVG`
    Avg,
    /// `COUNT`
    Count,
}

impl AggregateFunction {
    /// Parses an aggregate name, ignoring case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "SUM" => Some(Self::Sum),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            "AVG" => Some(Self::Avg),
            "COUNT" => Some(Self::Count),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
        }
    }
}

/// The argument of an aggregate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateArgument {
    /// A single column.
    Column(ColumnRef),
    /// `*`
    Star,
}

/// An aggregate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// Position of the function name.
    pub pos: Position,
    /// The aggregate function.
    pub function: AggregateFunction,
    /// Its argument.
    pub argument: AggregateArgument,
}
