//! Condition tree AST types.
//!
//! Boolean conditions form three tiers: a [`ConditionExpress`] is an `OR` of
//! [`OrCondition`]s, each an `AND` of atomic [`Condition`]s. Every atomic
//! condition carries exactly one operator family in its [`Predicate`].

use super::query::{FunctionCall, Query};
use super::value::{ColumnRef, Expression, Value};
use crate::lexer::Position;

/// `c1 OR c2 OR ...`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionExpress {
    /// Where the condition starts.
    pub pos: Position,
    /// The `OR` branches, never empty.
    pub or: Vec<OrCondition>,
}

impl ConditionExpress {
    /// Returns the only atomic condition, if the tree has exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&Condition> {
        match self.or.as_slice() {
            [branch] => match branch.and.as_slice() {
                [condition] => Some(condition),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `c1 AND c2 AND ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OrCondition {
    /// Where the branch starts.
    pub pos: Position,
    /// The `AND` terms, never empty.
    pub and: Vec<Condition>,
}

/// An atomic condition, optionally negated with a leading `NOT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Where the condition starts, including `NOT`.
    pub pos: Position,
    /// Whether the condition is prefixed by `NOT`.
    pub negated: bool,
    /// The condition itself.
    pub kind: ConditionKind,
}

/// The shapes an atomic condition can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    /// A parenthesized boolean subexpression.
    Group(Box<ConditionExpress>),
    /// `EXISTS (SELECT ...)`
    Exists(Box<Query>),
    /// A bare operand used as a boolean, e.g. `WHERE active`.
    Truth(Operand),
    /// An operand tested by an operator.
    Predicate {
        /// The left operand.
        lhs: Operand,
        /// The operator and right side.
        predicate: Predicate,
    },
}

/// A left operand with its optional subscript and cast.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// Where the operand starts.
    pub pos: Position,
    /// The operand.
    pub target: LeftOperand,
    /// The subscript in `tags[1]`.
    pub index: Option<i64>,
    /// The type in `x::int`.
    pub cast: Option<String>,
}

/// What a left operand can be.
#[derive(Debug, Clone, PartialEq)]
pub enum LeftOperand {
    /// `c` or `t.c`
    Column(ColumnRef),
    /// A literal, path chain or parenthesized expression.
    Expression(Expression),
    /// `f(...)`
    Function(FunctionCall),
    /// `(SELECT ...)`
    Subquery(Box<Query>),
}

/// Comparison operators, including the array containment and overlap
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `=`
    Eq,
    /// `<>`
    NotEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<@`
    ContainedBy,
    /// `@>`
    Contains,
    /// `&&`
    Overlaps,
}

impl ComparisonOp {
    /// Parses an operator symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq),
            "<>" => Some(Self::NotEq),
            "!=" => Some(Self::BangEq),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::LtEq),
            ">=" => Some(Self::GtEq),
            "<@" => Some(Self::ContainedBy),
            "@>" => Some(Self::Contains),
            "&&" => Some(Self::Overlaps),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::ContainedBy => "<@",
            Self::Contains => "@>",
            Self::Overlaps => "&&",
        }
    }
}

/// The operator family of a condition and its right side.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `lhs op rhs`
    Comparison {
        /// The operator.
        op: ComparisonOp,
        /// The right side.
        rhs: RightOperand,
    },
    /// `[NOT] LIKE` and `[NOT] ILIKE`
    Like {
        /// `NOT LIKE` / `NOT ILIKE`
        negated: bool,
        /// `ILIKE`
        case_insensitive: bool,
        /// The pattern.
        rhs: RightOperand,
    },
    /// `[NOT] SIMILAR TO`
    SimilarTo {
        /// `NOT SIMILAR TO`
        negated: bool,
        /// The pattern.
        rhs: RightOperand,
    },
    /// `IS [NOT] value`
    Is {
        /// `IS NOT`
        negated: bool,
        /// The tested value, usually `NULL`.
        value: Value,
    },
    /// `[NOT] BETWEEN low AND high`
    Between {
        /// `NOT BETWEEN`
        negated: bool,
        /// Lower bound.
        low: Value,
        /// Upper bound.
        high: Value,
    },
    /// `[NOT] IN (...)`
    In {
        /// `NOT IN`
        negated: bool,
        /// The candidates.
        rhs: InList,
    },
}

/// The right side of `IN`.
#[derive(Debug, Clone, PartialEq)]
pub enum InList {
    /// `(v1, v2, ...)`, never empty.
    Values(Vec<Value>),
    /// `(SELECT ...)`
    Subquery(Box<Query>),
}

/// Subquery quantifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `ANY`
    Any,
    /// `ALL`
    All,
    /// `EXISTS`
    Exists,
}

impl Quantifier {
    /// Parses a quantifier keyword, ignoring case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "ANY" => Some(Self::Any),
            "ALL" => Some(Self::All),
            "EXISTS" => Some(Self::Exists),
            _ => None,
        }
    }
}

/// The right side of a comparison or pattern match.
#[derive(Debug, Clone, PartialEq)]
pub struct RightOperand {
    /// Where the right side starts, including the quantifier.
    pub pos: Position,
    /// `ANY`, `ALL` or `EXISTS`.
    pub quantifier: Option<Quantifier>,
    /// The operand.
    pub target: RightTarget,
    /// The type in `x::int`.
    pub cast: Option<String>,
}

/// What a right operand can be.
#[derive(Debug, Clone, PartialEq)]
pub enum RightTarget {
    /// `c` or `t.c`
    Column(ColumnRef),
    /// A single value.
    Value(Value),
    /// `(v1, v2, ...)`, never empty.
    List(Vec<Value>),
    /// `f(...)`
    Function(FunctionCall),
    /// `(SELECT ...)`
    Subquery(Box<Query>),
}
