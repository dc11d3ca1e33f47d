//! Literal values, column references and JSONB path expressions.

use crate::lexer::Position;

/// A literal or identifier used as a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// Where the value starts.
    pub pos: Position,
    /// The value itself.
    pub kind: ValueKind,
    /// Array subscript, e.g. the `2` in `tags[2]`.
    pub index: Option<i64>,
}

/// The different kinds of [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal without its quotes.
    String(String),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// `NULL`.
    Null,
    /// `NOT NULL`.
    NotNull,
    /// A bare identifier used as a value.
    Ident(String),
    /// An `ARRAY[...]` literal.
    Array(ArrayLiteral),
}

/// An `ARRAY[...]` literal with optional `||` concatenation on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    /// The integer in `1 || ARRAY[...]`.
    pub prepend: Option<i64>,
    /// The elements, in source order.
    pub elements: Vec<Value>,
    /// The integer in `ARRAY[...] || 4`.
    pub append: Option<i64>,
}

impl Value {
    /// Returns the integer if this is an `Int` literal.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self.kind {
            ValueKind::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the text of a string literal or identifier.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) | ValueKind::Ident(s) => Some(s),
            _ => None,
        }
    }
}

/// A column reference, optionally qualified by a table name or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Where the reference starts.
    pub pos: Position,
    /// The qualifier in `t.c`.
    pub table: Option<String>,
    /// The column name.
    pub name: String,
}

impl ColumnRef {
    /// Returns true if the reference is `table.name`.
    #[must_use]
    pub fn is(&self, table: Option<&str>, name: &str) -> bool {
        self.table.as_deref() == table && self.name == name
    }
}

/// JSONB/array path operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOperator {
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
}

impl PathOperator {
    /// Parses an operator symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "->" => Some(Self::Arrow),
            "->>" => Some(Self::LongArrow),
            "#>" => Some(Self::HashArrow),
            "#>>" => Some(Self::HashLongArrow),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrow => "->",
            Self::LongArrow => "->>",
            Self::HashArrow => "#>",
            Self::HashLongArrow => "#>>",
        }
    }
}

/// A value optionally followed by a chain of path operators.
///
/// `data->'a'->>'b'` is `data -> ('a' ->> 'b')`: the chain is
/// right-associative.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Where the expression starts.
    pub pos: Position,
    /// The head of the chain.
    pub value: Value,
    /// The rest of the chain.
    pub path: Option<JsonPath>,
}

/// One step of a path chain.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPath {
    /// The operator joining the value to the rest.
    pub operator: PathOperator,
    /// The right-hand side.
    pub rest: Box<Expression>,
}

impl Expression {
    /// Iterates over the operators of the chain, left to right.
    pub fn operators(&self) -> impl Iterator<Item = PathOperator> + '_ {
        std::iter::successors(self.path.as_ref(), |step| step.rest.path.as_ref())
            .map(|step| step.operator)
    }

    /// Iterates over the values of the chain, left to right.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        std::iter::successors(Some(self), |expr| expr.path.as_ref().map(|p| &*p.rest))
            .map(|expr| &expr.value)
    }
}
