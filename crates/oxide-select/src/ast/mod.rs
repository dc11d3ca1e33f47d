//! Abstract Syntax Tree (AST) types for `SELECT` statements.
//!
//! Every node records the [`Position`](crate::lexer::Position) of its first
//! token. Nodes are built once, top-down, and own their children.

mod condition;
mod from;
mod query;
mod value;

pub use condition::{
    ComparisonOp, Condition, ConditionExpress, ConditionKind, InList, LeftOperand, Operand,
    OrCondition, Predicate, Quantifier, RightOperand, RightTarget,
};
pub use from::{
    FromClause, Join, JoinConstraint, JoinKind, SubquerySource, TableAlias, TableExpression,
    TableSource,
};
pub use query::{
    Aggregate, AggregateArgument, AggregateFunction, AsExpression, Distinct, FunctionCall, Query,
    SelectCmd, SelectExpression, SelectItem, SetOperation, SetOperator, SetQuantifier,
};
pub use value::{ArrayLiteral, ColumnRef, Expression, JsonPath, PathOperator, Value, ValueKind};
