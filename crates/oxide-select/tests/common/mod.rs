#![allow(dead_code)]

use oxide_select::ast::{
    Condition, ConditionExpress, FromClause, Query, SelectExpression, SelectItem,
};
use oxide_select::Error;

pub fn parse(sql: &str) -> Query {
    oxide_select::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> Error {
    oxide_select::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn projection(sql: &str) -> SelectExpression {
    parse(sql)
        .select
        .projection()
        .cloned()
        .unwrap_or_else(|| panic!("No projection in: {sql}"))
}

/// Returns the items of the projection list, without aliases.
pub fn items(sql: &str) -> Vec<SelectItem> {
    projection(sql).columns.into_iter().map(|c| c.item).collect()
}

pub fn from(sql: &str) -> FromClause {
    parse(sql)
        .select
        .from
        .unwrap_or_else(|| panic!("No FROM clause in: {sql}"))
}

pub fn where_clause(sql: &str) -> ConditionExpress {
    from(sql)
        .where_clause
        .unwrap_or_else(|| panic!("No WHERE clause in: {sql}"))
}

/// Returns the `WHERE` clause of `sql`, which must be a single condition.
pub fn first_condition(sql: &str) -> Condition {
    where_clause(sql)
        .single()
        .cloned()
        .unwrap_or_else(|| panic!("Expected a single condition in: {sql}"))
}
