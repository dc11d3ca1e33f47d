//! Tests for the projection list: columns, wildcards, subscripts,
//! aggregates, function calls, literals, subqueries, aliases and DISTINCT.

mod common;
use common::*;

use oxide_select::ast::{
    AggregateArgument, AggregateFunction, Distinct, PathOperator, SelectItem, ValueKind,
};

#[test]
fn select_star() {
    assert_eq!(items("SELECT * FROM users"), [SelectItem::Wildcard]);
}

#[test]
fn select_bare_columns() {
    let items = items("SELECT id, name FROM users");
    assert_eq!(items.len(), 2);
    assert!(matches!(&items[0], SelectItem::Column(c) if c.is(None, "id")));
    assert!(matches!(&items[1], SelectItem::Column(c) if c.is(None, "name")));
}

#[test]
fn select_qualified_column_and_wildcard() {
    let items = items("SELECT u.id, u.* FROM users u");
    assert!(matches!(&items[0], SelectItem::Column(c) if c.is(Some("u"), "id")));
    assert_eq!(items[1], SelectItem::QualifiedWildcard("u".into()));
}

#[test]
fn qualified_bare_and_call_are_distinguished() {
    let items = items("SELECT t.c, c, f(x) FROM t");
    assert!(matches!(&items[0], SelectItem::Column(c) if c.is(Some("t"), "c")));
    assert!(matches!(&items[1], SelectItem::Column(c) if c.is(None, "c")));
    assert!(matches!(
        &items[2],
        SelectItem::Function(call)
            if call.name == "f"
                && matches!(&call.args[..], [SelectItem::Column(arg)] if arg.is(None, "x"))
    ));
}

#[test]
fn select_aliases() {
    let p = projection(r#"SELECT id AS user_id, name n, email AS "E-mail" FROM users"#);
    let aliases: Vec<_> = p.columns.iter().map(|c| c.alias.as_deref()).collect();
    assert_eq!(aliases, [Some("user_id"), Some("n"), Some("E-mail")]);
}

#[test]
fn clause_keywords_are_not_aliases() {
    let p = projection("SELECT id FROM users WHERE active");
    assert_eq!(p.columns[0].alias, None);
}

#[test]
fn select_subscripted_columns() {
    let items = items("SELECT tags[1], t.tags[2] FROM t");
    assert!(matches!(
        &items[0],
        SelectItem::Index { column, index: 1 } if column.is(None, "tags")
    ));
    assert!(matches!(
        &items[1],
        SelectItem::Index { column, index: 2 } if column.is(Some("t"), "tags")
    ));
}

#[test]
fn select_aggregates() {
    let items = items("SELECT COUNT(*), sum(amount), MAX(o.total) FROM orders o");
    let aggregates: Vec<_> = items
        .iter()
        .map(|item| match item {
            SelectItem::Aggregate(a) => (a.function, a.argument.clone()),
            other => panic!("expected aggregate, got {other:?}"),
        })
        .collect();
    assert_eq!(aggregates[0], (AggregateFunction::Count, AggregateArgument::Star));
    assert!(matches!(
        &aggregates[1],
        (AggregateFunction::Sum, AggregateArgument::Column(c)) if c.is(None, "amount")
    ));
    assert!(matches!(
        &aggregates[2],
        (AggregateFunction::Max, AggregateArgument::Column(c)) if c.is(Some("o"), "total")
    ));
}

#[test]
fn aggregate_word_without_call_is_a_column() {
    let items = items("SELECT count FROM stats");
    assert!(matches!(&items[0], SelectItem::Column(c) if c.name == "count"));
}

#[test]
fn select_array_functions() {
    let items = items("SELECT cardinality(tags), array_positions(tags, 'a') FROM posts");
    let names: Vec<_> = items
        .iter()
        .map(|item| match item {
            SelectItem::Function(call) => call.name.as_str(),
            other => panic!("expected function, got {other:?}"),
        })
        .collect();
    assert_eq!(names, ["cardinality", "array_positions"]);
}

#[test]
fn select_call_without_arguments() {
    let items = items("SELECT now() FROM t");
    assert!(matches!(&items[0], SelectItem::Function(call) if call.args.is_empty()));
}

#[test]
fn select_literals_without_from() {
    let query = parse("SELECT 'literal', 42, 1.5, NULL, TRUE");
    assert!(query.select.from.is_none());
    let kinds: Vec<_> = query
        .select
        .projection()
        .unwrap()
        .columns
        .iter()
        .map(|c| match &c.item {
            SelectItem::Expression(e) => e.value.kind.clone(),
            other => panic!("expected expression, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        [
            ValueKind::String("literal".into()),
            ValueKind::Int(42),
            ValueKind::Float(1.5),
            ValueKind::Null,
            ValueKind::Boolean(true),
        ]
    );
}

#[test]
fn select_json_path() {
    let items = items("SELECT data->'address'->>'city' AS city FROM docs");
    let SelectItem::Expression(expr) = &items[0] else {
        panic!("expected expression, got {:?}", items[0]);
    };
    assert_eq!(expr.value.as_str(), Some("data"));
    assert_eq!(
        expr.operators().collect::<Vec<_>>(),
        [PathOperator::Arrow, PathOperator::LongArrow]
    );
    let values: Vec<_> = expr.values().filter_map(|v| v.as_str()).collect();
    assert_eq!(values, ["data", "address", "city"]);
}

#[test]
fn long_json_path_chain_is_not_nesting() {
    let steps = 250;
    let sql = format!("SELECT data{} FROM docs", "->'a'".repeat(steps));
    let items = items(&sql);
    let SelectItem::Expression(expr) = &items[0] else {
        panic!("expected expression, got {:?}", items[0]);
    };
    assert_eq!(expr.operators().count(), steps);
    assert!(expr.operators().all(|op| op == PathOperator::Arrow));
    assert_eq!(expr.values().count(), steps + 1);
}

#[test]
fn select_parenthesized_expression() {
    let items = items("SELECT (data #>> 'a') FROM docs");
    assert!(matches!(
        &items[0],
        SelectItem::Expression(e) if e.operators().eq([PathOperator::HashLongArrow])
    ));
}

#[test]
fn select_scalar_subquery() {
    let p = projection("SELECT (SELECT max(id) FROM t) AS top FROM u");
    assert!(matches!(&p.columns[0].item, SelectItem::Subquery(_)));
    assert_eq!(p.columns[0].alias.as_deref(), Some("top"));
}

#[test]
fn select_distinct() {
    let query = parse("SELECT DISTINCT name FROM users");
    assert!(matches!(query.select.distinct, Some(Distinct::Plain { .. })));
    assert!(query.select.expression.is_none());
    assert_eq!(query.select.projection().unwrap().columns.len(), 1);
}

#[test]
fn select_distinct_on() {
    let query = parse("SELECT DISTINCT ON (a, b.c) a, d FROM t");
    let Some(Distinct::On {
        columns,
        expression,
        ..
    }) = &query.select.distinct
    else {
        panic!("expected DISTINCT ON, got {:?}", query.select.distinct);
    };
    assert!(columns[0].is(None, "a"));
    assert!(columns[1].is(Some("b"), "c"));
    assert_eq!(expression.columns.len(), 2);
}

#[test]
fn select_all() {
    let query = parse("SELECT ALL id FROM t");
    assert!(query.select.all);
    assert!(query.select.distinct.is_none());
}

#[test]
fn positions_are_recorded() {
    let p = projection("SELECT a,\n       b FROM t");
    assert_eq!(p.columns[0].pos.line, 1);
    assert_eq!(p.columns[0].pos.column, 8);
    assert_eq!(p.columns[1].pos.line, 2);
    assert_eq!(p.columns[1].pos.column, 8);
}
