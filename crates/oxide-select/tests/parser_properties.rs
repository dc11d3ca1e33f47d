//! Property tests over generated inputs.

mod common;
use common::*;

use oxide_select::ast::{SelectItem, ValueKind};
use proptest::prelude::*;

/// Identifiers that cannot collide with any keyword class.
fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,8}_c"
}

proptest! {
    #[test]
    fn parse_never_panics(sql in "\\PC{0,200}") {
        let _ = oxide_select::parse(&sql);
    }

    #[test]
    fn parse_never_panics_on_sql_like_input(
        words in proptest::collection::vec(
            prop_oneof![
                Just("SELECT"), Just("FROM"), Just("WHERE"), Just("("), Just(")"),
                Just(","), Just("a"), Just("t.b"), Just("="), Just("1"), Just("'s'"),
                Just("AND"), Just("OR"), Just("NOT"), Just("IN"), Just("JOIN"),
                Just("ON"), Just("UNION"), Just("ARRAY["), Just("]"), Just("->>"),
                Just("ORDER BY"), Just(";"), Just("*"),
            ],
            0..40,
        )
    ) {
        let _ = oxide_select::parse(&words.join(" "));
    }

    #[test]
    fn parse_is_deterministic(sql in "SELECT [a-z ,.*=()'0-9]{0,60}") {
        prop_assert_eq!(oxide_select::parse(&sql), oxide_select::parse(&sql));
    }

    #[test]
    fn array_elements_are_preserved(values in proptest::collection::vec(any::<i64>(), 1..12)) {
        let list = values.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
        let items = items(&format!("SELECT ARRAY[{list}]"));
        let SelectItem::Expression(expr) = &items[0] else {
            panic!("expected expression, got {:?}", items[0]);
        };
        let ValueKind::Array(array) = &expr.value.kind else {
            panic!("expected array, got {:?}", expr.value.kind);
        };
        let parsed: Vec<_> = array.elements.iter().filter_map(|v| v.as_int()).collect();
        prop_assert_eq!(parsed, values);
    }

    #[test]
    fn string_literals_are_unquoted(text in "[a-zA-Z0-9 _%#-]{0,30}") {
        let items = items(&format!("SELECT '{text}'"));
        let SelectItem::Expression(expr) = &items[0] else {
            panic!("expected expression, got {:?}", items[0]);
        };
        prop_assert_eq!(expr.value.as_str(), Some(text.as_str()));
    }

    #[test]
    fn identifier_case_is_preserved(column in ident(), table in ident()) {
        let f = from(&format!("SELECT {table}.{column} FROM {table}"));
        prop_assert_eq!(f.tables.len(), 1);
        let items = items(&format!("SELECT {table}.{column} FROM {table}"));
        prop_assert!(
            matches!(&items[0], SelectItem::Column(c) if c.is(Some(table.as_str()), &column)),
            "{:?}", items[0]
        );
    }

    #[test]
    fn or_of_ands_shape(branches in proptest::collection::vec(1usize..5, 1..5)) {
        let mut n = 0;
        let condition = branches
            .iter()
            .map(|&width| {
                (0..width)
                    .map(|_| {
                        n += 1;
                        format!("c{n}_c = {n}")
                    })
                    .collect::<Vec<_>>()
                    .join(" AND ")
            })
            .collect::<Vec<_>>()
            .join(" OR ");
        let w = where_clause(&format!("SELECT * FROM t WHERE {condition}"));
        let shape: Vec<_> = w.or.iter().map(|branch| branch.and.len()).collect();
        prop_assert_eq!(shape, branches);
    }
}
