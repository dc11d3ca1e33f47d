//! Tests for parser error cases and their reported positions.

mod common;
use common::*;

use oxide_select::{Error, ParseError};

fn parse_error(sql: &str) -> ParseError {
    match parse_err(sql) {
        Error::Parse(e) => e,
        other => panic!("expected a parse error for {sql}, got {other:?}"),
    }
}

#[test]
fn error_empty_input() {
    let e = parse_error("");
    assert_eq!(e.expected, "SELECT");
    assert!(e.is_eof());
}

#[test]
fn error_incomplete_select() {
    let e = parse_error("SELECT");
    assert!(e.is_eof());
}

#[test]
fn error_not_a_select() {
    let e = parse_error("UPDATE users SET a = 1");
    assert_eq!(e.expected, "SELECT");
    assert_eq!(e.pos.column, 1);
}

#[test]
fn error_select_from_points_after_from() {
    let e = parse_error("SELECT FROM");
    assert!(e.is_eof());
    assert_eq!(e.pos.column, 12);

    let e = parse_error("SELECT FROM WHERE a = 1");
    assert_eq!(e.pos.column, 13);
    assert!(e.found.contains("WHERE"));
}

#[test]
fn error_missing_from_table() {
    let e = parse_error("SELECT * FROM");
    assert_eq!(e.expected, "table name, function call or subquery");
}

#[test]
fn error_unclosed_paren() {
    let e = parse_error("SELECT * FROM t WHERE (a = 1");
    assert_eq!(e.expected, "')'");
    assert!(e.is_eof());
}

#[test]
fn error_join_without_on() {
    let e = parse_error("SELECT * FROM a INNER JOIN b WHERE a.id = 1");
    assert_eq!(e.expected, "ON");
    assert!(e.found.contains("WHERE"));
}

#[test]
fn error_trailing_garbage() {
    let e = parse_error("SELECT a FROM t )");
    assert_eq!(e.expected, "end of input");
    assert_eq!(e.pos.column, 17);
}

#[test]
fn error_second_statement() {
    let e = parse_error("SELECT 1; SELECT 2");
    assert_eq!(e.expected, "end of input");
    assert_eq!(e.pos.column, 11);
}

#[test]
fn error_empty_in_list() {
    let e = parse_error("SELECT * FROM t WHERE a IN ()");
    assert_eq!(e.expected, "value");
}

#[test]
fn error_aggregate_of_expression() {
    let e = parse_error("SELECT SUM(1) FROM t");
    assert_eq!(e.expected, "column or '*'");
}

#[test]
fn error_alias_missing_after_as() {
    let e = parse_error("SELECT a AS FROM t");
    assert_eq!(e.expected, "alias");
}

#[test]
fn error_line_and_column_on_later_line() {
    let e = parse_error("SELECT a\nFROM t\nWHERE a =");
    assert_eq!((e.pos.line, e.pos.column), (3, 10));
}

#[test]
fn lex_error_on_unknown_character() {
    let err = parse_err("SELECT a FROM t WHERE b = `c`");
    let Error::Lex(e) = &err else {
        panic!("expected lex error, got {err:?}");
    };
    assert_eq!(e.found, '`');
    assert_eq!(e.pos.column, 27);
}

#[test]
fn report_renders_caret() {
    let sql = "SELECT a\nFROM";
    let report = parse_err(sql).report(sql);
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines[0], "error: expected table name, function call or subquery, found end of input");
    assert_eq!(lines[3], "2 | FROM");
    assert_eq!(lines[4], "  |     ^");
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let depth = 500;
    let sql = format!(
        "SELECT * FROM t WHERE {}a = 1{}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let e = parse_error(&sql);
    assert!(e.expected.contains("levels of nesting"), "{e}");
}

#[test]
fn nesting_within_limit_parses() {
    let sql = format!(
        "SELECT * FROM t WHERE {}a = 1{}",
        "(".repeat(30),
        ")".repeat(30)
    );
    let _ = parse(&sql);
}
