//! Reporting Queries - Parsing Example
//!
//! This example parses a handful of reporting queries and prints what the
//! parser found in each:
//! - Projection items and their aliases
//! - Sources and joins
//! - The shape of the WHERE condition
//! - A rendered diagnostic for a broken query
//!
//! Run with: cargo run --example reporting

use oxide_select::ast::{Query, SelectItem, TableSource};

const QUERIES: &[&str] = &[
    "SELECT c.name, COUNT(*) AS invoices, SUM(i.total) \
     FROM companies c JOIN invoices i ON c.id = i.company_id \
     WHERE i.status IN ('sent', 'overdue') GROUP BY c.name",
    "SELECT data->'client'->>'email' AS email FROM invoices \
     WHERE (data->>'currency') = 'EUR' AND tags @> ARRAY['priority']",
    "SELECT id FROM invoices WHERE due_date < '2024-01-15' \
     EXCEPT SELECT invoice_id FROM payments",
    "SELECT name FROM clients WHERE",
];

fn describe_item(item: &SelectItem) -> String {
    match item {
        SelectItem::Column(c) => match &c.table {
            Some(t) => format!("column {t}.{}", c.name),
            None => format!("column {}", c.name),
        },
        SelectItem::Index { column, index } => format!("{}[{index}]", column.name),
        SelectItem::Wildcard => String::from("*"),
        SelectItem::QualifiedWildcard(t) => format!("{t}.*"),
        SelectItem::Aggregate(a) => format!("aggregate {}", a.function.as_str()),
        SelectItem::Function(f) => format!("call {}({} args)", f.name, f.args.len()),
        SelectItem::Expression(e) => format!("expression with {} path steps", e.operators().count()),
        SelectItem::Subquery(_) => String::from("subquery"),
    }
}

fn print_query(query: &Query) {
    if let Some(projection) = query.select.projection() {
        for column in &projection.columns {
            let alias = column
                .alias
                .as_deref()
                .map(|a| format!(" AS {a}"))
                .unwrap_or_default();
            println!("   select {}{alias}", describe_item(&column.item));
        }
    }
    if let Some(from) = &query.select.from {
        for table in &from.tables {
            if let TableSource::Table { name, .. } = &table.source {
                println!("   from   {name}");
            }
        }
        for join in &from.joins {
            let side = if join.kind.is_inner() { "inner" } else { "outer" };
            println!("   join   {} ({side})", join.kind.as_str());
        }
        if let Some(condition) = &from.where_clause {
            let terms: Vec<_> = condition.or.iter().map(|b| b.and.len()).collect();
            println!("   where  {} OR branch(es), AND terms {terms:?}", terms.len());
        }
    }
    if let Some(op) = &query.select.set_operation {
        println!("   then   {}", op.operator.as_str());
        print_query(&op.query);
    }
}

fn main() {
    for sql in QUERIES {
        println!("-- {sql}");
        match oxide_select::parse(sql) {
            Ok(query) => print_query(&query),
            Err(err) => print!("{}", err.report(sql)),
        }
        println!();
    }
}
