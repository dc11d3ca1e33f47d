//! Query-level productions: the select body, projection lists, set
//! operations and the `FROM` clause.

use super::error::ParseError;
use super::parser::{is_name, Parser};
use crate::ast::{
    AsExpression, ConditionExpress, ConditionKind, Distinct, FromClause, Join, JoinConstraint,
    JoinKind, LeftOperand, Predicate, Query, RightTarget, SelectCmd, SelectExpression, SetOperation,
    SetOperator, SetQuantifier, SubquerySource, TableAlias, TableExpression, TableSource,
};
use crate::lexer::{Position, TokenKind};

impl Parser {
    /// `SELECT select_cmd [SETOP query]`
    ///
    /// The set-operation chain is read in a loop and then folded from the
    /// right, so a long flat chain costs one nesting level, not one per link.
    pub(super) fn parse_query(&mut self) -> Result<Query, ParseError> {
        self.nested(|p| {
            let mut query = p.parse_select_body()?;
            let mut links = Vec::new();
            while p.check_kind(TokenKind::SetOperation) {
                let (pos, operator, quantifier) = p.parse_set_operator()?;
                links.push((pos, operator, quantifier, p.parse_select_body()?));
            }
            query.select.set_operation =
                links
                    .into_iter()
                    .rev()
                    .fold(None, |tail, (pos, operator, quantifier, mut rhs)| {
                        rhs.select.set_operation = tail;
                        Some(SetOperation {
                            pos,
                            operator,
                            quantifier,
                            query: Box::new(rhs),
                        })
                    });
            Ok(query)
        })
    }

    fn parse_select_body(&mut self) -> Result<Query, ParseError> {
        let pos = self.expect_keyword("SELECT")?.pos;
        let select = self.parse_select_cmd()?;
        Ok(Query { pos, select })
    }

    /// `( SELECT ... )`
    pub(super) fn parse_parenthesized_query(&mut self) -> Result<Query, ParseError> {
        self.expect_symbol("(")?;
        let query = self.parse_query()?;
        self.expect_symbol(")")?;
        Ok(query)
    }

    fn parse_select_cmd(&mut self) -> Result<SelectCmd, ParseError> {
        let pos = self.current().pos;

        let distinct = if self.eat_keyword("DISTINCT") {
            Some(self.parse_distinct()?)
        } else {
            None
        };

        let all = self.eat_keyword("ALL");

        let expression = if self.starts_select_item() {
            Some(self.parse_select_expression()?)
        } else {
            None
        };

        let from = if self.eat_keyword("FROM") {
            Some(self.parse_from()?)
        } else {
            None
        };

        if distinct.is_none() && expression.is_none() && from.is_none() {
            return Err(self.error("select list or FROM"));
        }

        Ok(SelectCmd {
            pos,
            distinct,
            all,
            expression,
            from,
            set_operation: None,
        })
    }

    fn parse_distinct(&mut self) -> Result<Distinct, ParseError> {
        if self.check_keyword("ON") {
            let pos = self.advance().pos;
            self.expect_symbol("(")?;
            let columns = self.parse_comma_separated(Self::parse_column_ref)?;
            self.expect_symbol(")")?;
            let expression = self.parse_select_expression()?;
            Ok(Distinct::On {
                pos,
                columns,
                expression,
            })
        } else {
            let pos = self.current().pos;
            let expression = self.parse_select_expression()?;
            Ok(Distinct::Plain { pos, expression })
        }
    }

    /// Returns true if the current token can begin a projection item.
    fn starts_select_item(&self) -> bool {
        let token = self.current();
        match token.kind {
            TokenKind::Ident
            | TokenKind::Function
            | TokenKind::Aggregate
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String => true,
            TokenKind::Keyword => {
                ["NULL", "TRUE", "FALSE", "ARRAY"]
                    .iter()
                    .any(|word| token.is_keyword(word))
                    || (token.is_keyword("NOT") && self.peek_nth(1).is_keyword("NULL"))
            }
            TokenKind::Operator | TokenKind::Punct => {
                token.is_symbol("*")
                    || token.is_symbol("(")
                    || (token.is_symbol("-")
                        && matches!(self.peek_nth(1).kind, TokenKind::Int | TokenKind::Float))
            }
            _ => false,
        }
    }

    /// A comma-separated projection list, then an optional ignored clause.
    fn parse_select_expression(&mut self) -> Result<SelectExpression, ParseError> {
        let pos = self.current().pos;
        let columns = self.parse_comma_separated(Self::parse_as_expression)?;
        self.skip_ignored_clause();
        Ok(SelectExpression { pos, columns })
    }

    fn parse_as_expression(&mut self) -> Result<AsExpression, ParseError> {
        let pos = self.current().pos;
        let item = self.parse_select_item()?;
        let alias = self.parse_column_alias()?;
        Ok(AsExpression { pos, item, alias })
    }

    /// `AS name` or a bare identifier.
    fn parse_column_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword("AS") {
            if is_name(self.current()) || self.check_kind(TokenKind::String) {
                return Ok(Some(self.advance().text));
            }
            return Err(self.error("alias"));
        }
        if self.check_kind(TokenKind::Ident) {
            return Ok(Some(self.advance().text));
        }
        Ok(None)
    }

    /// `UNION|INTERSECT|EXCEPT [ALL|DISTINCT]`
    fn parse_set_operator(
        &mut self,
    ) -> Result<(Position, SetOperator, Option<SetQuantifier>), ParseError> {
        let token = self.advance();
        let operator = SetOperator::from_keyword(&token.text)
            .ok_or_else(|| ParseError::unexpected("UNION, INTERSECT or EXCEPT", &token))?;
        let quantifier = if self.eat_keyword("ALL") {
            Some(SetQuantifier::All)
        } else if self.eat_keyword("DISTINCT") {
            Some(SetQuantifier::Distinct)
        } else {
            None
        };
        tracing::trace!(operator = operator.as_str(), "parsed set operation");
        Ok((token.pos, operator, quantifier))
    }

    // ---- FROM ----

    fn parse_from(&mut self) -> Result<FromClause, ParseError> {
        let pos = self.current().pos;

        let subquery = if self.check_symbol("(") && self.peek_nth(1).is_keyword("SELECT") {
            Some(self.parse_subquery_source()?)
        } else {
            None
        };

        let tables = if subquery.is_none() || self.eat_symbol(",") {
            self.parse_comma_separated(Self::parse_table_expression)?
        } else {
            Vec::new()
        };

        let mut joins = Vec::new();
        while self.check_kind(TokenKind::Join) {
            joins.push(self.parse_join()?);
        }

        let where_clause = if self.eat_keyword("WHERE") {
            Some(self.parse_condition_express()?)
        } else {
            None
        };

        Ok(FromClause {
            pos,
            subquery,
            tables,
            joins,
            where_clause,
        })
    }

    fn parse_subquery_source(&mut self) -> Result<SubquerySource, ParseError> {
        let pos = self.current().pos;
        let query = self.parse_parenthesized_query()?;
        let alias = if self.eat_keyword("AS") {
            Some(self.expect_name()?)
        } else if self.check_kind(TokenKind::Ident) {
            Some(self.advance().text)
        } else {
            None
        };
        self.skip_ignored_clause();
        Ok(SubquerySource {
            pos,
            query: Box::new(query),
            alias,
        })
    }

    fn parse_table_expression(&mut self) -> Result<TableExpression, ParseError> {
        let token = self.current();
        let pos = token.pos;
        let source = if is_name(token) && self.peek_nth(1).is_symbol("(") {
            TableSource::Function(self.parse_function_call()?)
        } else if token.kind == TokenKind::Ident {
            let first = self.advance().text;
            if self.eat_symbol(".") {
                TableSource::Table {
                    schema: Some(first),
                    name: self.expect_name()?,
                }
            } else {
                TableSource::Table {
                    schema: None,
                    name: first,
                }
            }
        } else {
            return Err(self.error("table name, function call or subquery"));
        };
        let alias = self.parse_table_alias()?;
        self.skip_ignored_clause();
        Ok(TableExpression { pos, source, alias })
    }

    /// `[AS] name [(col, ...)]`
    fn parse_table_alias(&mut self) -> Result<Option<TableAlias>, ParseError> {
        let name = if self.eat_keyword("AS") {
            self.expect_name()?
        } else if self.check_kind(TokenKind::Ident) {
            self.advance().text
        } else {
            return Ok(None);
        };
        let columns = if self.eat_symbol("(") {
            let columns = self.parse_comma_separated(Self::expect_name)?;
            self.expect_symbol(")")?;
            columns
        } else {
            Vec::new()
        };
        Ok(Some(TableAlias { name, columns }))
    }

    fn parse_join(&mut self) -> Result<Join, ParseError> {
        let token = self.advance();
        let kind = JoinKind::from_phrase(&token.normalized())
            .ok_or_else(|| ParseError::unexpected("join", &token))?;
        let table = self.parse_table_expression()?;
        let on = if self.eat_keyword("ON") {
            Some(join_constraint(self.parse_condition_express()?))
        } else if kind == JoinKind::Cross {
            None
        } else {
            return Err(self.error("ON"));
        };
        Ok(Join {
            pos: token.pos,
            kind,
            table,
            on,
        })
    }
}

/// Collapses `ON a.x = b.y` into [`JoinConstraint::Columns`]; anything else
/// stays a general condition.
fn join_constraint(condition: ConditionExpress) -> JoinConstraint {
    let columns = match condition.single() {
        Some(single) if !single.negated => match &single.kind {
            ConditionKind::Predicate {
                lhs,
                predicate: Predicate::Comparison { op, rhs },
            } if lhs.index.is_none()
                && lhs.cast.is_none()
                && rhs.quantifier.is_none()
                && rhs.cast.is_none() =>
            {
                match (&lhs.target, &rhs.target) {
                    (LeftOperand::Column(left), RightTarget::Column(right))
                        if left.table.is_some() && right.table.is_some() =>
                    {
                        Some((left.clone(), *op, right.clone()))
                    }
                    _ => None,
                }
            }
            _ => None,
        },
        _ => None,
    };
    match columns {
        Some((left, operator, right)) => JoinConstraint::Columns {
            left,
            operator,
            right,
        },
        None => JoinConstraint::Condition(condition),
    }
}
