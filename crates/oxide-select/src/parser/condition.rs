//! Condition productions for `WHERE` and `ON`.
//!
//! ```text
//! condition_express := or_condition { OR or_condition }
//! or_condition      := condition { AND condition }
//! condition         := [NOT] ( EXISTS ( query ) | ( condition_express ) | operand [predicate] )
//! ```

use super::error::ParseError;
use super::parser::{is_name, Parser};
use crate::ast::{
    ColumnRef, ComparisonOp, Condition, ConditionExpress, ConditionKind, InList, LeftOperand,
    Operand, OrCondition, Predicate, Quantifier, RightOperand, RightTarget, Value,
};
use crate::lexer::TokenKind;

/// Keywords that may follow `NOT` inside a predicate.
const NEGATABLE: [&str; 5] = ["LIKE", "ILIKE", "SIMILAR", "BETWEEN", "IN"];

impl Parser {
    pub(super) fn parse_condition_express(&mut self) -> Result<ConditionExpress, ParseError> {
        let pos = self.current().pos;
        let mut or = vec![self.parse_or_condition()?];
        while self.eat_keyword("OR") {
            or.push(self.parse_or_condition()?);
        }
        Ok(ConditionExpress { pos, or })
    }

    fn parse_or_condition(&mut self) -> Result<OrCondition, ParseError> {
        let pos = self.current().pos;
        let mut and = vec![self.parse_condition()?];
        while self.eat_keyword("AND") {
            and.push(self.parse_condition()?);
        }
        Ok(OrCondition { pos, and })
    }

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let pos = self.current().pos;
        let negated = self.eat_keyword("NOT");
        let kind = self.parse_condition_kind()?;
        self.skip_ignored_clause();
        Ok(Condition { pos, negated, kind })
    }

    fn parse_condition_kind(&mut self) -> Result<ConditionKind, ParseError> {
        if self.check_keyword("EXISTS") && self.peek_nth(1).is_symbol("(") {
            self.advance();
            let query = self.parse_parenthesized_query()?;
            return Ok(ConditionKind::Exists(Box::new(query)));
        }

        let lhs = if self.check_symbol("(") && !self.peek_nth(1).is_keyword("SELECT") {
            let pos = self.current().pos;
            self.advance();
            let group = self.nested(Self::parse_condition_express)?;
            self.expect_symbol(")")?;
            if !self.starts_predicate() && !self.check_symbol("[") && !self.check_symbol("::") {
                return Ok(ConditionKind::Group(Box::new(group)));
            }
            // `(expr) = x`: the group was a parenthesized operand.
            match into_operand(group) {
                Ok(inner) => Operand {
                    pos,
                    target: inner.target,
                    index: self.parse_subscript()?.or(inner.index),
                    cast: self.parse_cast()?.or(inner.cast),
                },
                Err(group) => return Ok(ConditionKind::Group(Box::new(group))),
            }
        } else {
            self.parse_operand()?
        };

        Ok(match self.parse_predicate()? {
            Some(predicate) => ConditionKind::Predicate { lhs, predicate },
            None => ConditionKind::Truth(lhs),
        })
    }

    /// Returns true if the current token begins a predicate.
    fn starts_predicate(&self) -> bool {
        let token = self.current();
        if matches!(token.kind, TokenKind::Operator | TokenKind::Punct) {
            return ComparisonOp::from_symbol(&token.text).is_some();
        }
        ["LIKE", "ILIKE", "SIMILAR", "IS", "BETWEEN", "IN"]
            .iter()
            .any(|word| token.is_keyword(word))
            || (token.is_keyword("NOT")
                && NEGATABLE.iter().any(|word| self.peek_nth(1).is_keyword(word)))
    }

    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let pos = self.current().pos;
        let target = self.parse_left_operand()?;
        let index = self.parse_subscript()?;
        let cast = self.parse_cast()?;
        Ok(Operand {
            pos,
            target,
            index,
            cast,
        })
    }

    fn parse_left_operand(&mut self) -> Result<LeftOperand, ParseError> {
        let token = self.current();

        if token.is_symbol("(") {
            if self.peek_nth(1).is_keyword("SELECT") {
                let query = self.parse_parenthesized_query()?;
                return Ok(LeftOperand::Subquery(Box::new(query)));
            }
            self.advance();
            let expression = self.nested(Self::parse_expression)?;
            self.expect_symbol(")")?;
            return Ok(LeftOperand::Expression(expression));
        }

        if is_name(token) && self.peek_nth(1).is_symbol("(") {
            return Ok(LeftOperand::Function(self.parse_function_call()?));
        }

        if token.kind == TokenKind::Ident && self.peek_nth(1).is_symbol(".") {
            return Ok(LeftOperand::Column(self.parse_column_ref()?));
        }

        if is_name(token) && !self.is_path_operator(1) {
            return Ok(LeftOperand::Column(self.parse_column_ref()?));
        }

        Ok(LeftOperand::Expression(self.parse_expression()?))
    }

    /// Parses the operator and right side of a condition, if any.
    fn parse_predicate(&mut self) -> Result<Option<Predicate>, ParseError> {
        let token = self.current();

        if matches!(token.kind, TokenKind::Operator | TokenKind::Punct) {
            let Some(op) = ComparisonOp::from_symbol(&token.text) else {
                return Ok(None);
            };
            self.advance();
            let rhs = self.parse_right_operand()?;
            return Ok(Some(Predicate::Comparison { op, rhs }));
        }

        let negated = token.is_keyword("NOT")
            && NEGATABLE.iter().any(|word| self.peek_nth(1).is_keyword(word));
        if negated {
            self.advance();
        }

        let predicate = if self.check_keyword("LIKE") || self.check_keyword("ILIKE") {
            let case_insensitive = self.advance().is_keyword("ILIKE");
            Predicate::Like {
                negated,
                case_insensitive,
                rhs: self.parse_right_operand()?,
            }
        } else if self.eat_keyword("SIMILAR") {
            self.expect_keyword("TO")?;
            Predicate::SimilarTo {
                negated,
                rhs: self.parse_right_operand()?,
            }
        } else if self.eat_keyword("BETWEEN") {
            let (low, high) = self.parse_between_bounds()?;
            Predicate::Between { negated, low, high }
        } else if self.eat_keyword("IN") {
            Predicate::In {
                negated,
                rhs: self.parse_in_list()?,
            }
        } else if self.eat_keyword("IS") {
            let negated = self.eat_keyword("NOT");
            Predicate::Is {
                negated,
                value: self.parse_value()?,
            }
        } else {
            return Ok(None);
        };
        Ok(Some(predicate))
    }

    /// `low AND high`, optionally parenthesized.
    fn parse_between_bounds(&mut self) -> Result<(Value, Value), ParseError> {
        let parenthesized = self.eat_symbol("(");
        let low = self.parse_value()?;
        self.expect_keyword("AND")?;
        let high = self.parse_value()?;
        if parenthesized {
            self.expect_symbol(")")?;
        }
        Ok((low, high))
    }

    fn parse_in_list(&mut self) -> Result<InList, ParseError> {
        if self.check_symbol("(") && self.peek_nth(1).is_keyword("SELECT") {
            let query = self.parse_parenthesized_query()?;
            return Ok(InList::Subquery(Box::new(query)));
        }
        self.expect_symbol("(")?;
        let values = self.parse_comma_separated(Self::parse_value)?;
        self.expect_symbol(")")?;
        Ok(InList::Values(values))
    }

    fn parse_right_operand(&mut self) -> Result<RightOperand, ParseError> {
        let pos = self.current().pos;
        let quantifier = if self.check_kind(TokenKind::SubQueryOperator) {
            let token = self.advance();
            Some(
                Quantifier::from_keyword(&token.text)
                    .ok_or_else(|| ParseError::unexpected("ANY, ALL or EXISTS", &token))?,
            )
        } else {
            None
        };

        let token = self.current();
        let target = if token.is_symbol("(") {
            if self.peek_nth(1).is_keyword("SELECT") {
                RightTarget::Subquery(Box::new(self.parse_parenthesized_query()?))
            } else {
                self.advance();
                let values = self.parse_comma_separated(Self::parse_value)?;
                self.expect_symbol(")")?;
                RightTarget::List(values)
            }
        } else if is_name(token) && self.peek_nth(1).is_symbol("(") {
            RightTarget::Function(self.parse_function_call()?)
        } else if token.kind == TokenKind::Ident && self.peek_nth(1).is_symbol(".") {
            RightTarget::Column(self.parse_column_ref()?)
        } else if is_name(token) && !self.peek_nth(1).is_symbol("[") {
            let pos = token.pos;
            let name = self.advance().text;
            RightTarget::Column(ColumnRef {
                pos,
                table: None,
                name,
            })
        } else {
            RightTarget::Value(self.parse_value()?)
        };

        let cast = self.parse_cast()?;
        Ok(RightOperand {
            pos,
            quantifier,
            target,
            cast,
        })
    }
}

/// Unwraps a group holding a single bare operand, looking through nested
/// parentheses. Any other group is handed back unchanged.
fn into_operand(mut group: ConditionExpress) -> Result<Operand, ConditionExpress> {
    if group.or.len() == 1 && group.or[0].and.len() == 1 {
        let condition = group.or[0].and.remove(0);
        match condition {
            Condition {
                negated: false,
                kind: ConditionKind::Truth(operand),
                ..
            } => return Ok(operand),
            Condition {
                pos,
                negated: false,
                kind: ConditionKind::Group(inner),
            } => match into_operand(*inner) {
                Ok(operand) => return Ok(operand),
                Err(inner) => group.or[0].and.push(Condition {
                    pos,
                    negated: false,
                    kind: ConditionKind::Group(Box::new(inner)),
                }),
            },
            other => group.or[0].and.push(other),
        }
    }
    Err(group)
}
