//! Projection items, calls, column references, literal values and JSONB
//! path expressions.

use super::error::ParseError;
use super::parser::{is_name, Parser};
use crate::ast::{
    Aggregate, AggregateArgument, AggregateFunction, ArrayLiteral, ColumnRef, Expression,
    FunctionCall, JsonPath, PathOperator, SelectItem, Value, ValueKind,
};
use crate::lexer::TokenKind;

impl Parser {
    /// Parses a projection item or function argument.
    pub(super) fn parse_select_item(&mut self) -> Result<SelectItem, ParseError> {
        let token = self.current();

        if token.is_symbol("*") {
            self.advance();
            return Ok(SelectItem::Wildcard);
        }

        if token.kind == TokenKind::Ident && self.peek_nth(1).is_symbol(".") {
            if self.peek_nth(2).is_symbol("*") {
                let table = self.advance().text;
                self.advance();
                self.advance();
                return Ok(SelectItem::QualifiedWildcard(table));
            }
            let column = self.parse_column_ref()?;
            return self.parse_indexed_column(column);
        }

        if is_name(token) && self.peek_nth(1).is_symbol("(") {
            if token.kind == TokenKind::Aggregate
                && AggregateFunction::from_keyword(&token.text).is_some()
            {
                return Ok(SelectItem::Aggregate(self.parse_aggregate()?));
            }
            return Ok(SelectItem::Function(self.parse_function_call()?));
        }

        if token.is_symbol("(") {
            if self.peek_nth(1).is_keyword("SELECT") {
                let query = self.parse_parenthesized_query()?;
                return Ok(SelectItem::Subquery(Box::new(query)));
            }
            self.advance();
            let expression = self.nested(Self::parse_expression)?;
            self.expect_symbol(")")?;
            return Ok(SelectItem::Expression(expression));
        }

        if is_name(token) && !self.is_path_operator(1) {
            let pos = token.pos;
            let name = self.advance().text;
            let column = ColumnRef {
                pos,
                table: None,
                name,
            };
            return self.parse_indexed_column(column);
        }

        Ok(SelectItem::Expression(self.parse_expression()?))
    }

    fn parse_indexed_column(&mut self, column: ColumnRef) -> Result<SelectItem, ParseError> {
        match self.parse_subscript()? {
            Some(index) => Ok(SelectItem::Index { column, index }),
            None => Ok(SelectItem::Column(column)),
        }
    }

    /// `[n]`, if present.
    pub(super) fn parse_subscript(&mut self) -> Result<Option<i64>, ParseError> {
        if !self.eat_symbol("[") {
            return Ok(None);
        }
        let index = self.expect_int()?;
        self.expect_symbol("]")?;
        Ok(Some(index))
    }

    /// `::type`, if present.
    pub(super) fn parse_cast(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_symbol("::") {
            Ok(Some(self.expect_name()?))
        } else {
            Ok(None)
        }
    }

    /// `name` or `table.name`
    pub(super) fn parse_column_ref(&mut self) -> Result<ColumnRef, ParseError> {
        let pos = self.current().pos;
        let first = self.expect_name()?;
        if self.eat_symbol(".") {
            Ok(ColumnRef {
                pos,
                table: Some(first),
                name: self.expect_name()?,
            })
        } else {
            Ok(ColumnRef {
                pos,
                table: None,
                name: first,
            })
        }
    }

    /// `name ( [item {, item}] )`
    pub(super) fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let name = self.advance();
        self.expect_symbol("(")?;
        let args = if self.check_symbol(")") {
            Vec::new()
        } else {
            self.nested(|p| p.parse_comma_separated(Self::parse_select_item))?
        };
        self.expect_symbol(")")?;
        Ok(FunctionCall {
            pos: name.pos,
            name: name.text,
            args,
        })
    }

    /// `SUM|MIN|MAX|AVG|COUNT ( column | * )`
    fn parse_aggregate(&mut self) -> Result<Aggregate, ParseError> {
        let name = self.advance();
        let function = AggregateFunction::from_keyword(&name.text)
            .ok_or_else(|| ParseError::unexpected("aggregate function", &name))?;
        self.expect_symbol("(")?;
        let argument = if self.eat_symbol("*") {
            AggregateArgument::Star
        } else if is_name(self.current()) {
            AggregateArgument::Column(self.parse_column_ref()?)
        } else {
            return Err(self.error("column or '*'"));
        };
        self.expect_symbol(")")?;
        Ok(Aggregate {
            pos: name.pos,
            function,
            argument,
        })
    }

    /// A value followed by an optional right-associative chain of path
    /// operators.
    ///
    /// The links are read in a loop and folded from the right, so chain
    /// length does not count against the nesting bound.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let pos = self.current().pos;
        let value = self.parse_value()?;
        let mut links = Vec::new();
        while let Some(operator) = self.path_operator() {
            self.advance();
            let pos = self.current().pos;
            links.push((operator, pos, self.parse_value()?));
        }
        let path = links
            .into_iter()
            .rev()
            .fold(None, |path, (operator, pos, value)| {
                Some(JsonPath {
                    operator,
                    rest: Box::new(Expression { pos, value, path }),
                })
            });
        Ok(Expression { pos, value, path })
    }

    fn path_operator(&self) -> Option<PathOperator> {
        if self.check_kind(TokenKind::Operator) {
            PathOperator::from_symbol(&self.current().text)
        } else {
            None
        }
    }

    /// Parses a literal, identifier or array value with its optional
    /// subscript.
    pub(super) fn parse_value(&mut self) -> Result<Value, ParseError> {
        let pos = self.current().pos;
        let kind = self.parse_value_kind()?;
        let index = match kind {
            ValueKind::Ident(_) | ValueKind::Array(_) => self.parse_subscript()?,
            _ => None,
        };
        Ok(Value { pos, kind, index })
    }

    fn parse_value_kind(&mut self) -> Result<ValueKind, ParseError> {
        let token = self.current();

        if token.kind == TokenKind::Int && self.peek_nth(1).is_symbol("||") {
            let prepend = self.expect_int()?;
            self.advance();
            return self.parse_array(Some(prepend));
        }
        if token.is_keyword("ARRAY") {
            return self.parse_array(None);
        }

        let kind = match token.kind {
            TokenKind::Int => return Ok(ValueKind::Int(self.expect_int()?)),
            TokenKind::Float => ValueKind::Float(self.parse_float(&token.text)?),
            TokenKind::String => ValueKind::String(token.text.clone()),
            _ if is_name(token) => ValueKind::Ident(token.text.clone()),
            _ if token.is_keyword("NULL") => ValueKind::Null,
            _ if token.is_keyword("TRUE") => ValueKind::Boolean(true),
            _ if token.is_keyword("FALSE") => ValueKind::Boolean(false),
            _ if token.is_keyword("NOT") && self.peek_nth(1).is_keyword("NULL") => {
                self.advance();
                ValueKind::NotNull
            }
            _ if token.is_symbol("-") => return self.parse_negative_number(),
            _ => return Err(self.error("value")),
        };
        self.advance();
        Ok(kind)
    }

    fn parse_float(&self, text: &str) -> Result<f64, ParseError> {
        text.parse().map_err(|_| self.error("number"))
    }

    /// `- Int` or `- Float`
    fn parse_negative_number(&mut self) -> Result<ValueKind, ParseError> {
        let number = self.peek_nth(1);
        let literal = format!("-{}", number.text);
        let kind = match number.kind {
            TokenKind::Int => {
                let value = literal
                    .parse()
                    .map_err(|_| ParseError::unexpected("integer that fits in 64 bits", number))?;
                ValueKind::Int(value)
            }
            TokenKind::Float => {
                let value = literal
                    .parse()
                    .map_err(|_| ParseError::unexpected("number", number))?;
                ValueKind::Float(value)
            }
            _ => return Err(ParseError::unexpected("number", number)),
        };
        self.advance();
        self.advance();
        Ok(kind)
    }

    /// `ARRAY [ v {, v} ] [|| Int]`, after any `Int ||` prefix.
    fn parse_array(&mut self, prepend: Option<i64>) -> Result<ValueKind, ParseError> {
        self.expect_keyword("ARRAY")?;
        self.expect_symbol("[")?;
        let elements = self.nested(|p| p.parse_comma_separated(Self::parse_value))?;
        self.expect_symbol("]")?;
        let append = if self.check_symbol("||") && self.peek_nth(1).kind == TokenKind::Int {
            self.advance();
            Some(self.expect_int()?)
        } else {
            None
        };
        Ok(ValueKind::Array(ArrayLiteral {
            prepend,
            elements,
            append,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, LexerRules};

    fn parser(sql: &str) -> Parser {
        let rules = LexerRules::default().compile().unwrap();
        Parser::new(Lexer::new(sql, &rules).tokenize().unwrap())
    }

    fn value(sql: &str) -> Value {
        let mut p = parser(sql);
        let value = p.parse_value().unwrap();
        assert!(p.current().is_eof(), "trailing input in {sql:?}");
        value
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(value("42").kind, ValueKind::Int(42));
        assert_eq!(value("-7").kind, ValueKind::Int(-7));
        assert_eq!(value("1.5").kind, ValueKind::Float(1.5));
        assert_eq!(value("-.5").kind, ValueKind::Float(-0.5));
        assert_eq!(value("'x'").kind, ValueKind::String("x".into()));
        assert_eq!(value("null").kind, ValueKind::Null);
        assert_eq!(value("NOT NULL").kind, ValueKind::NotNull);
        assert_eq!(value("TRUE").kind, ValueKind::Boolean(true));
        assert_eq!(value("false").kind, ValueKind::Boolean(false));
    }

    #[test]
    fn test_i64_min() {
        assert_eq!(value("-9223372036854775808").kind, ValueKind::Int(i64::MIN));
    }

    #[test]
    fn test_ident_with_subscript() {
        let v = value("tags[2]");
        assert_eq!(v.kind, ValueKind::Ident("tags".into()));
        assert_eq!(v.index, Some(2));
    }

    #[test]
    fn test_array_with_concatenation() {
        let v = value("1 || ARRAY[2, 3] || 4");
        let ValueKind::Array(array) = v.kind else {
            panic!("expected array, got {:?}", v.kind);
        };
        assert_eq!(array.prepend, Some(1));
        assert_eq!(array.append, Some(4));
        let elements: Vec<_> = array.elements.iter().filter_map(Value::as_int).collect();
        assert_eq!(elements, [2, 3]);
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let err = parser("ARRAY[]").parse_value().unwrap_err();
        assert_eq!(err.expected, "value");
    }

    #[test]
    fn test_path_chain_is_right_associative() {
        let mut p = parser("data->'a'->>'b'");
        let expr = p.parse_expression().unwrap();
        assert_eq!(
            expr.operators().collect::<Vec<_>>(),
            [PathOperator::Arrow, PathOperator::LongArrow]
        );
        let rest = &expr.path.as_ref().unwrap().rest;
        assert_eq!(rest.value.as_str(), Some("a"));
        assert!(rest.path.is_some());
    }

    #[test]
    fn test_qualified_wildcard() {
        let mut p = parser("u.*");
        assert_eq!(
            p.parse_select_item().unwrap(),
            SelectItem::QualifiedWildcard("u".into())
        );
    }

    #[test]
    fn test_nested_function_arguments() {
        let mut p = parser("array_length(array_cat(a, b), 1)");
        let SelectItem::Function(call) = p.parse_select_item().unwrap() else {
            panic!("expected function");
        };
        assert_eq!(call.name, "array_length");
        assert_eq!(call.args.len(), 2);
        assert!(matches!(&call.args[0], SelectItem::Function(inner) if inner.args.len() == 2));
    }

    #[test]
    fn test_unknown_function_name_is_a_call() {
        let mut p = parser("lower(name)");
        assert!(matches!(
            p.parse_select_item().unwrap(),
            SelectItem::Function(_)
        ));
    }
}
