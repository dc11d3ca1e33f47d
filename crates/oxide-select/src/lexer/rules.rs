//! The lexer rule table.
//!
//! A rule table is an ordered list of `{name, pattern}` entries. At every
//! input position the rules are tried in order and the first one that
//! matches wins, so more specific classes must come before more general ones
//! (multi-word phrases before single keywords, keyword classes before `Ident`,
//! `Float` before `Int`, longer operators before shorter ones). A class may
//! appear more than once: `--` comments are matched before the operators so
//! they are not read as two minus signs, `#` comments after them so `#>` and
//! `#>>` stay operators.

use std::borrow::Cow;

use regex::Regex;

use super::error::RuleError;
use super::TokenKind;

/// The PostgreSQL/H2-flavoured default table.
const DEFAULT_RULES: &[(&str, &str)] = &[
    (
        "Keyword",
        r"(?i)\b(?:SELECT|DISTINCT|AS|FROM|ON|WHERE|NOT|AND|OR|BETWEEN|LIKE|ILIKE|SIMILAR|TO|IN|IS|NULL|TRUE|FALSE|ARRAY)\b",
    ),
    ("SubQueryOperators", r"(?i)\b(?:ANY|ALL|EXISTS)\b"),
    (
        "Functions",
        r"(?i)\b(?:JSONB_ARRAY_ELEMENTS|JSONB_EACH|TRIM_ARRAY|ARRAY_CAT|ARRAY_APPEND|ARRAY_LENGTH|ARRAY_DIMS|ARRAY_NDIMS|ARRAY_LOWER|ARRAY_UPPER|ARRAY_TO_STRING|CARDINALITY|ARRAY_PREPEND|ARRAY_REPLACE|ARRAY_REMOVE|ARRAY_POSITIONS|ARRAY_POSITION|ARRAY_FILL)\b",
    ),
    (
        "Ignore",
        r"(?i)\b(?:GROUP\s+BY|ORDER\s+BY|HAVING|LIMIT|FETCH|OFFSET|OVER)\b",
    ),
    ("SetOperations", r"(?i)\b(?:UNION|INTERSECT|EXCEPT)\b"),
    ("Aggregate", r"(?i)\b(?:SUM|MIN|MAX|AVG|COUNT)\b"),
    (
        "Joins",
        r"(?i)\b(?:INNER\s+JOIN|CROSS\s+JOIN|LEFT(?:\s+OUTER)?\s+JOIN|RIGHT(?:\s+OUTER)?\s+JOIN|FULL(?:\s+OUTER)?\s+JOIN|JOIN)\b",
    ),
    ("Ident", r"[a-zA-Z_][a-zA-Z0-9_]*"),
    ("Float", r"\d*\.\d+"),
    ("Int", r"\d+"),
    ("Comment", r"--[^\n]*"),
    (
        "Operators",
        r"<>|!=|#>>|#>|<@|@>|->>|->|<=|>=|::|&&|\|\||[-+*/%,.()=<>]",
    ),
    ("String", r#"'[^']*'|"[^"]*""#),
    ("Comment", r"#[^\n]*"),
    ("Punct", r#"[\[\]!@#$%^&*()+_={}|:;"'<,>.?/~-]"#),
    ("Whitespace", r"\s+"),
];

/// One named entry of a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The token class name, see [`TokenKind::name`].
    pub name: Cow<'static, str>,
    /// A regular expression matched at the current input position.
    pub pattern: Cow<'static, str>,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// An ordered, uncompiled rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerRules {
    rules: Vec<Rule>,
}

impl LexerRules {
    /// Creates an empty rule table.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule with the lowest priority so far.
    #[must_use]
    pub fn rule(
        mut self,
        name: impl Into<Cow<'static, str>>,
        pattern: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.rules.push(Rule::new(name, pattern));
        self
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Compiles the table.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] if a rule names an unknown token class, its
    /// pattern is not a valid regular expression, or it matches the empty
    /// string.
    pub fn compile(&self) -> Result<CompiledRules, RuleError> {
        let mut compiled = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let kind = TokenKind::from_name(&rule.name)
                .ok_or_else(|| RuleError::UnknownClass(rule.name.to_string()))?;
            let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(|source| {
                RuleError::InvalidPattern {
                    name: rule.name.to_string(),
                    source,
                }
            })?;
            if regex.is_match("") {
                return Err(RuleError::MatchesEmpty(rule.name.to_string()));
            }
            compiled.push((kind, regex));
        }
        tracing::trace!(rules = compiled.len(), "compiled lexer rule table");
        Ok(CompiledRules { rules: compiled })
    }
}

impl Default for LexerRules {
    fn default() -> Self {
        DEFAULT_RULES
            .iter()
            .fold(Self::empty(), |rules, &(name, pattern)| {
                rules.rule(name, pattern)
            })
    }
}

/// A compiled rule table, ready to drive a [`Lexer`](super::Lexer).
///
/// Compiled tables are immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    rules: Vec<(TokenKind, Regex)>,
}

impl CompiledRules {
    /// Returns the class and byte length of the first rule matching at the
    /// start of `rest`.
    #[must_use]
    pub fn match_prefix(&self, rest: &str) -> Option<(TokenKind, usize)> {
        self.rules.iter().find_map(|(kind, regex)| {
            regex
                .find(rest)
                .map(|m| m.end())
                .filter(|&len| len > 0)
                .map(|len| (*kind, len))
        })
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
