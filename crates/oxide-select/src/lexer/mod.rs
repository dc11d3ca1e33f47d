//! SQL Lexer/Tokenizer
//!
//! The lexer is driven by an ordered rule table (see [`LexerRules`]) and
//! produces a stream of classified, position-tagged tokens.

mod error;
mod rules;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, RuleError};
pub use rules::{CompiledRules, LexerRules, Rule};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
