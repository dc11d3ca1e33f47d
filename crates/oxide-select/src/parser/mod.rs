//! SQL Parser
//!
//! A hand-written recursive descent parser for `SELECT` statements with
//! two tokens of lookahead.

mod condition;
mod error;
mod parser;
mod query;
mod value;

pub use error::ParseError;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
