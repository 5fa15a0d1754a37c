//! Arithmetic expression parser
//!
//! Source text is split on whitespace by the [`Lexer`], then the
//! [`Parser`] builds an [`Expression`] by precedence climbing.

pub mod config;
pub mod lexer;
pub mod parse;
pub mod precedence;
pub mod token;

pub use config::{ConfigError, ParserConfig};
pub use lexer::Lexer;
pub use parse::{ParseError, ParseResult, Parser};
pub use precedence::{associativity, precedence_of, Associativity, Precedence};
pub use token::{Token, TokenKind};

use crate::ast::nodes::Expression;

/// Tokenize source text
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Parse source text with the default configuration
pub fn parse(source: &str) -> ParseResult<Expression> {
    Parser::new(source).parse()
}

/// Parse source text with the given configuration
pub fn parse_with(source: &str, config: &ParserConfig) -> ParseResult<Expression> {
    Parser::with_config(source, config.clone()).parse()
}
