//! Pratt (precedence-climbing) parser and evaluator for arithmetic expressions
//!
//! ```
//! let evaluation = climb_core::evaluate("- 2 ^ 2 + ( 1 + 2 ) * 3").unwrap();
//! assert_eq!(evaluation.value, 5.0);
//! assert_eq!(evaluation.expression.to_string(), "( ( - ( 2 ^ 2 ) ) + ( ( 1 + 2 ) * 3 ) )");
//! ```

pub mod ast;
pub mod evaluator;
pub mod parser;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use ast::{Expression, Operator};
pub use evaluator::{value_of, EvalError};
pub use parser::{parse, parse_with, ParseError, Parser, ParserConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(e) => e.kind(),
            Error::Eval(_) => ErrorKind::ArithmeticFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error categories reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    LexicalAnomaly,
    UnexpectedToken,
    UnmatchedParenthesis,
    TrailingInput,
    NestingTooDeep,
    ArithmeticFailure,
}

/// A parsed expression together with its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub expression: Expression,
    pub value: f64,
}

/// Parse and evaluate source text with the default configuration
pub fn evaluate(source: &str) -> Result<Evaluation> {
    evaluate_with(source, &ParserConfig::default())
}

/// Parse and evaluate source text with the given configuration
pub fn evaluate_with(source: &str, config: &ParserConfig) -> Result<Evaluation> {
    let expression = parse_with(source, config)?;
    let value = value_of(&expression)?;
    Ok(Evaluation { expression, value })
}
