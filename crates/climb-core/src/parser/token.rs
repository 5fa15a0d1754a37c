//! Token definitions for arithmetic expressions

use crate::ast::nodes::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token with its source text and position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text for this token
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind, text: text.into(), line, column }
    }

    /// Create an end-of-input token at the given location
    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), line, column)
    }

    /// Human readable form used in diagnostics
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.describe(), self.line, self.column)
    }
}

/// The kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Literals
    Number,

    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Power,    // ^

    // Grouping
    LParen, // (
    RParen, // )

    // Special
    Eof,
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Multiply => write!(f, "*"),
            TokenKind::Divide => write!(f, "/"),
            TokenKind::Power => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Illegal => write!(f, "illegal"),
        }
    }
}

impl TokenKind {
    /// Classify a single whitespace-delimited symbol
    pub fn classify(symbol: &str) -> Self {
        match symbol {
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Multiply,
            "/" => TokenKind::Divide,
            "^" => TokenKind::Power,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            s if is_number_literal(s) => TokenKind::Number,
            _ => TokenKind::Illegal,
        }
    }

    /// The arithmetic operator this token denotes, if any
    pub fn operator(&self) -> Option<Operator> {
        match self {
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Minus => Some(Operator::Minus),
            TokenKind::Multiply => Some(Operator::Multiply),
            TokenKind::Divide => Some(Operator::Divide),
            TokenKind::Power => Some(Operator::Power),
            _ => None,
        }
    }

    /// Check if this token is an operator
    pub fn is_operator(&self) -> bool {
        self.operator().is_some()
    }

    /// Check if this token ends an expression (closing paren or end of input)
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::Eof)
    }
}

/// Digits with at most one decimal point and at least one digit
fn is_number_literal(symbol: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for ch in symbol.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
