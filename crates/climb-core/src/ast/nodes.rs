//! AST node definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// An arithmetic expression
///
/// Parentheses have no node of their own: a grouped subexpression appears
/// as its inner expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Numeric literal
    Constant(f64),

    /// Prefix operation (e.g., - x)
    Unary { op: Operator, operand: Box<Expression> },

    /// Infix operation (e.g., x * y)
    Binary { left: Box<Expression>, op: Operator, right: Box<Expression> },
}

impl Expression {
    /// Create a constant expression
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Create a unary expression
    pub fn unary(op: Operator, operand: Expression) -> Self {
        Self::Unary { op, operand: Box::new(operand) }
    }

    /// Create a binary expression
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Check if this is a leaf
    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }

    /// The operator at the root, if any
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Constant(_) => None,
            Expression::Unary { op, .. } | Expression::Binary { op, .. } => Some(*op),
        }
    }
}

/// Fully parenthesized rendering that the lexer can read back
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Unary { op, operand } => write!(f, "( {} {} )", op, operand),
            Expression::Binary { left, op, right } => write!(f, "( {} {} {} )", left, op, right),
        }
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

impl Operator {
    /// Source symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    /// Check if the operator has a meaning in prefix position
    pub fn has_unary_form(&self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
