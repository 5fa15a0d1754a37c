//! Test utilities and helper functions for climb tests
//!
//! This module provides short constructors for expression trees so that
//! expected shapes in tests read close to the source they come from.

use crate::ast::nodes::{Expression, Operator};
use crate::evaluator::value_of;
use crate::parser::parse;

/// Create a constant node
///
/// # Examples
/// ```
/// use climb_core::testing::num;
/// use climb_core::ast::Expression;
///
/// assert_eq!(num(2.0), Expression::Constant(2.0));
/// ```
pub fn num(value: f64) -> Expression {
    Expression::constant(value)
}

/// Create a unary minus node
pub fn neg(operand: Expression) -> Expression {
    Expression::unary(Operator::Minus, operand)
}

/// Create a binary node
///
/// # Examples
/// ```
/// use climb_core::testing::{binary, num};
/// use climb_core::ast::Operator;
///
/// let sum = binary(num(1.0), Operator::Plus, num(2.0));
/// assert_eq!(sum.to_string(), "( 1 + 2 )");
/// ```
pub fn binary(left: Expression, op: Operator, right: Expression) -> Expression {
    Expression::binary(left, op, right)
}

/// Parse with the default configuration, panicking on failure
pub fn parse_ok(source: &str) -> Expression {
    match parse(source) {
        Ok(expr) => expr,
        Err(e) => panic!("failed to parse {:?}: {}", source, e),
    }
}

/// Parse and evaluate with the default configuration, panicking on failure
///
/// # Examples
/// ```
/// use climb_core::testing::eval_ok;
///
/// assert_eq!(eval_ok("2 ^ 3 ^ 2"), 512.0);
/// ```
pub fn eval_ok(source: &str) -> f64 {
    let expr = parse_ok(source);
    match value_of(&expr) {
        Ok(value) => value,
        Err(e) => panic!("failed to evaluate {:?}: {}", source, e),
    }
}
