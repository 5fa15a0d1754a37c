//! Numeric evaluation of expression trees

use crate::ast::nodes::{Expression, Operator};
use thiserror::Error;

/// Evaluation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid power: {base} ^ {exponent} has no real result")]
    InvalidPower { base: f64, exponent: f64 },

    #[error("Overflow evaluating '{op}'")]
    Overflow { op: Operator },

    #[error("Result of '{op}' is undefined")]
    Undefined { op: Operator },

    #[error("Operator '{op}' has no unary form")]
    UnsupportedUnary { op: Operator },
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluate an expression tree to a number
pub fn value_of(expr: &Expression) -> EvalResult<f64> {
    match expr {
        Expression::Constant(value) => Ok(*value),
        Expression::Unary { op, operand } => apply_unary(*op, value_of(operand)?),
        Expression::Binary { left, op, right } => {
            let left = value_of(left)?;
            let right = value_of(right)?;
            apply_binary(left, *op, right)
        }
    }
}

fn apply_unary(op: Operator, value: f64) -> EvalResult<f64> {
    match op {
        Operator::Minus => Ok(-value),
        Operator::Plus => Ok(value),
        _ => Err(EvalError::UnsupportedUnary { op }),
    }
}

fn apply_binary(left: f64, op: Operator, right: f64) -> EvalResult<f64> {
    let result = match op {
        Operator::Plus => left + right,
        Operator::Minus => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        }
        Operator::Power => power(left, right)?,
    };

    if result.is_infinite() && left.is_finite() && right.is_finite() {
        return Err(EvalError::Overflow { op });
    }
    if result.is_nan() && !left.is_nan() && !right.is_nan() {
        return Err(EvalError::Undefined { op });
    }
    Ok(result)
}

fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::InvalidPower { base, exponent });
    }

    let result = base.powf(exponent);
    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(EvalError::InvalidPower { base, exponent });
    }
    Ok(result)
}
