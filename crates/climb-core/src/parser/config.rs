//! Parser configuration

use crate::ast::nodes::Operator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default nesting limit for prefix operators, groups and right operands
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Operator '{0}' cannot be used as a prefix operator")]
    UnsupportedPrefix(Operator),

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Tunable parser behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Operators accepted in prefix position
    pub prefix_operators: Vec<Operator>,
    /// Maximum recursion depth and tree height before the parse is aborted
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prefix_operators: vec![Operator::Minus],
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Accept `+` as a prefix operator
    pub fn with_unary_plus(mut self) -> Self {
        if !self.prefix_operators.contains(&Operator::Plus) {
            self.prefix_operators.push(Operator::Plus);
        }
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check if an operator has a prefix rule
    pub fn is_prefix(&self, op: Operator) -> bool {
        self.prefix_operators.contains(&op)
    }

    /// Reject settings the parser and evaluator cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(op) = self.prefix_operators.iter().find(|op| !op.has_unary_form()) {
            return Err(ConfigError::UnsupportedPrefix(*op));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
