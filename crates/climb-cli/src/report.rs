//! Per-expression results in text or JSON form

use anyhow::Result;
use climb_core::ast::NodeStats;
use climb_core::{evaluate_with, Error, ErrorKind, Expression, ParserConfig};
use serde::Serialize;

/// Structured description of a failed expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexeme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl From<&Error> for Failure {
    fn from(error: &Error) -> Self {
        let mut failure = Self {
            kind: error.kind(),
            message: error.to_string(),
            lexeme: None,
            line: None,
            column: None,
            position: None,
        };

        if let Error::Parse(e) = error {
            let token = e.token();
            failure.lexeme = Some(token.text.clone());
            failure.line = Some(token.line);
            failure.column = Some(token.column);
            failure.position = Some(e.position());
        }

        failure
    }
}

/// Outcome of one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success {
        expression: Expression,
        rendered: String,
        value: f64,
        stats: NodeStats,
    },
    Failure {
        error: Failure,
    },
}

impl Report {
    /// Parse and evaluate one expression
    pub fn run(source: &str, config: &ParserConfig) -> Self {
        match evaluate_with(source, config) {
            Ok(evaluation) => Report::Success {
                rendered: evaluation.expression.to_string(),
                stats: NodeStats::of(&evaluation.expression),
                expression: evaluation.expression,
                value: evaluation.value,
            },
            Err(e) => {
                tracing::debug!(source, error = %e, "expression failed");
                Report::Failure { error: Failure::from(&e) }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success { .. })
    }

    /// Human readable line
    pub fn to_text(&self, tree: bool) -> String {
        match self {
            Report::Success { rendered, value, .. } if tree => format!("{} = {}", rendered, value),
            Report::Success { value, .. } => value.to_string(),
            Report::Failure { error } => format!("error[{:?}]: {}", error.kind, error.message),
        }
    }

    /// Single-line JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
