//! Precedence-climbing parser for arithmetic expressions

use super::config::ParserConfig;
use super::lexer::Lexer;
use super::precedence::{precedence_of, right_binding, Precedence};
use super::token::{Token, TokenKind};
use crate::ast::nodes::Expression;
use crate::ErrorKind;
use thiserror::Error;

/// Parse error
///
/// Every variant carries the offending token and the cursor position
/// (index into the token sequence) at which parsing stopped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Illegal token {token} (token {position})")]
    LexicalAnomaly { token: Token, position: usize },

    #[error("Unexpected token {token} (token {position})")]
    UnexpectedToken { token: Token, position: usize },

    #[error("Expected ')' to close {open}, found {found} (token {position})")]
    UnmatchedParenthesis { open: Token, found: Token, position: usize },

    /// Tokens remain after a complete operand, including `(` where an
    /// operator was expected
    #[error("Unexpected trailing input {token} (token {position})")]
    TrailingInput { token: Token, position: usize },

    /// Recursion depth or tree height exceeded `ParserConfig::max_depth`
    #[error("Expression nested deeper than {limit} levels at {token} (token {position})")]
    NestingTooDeep { token: Token, position: usize, limit: usize },
}

impl ParseError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::LexicalAnomaly { .. } => ErrorKind::LexicalAnomaly,
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            ParseError::TrailingInput { .. } => ErrorKind::TrailingInput,
            ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// The token the parser stopped at
    pub fn token(&self) -> &Token {
        match self {
            ParseError::LexicalAnomaly { token, .. }
            | ParseError::UnexpectedToken { token, .. }
            | ParseError::TrailingInput { token, .. }
            | ParseError::NestingTooDeep { token, .. } => token,
            ParseError::UnmatchedParenthesis { found, .. } => found,
        }
    }

    /// Cursor position in the token sequence
    pub fn position(&self) -> usize {
        match self {
            ParseError::LexicalAnomaly { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnmatchedParenthesis { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Expression under construction together with its tree height
struct Subtree {
    expr: Expression,
    height: usize,
}

impl Subtree {
    fn leaf(expr: Expression) -> Self {
        Self { expr, height: 1 }
    }
}

/// Parser for arithmetic expressions
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    /// Create a new parser from source text
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// Create a new parser with explicit configuration
    pub fn with_config(source: &str, config: ParserConfig) -> Self {
        let tokens = Lexer::new(source).tokenize();
        Self::from_tokens(tokens, config)
    }

    /// Create a parser over an already lexed token sequence
    ///
    /// Tokens after the first EOF are dropped; a sequence without one gets
    /// an EOF appended after its last token.
    pub fn from_tokens(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        match tokens.iter().position(|t| t.kind == TokenKind::Eof) {
            Some(eof) => tokens.truncate(eof + 1),
            None => {
                let (line, column) = tokens
                    .last()
                    .map(|t| (t.line, t.column + t.text.chars().count()))
                    .unwrap_or((1, 1));
                tokens.push(Token::eof(line, column));
            }
        }

        Self {
            tokens,
            position: 0,
            config,
            depth: 0,
        }
    }

    /// Parse a complete expression, consuming every token up to EOF
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression(Precedence::ENTRY)?;

        let token = self.current();
        match token.kind {
            TokenKind::Eof => {
                tracing::debug!(tokens = self.tokens.len(), expr = %expr, "parsed expression");
                Ok(expr)
            }
            TokenKind::Illegal => Err(ParseError::LexicalAnomaly {
                token: token.clone(),
                position: self.position,
            }),
            _ => Err(ParseError::TrailingInput {
                token: token.clone(),
                position: self.position,
            }),
        }
    }

    /// Parse an expression whose infix operators bind at least as tightly as `min`
    pub fn parse_expression(&mut self, min: Precedence) -> ParseResult<Expression> {
        self.parse_subtree(min).map(|subtree| subtree.expr)
    }

    fn parse_subtree(&mut self, min: Precedence) -> ParseResult<Subtree> {
        if self.depth >= self.config.max_depth {
            return Err(self.nesting_too_deep(self.position));
        }

        self.depth += 1;
        let result = self.climb(min);
        self.depth -= 1;
        result
    }

    fn climb(&mut self, min: Precedence) -> ParseResult<Subtree> {
        let mut left = self.parse_prefix()?;

        loop {
            let precedence = precedence_of(self.current().kind);
            // Sentinel-ranked tokens never continue an expression
            if precedence == Precedence::Lowest || precedence < min {
                break;
            }
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> ParseResult<Subtree> {
        let token = self.current().clone();
        let position = self.position;
        self.advance();

        tracing::trace!(kind = %token.kind, text = %token.text, position, "prefix");

        match token.kind {
            TokenKind::Number => match token.text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Subtree::leaf(Expression::constant(value))),
                _ => Err(ParseError::LexicalAnomaly { token, position }),
            },

            TokenKind::LParen => {
                let inner = self.parse_subtree(Precedence::ENTRY)?;
                self.expect_closing(token)?;
                Ok(inner)
            }

            TokenKind::Illegal => Err(ParseError::LexicalAnomaly { token, position }),

            kind => match kind.operator() {
                Some(op) if self.config.is_prefix(op) => {
                    let operand = self.parse_subtree(Precedence::PREFIX)?;
                    let height = self.node_height(operand.height, position)?;
                    Ok(Subtree {
                        expr: Expression::unary(op, operand.expr),
                        height,
                    })
                }
                _ => Err(ParseError::UnexpectedToken { token, position }),
            },
        }
    }

    fn parse_infix(&mut self, left: Subtree) -> ParseResult<Subtree> {
        let token = self.current().clone();
        let position = self.position;

        // Only `(` ranks above Lowest without an infix rule
        let op = match token.kind.operator() {
            Some(op) => op,
            None => return Err(ParseError::TrailingInput { token, position }),
        };
        self.advance();

        tracing::trace!(op = %op, position, "infix");

        let right = self.parse_subtree(right_binding(token.kind))?;
        let height = self.node_height(left.height.max(right.height), position)?;
        Ok(Subtree {
            expr: Expression::binary(left.expr, op, right.expr),
            height,
        })
    }

    /// Height of a new node over children of height `child`, bounded by `max_depth`
    fn node_height(&self, child: usize, position: usize) -> ParseResult<usize> {
        let height = child + 1;
        if height > self.config.max_depth {
            return Err(self.nesting_too_deep(position));
        }
        Ok(height)
    }

    fn nesting_too_deep(&self, position: usize) -> ParseError {
        ParseError::NestingTooDeep {
            token: self.tokens[position].clone(),
            position,
            limit: self.config.max_depth,
        }
    }

    fn expect_closing(&mut self, open: Token) -> ParseResult<()> {
        let position = self.position;
        match self.current().kind {
            TokenKind::RParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Illegal => Err(ParseError::LexicalAnomaly {
                token: self.current().clone(),
                position,
            }),
            _ => Err(ParseError::UnmatchedParenthesis {
                open,
                found: self.current().clone(),
                position,
            }),
        }
    }

    // Helper methods

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }
}
