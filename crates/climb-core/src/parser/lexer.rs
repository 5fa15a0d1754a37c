//! Lexer for arithmetic expressions
//!
//! The lexer splits source text on whitespace and classifies each symbol.
//! Every token must be surrounded by whitespace: `1+2` is a single symbol
//! and classifies as [`TokenKind::Illegal`].

use super::token::{Token, TokenKind};

/// Lexer for tokenizing expression source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer from source text
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start_line = self.line;
        let start_column = self.column;

        if self.is_at_end() {
            return Token::eof(start_line, start_column);
        }

        let mut symbol = String::new();
        while !self.is_at_end() && !is_separator(self.current_char()) {
            symbol.push(self.advance());
        }

        let kind = TokenKind::classify(&symbol);
        if kind == TokenKind::Illegal {
            tracing::debug!(
                symbol = %symbol,
                line = start_line,
                column = start_column,
                "lexical anomaly: unrecognized symbol"
            );
        }

        Token::new(kind, symbol, start_line, start_column)
    }

    /// Tokenize all input, terminated by exactly one EOF token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) -> char {
        let ch = self.current_char();
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_separator(self.current_char()) {
            self.advance();
        }
    }
}

/// Token separators: space, tab, carriage return and line feed
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
