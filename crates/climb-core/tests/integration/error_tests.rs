//! Integration tests for error reporting

use climb_core::parser::{ParseError, TokenKind};
use climb_core::{evaluate, evaluate_with, EvalError, Error, ErrorKind, ParserConfig};

fn kind_of(source: &str) -> ErrorKind {
    match evaluate(source) {
        Ok(evaluation) => panic!("Expected {:?} to fail, got {}", source, evaluation.value),
        Err(e) => e.kind(),
    }
}

#[test]
fn test_unmatched_parenthesis() {
    assert_eq!(kind_of("( 1 + 2"), ErrorKind::UnmatchedParenthesis);
    assert_eq!(kind_of("( ( 1 + 2 )"), ErrorKind::UnmatchedParenthesis);
}

#[test]
fn test_no_prefix_rule() {
    assert_eq!(kind_of("+ 2"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of("* 2"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of("1 * / 2"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of("( )"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of(""), ErrorKind::UnexpectedToken);
}

#[test]
fn test_trailing_input() {
    assert_eq!(kind_of("1 2"), ErrorKind::TrailingInput);
    assert_eq!(kind_of("( 1 ) ( 2 )"), ErrorKind::TrailingInput);
    assert_eq!(kind_of("2 ( 3 )"), ErrorKind::TrailingInput);
    assert_eq!(kind_of("1 )"), ErrorKind::TrailingInput);
}

#[test]
fn test_lexical_anomaly() {
    assert_eq!(kind_of("1 + two"), ErrorKind::LexicalAnomaly);
    assert_eq!(kind_of("(1 + 2)"), ErrorKind::LexicalAnomaly);
    assert_eq!(kind_of("1.2.3"), ErrorKind::LexicalAnomaly);
}

#[test]
fn test_arithmetic_failure() {
    assert_eq!(kind_of("1 / 0"), ErrorKind::ArithmeticFailure);
    assert_eq!(kind_of("1 / ( 2 - 2 )"), ErrorKind::ArithmeticFailure);
    assert_eq!(kind_of("( - 8 ) ^ 0.5"), ErrorKind::ArithmeticFailure);
    assert_eq!(kind_of("0 ^ - 1"), ErrorKind::ArithmeticFailure);
    assert_eq!(kind_of("10 ^ 400"), ErrorKind::ArithmeticFailure);
}

#[test]
fn test_literal_too_large_for_f64() {
    let huge = "9".repeat(400);
    assert_eq!(kind_of(&huge), ErrorKind::LexicalAnomaly);
    assert_eq!(kind_of(&format!("{} - {}", huge, huge)), ErrorKind::LexicalAnomaly);
}

#[test]
fn test_long_chain_fails_cleanly() {
    let source = vec!["1"; 300_000].join(" + ");
    assert_eq!(kind_of(&source), ErrorKind::NestingTooDeep);

    let config = ParserConfig::default().with_max_depth(1_000);
    let source = vec!["1"; 1_000].join(" + ");
    assert_eq!(evaluate_with(&source, &config).unwrap().value, 1_000.0);
}

#[test]
fn test_error_carries_lexeme_and_location() {
    let err = evaluate("1 +\n  2 $").unwrap_err();
    match err {
        Error::Parse(ParseError::LexicalAnomaly { token, position }) => {
            assert_eq!(token.text, "$");
            assert_eq!(token.kind, TokenKind::Illegal);
            assert_eq!((token.line, token.column), (2, 5));
            assert_eq!(position, 3);
        }
        other => panic!("Expected LexicalAnomaly, got {:?}", other),
    }
}

#[test]
fn test_first_error_wins() {
    // Both a stray symbol and an unclosed group; the parser stops at the first
    let err = evaluate("( 1 + @ + 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LexicalAnomaly);
}

#[test]
fn test_evaluation_error_value() {
    assert_eq!(
        evaluate("4 / 0").unwrap_err(),
        Error::Eval(EvalError::DivisionByZero)
    );
}

#[test]
fn test_nesting_limit() {
    let config = ParserConfig::default().with_max_depth(8);
    let source = format!("{}1", "- ".repeat(20));
    let err = evaluate_with(&source, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);

    let source = format!("{}1", "- ".repeat(7));
    assert_eq!(evaluate_with(&source, &config).unwrap().value, -1.0);
}
