//! Integration tests for precedence, associativity and grouping

use climb_core::ast::Operator;
use climb_core::testing::{binary, eval_ok, neg, num, parse_ok};
use climb_core::{evaluate_with, ParserConfig};

#[test]
fn test_left_associative_sum() {
    assert_eq!(eval_ok("1 + 2 + 3"), 6.0);
    assert_eq!(parse_ok("1 + 2 + 3").to_string(), "( ( 1 + 2 ) + 3 )");
}

#[test]
fn test_left_associative_difference() {
    assert_eq!(eval_ok("10 - 4 - 3"), 3.0);
    assert_eq!(eval_ok("64 / 4 / 2"), 8.0);
}

#[test]
fn test_right_associative_power() {
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(parse_ok("2 ^ 3 ^ 2").to_string(), "( 2 ^ ( 3 ^ 2 ) )");
}

#[test]
fn test_precedence_ordering() {
    assert_eq!(eval_ok("2 * 3 + 3"), 9.0);
    assert_eq!(eval_ok("2 + 3 * 3"), 11.0);
    assert_eq!(eval_ok("2 + 12 / 4 - 1"), 4.0);
    assert_eq!(eval_ok("2 * 3 ^ 2"), 18.0);
}

#[test]
fn test_unary_minus_and_power() {
    assert_eq!(eval_ok("- 2 ^ 2"), -4.0);
    assert_eq!(parse_ok("- 2 ^ 2"), neg(binary(num(2.0), Operator::Power, num(2.0))));
}

#[test]
fn test_unary_minus_and_sum() {
    assert_eq!(eval_ok("- 2 + 2"), 0.0);
    assert_eq!(parse_ok("- 2 + 2").to_string(), "( ( - 2 ) + 2 )");
}

#[test]
fn test_unary_minus_in_exponent() {
    assert_eq!(eval_ok("2 ^ - 1"), 0.5);
    assert_eq!(eval_ok("2 ^ - 1 ^ 2"), 0.5);
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(eval_ok("( 2 + 3 ) * 3"), 15.0);
    assert_eq!(eval_ok("( 2 ^ 3 ) ^ 2"), 64.0);
    assert_eq!(eval_ok("- ( 2 + 2 )"), -4.0);
    assert_eq!(eval_ok("( - 2 ) ^ 2"), 4.0);
}

#[test]
fn test_grouping_leaves_no_trace_in_tree() {
    assert_eq!(parse_ok("( ( 1 + 2 ) )"), parse_ok("1 + 2"));
    assert_eq!(parse_ok("1 + ( 2 * 3 )"), parse_ok("1 + 2 * 3"));
}

#[test]
fn test_decimal_literals() {
    assert_eq!(eval_ok("0.5 + .25 + 2."), 2.75);
    assert_eq!(eval_ok("007 * 1"), 7.0);
}

#[test]
fn test_multiline_input() {
    assert_eq!(eval_ok("1 +\n 2 *\n\t3"), 7.0);
}

#[test]
fn test_unary_plus_configuration() {
    let config = ParserConfig::default().with_unary_plus();
    let evaluation = evaluate_with("+ 3 * - 2", &config).unwrap();
    assert_eq!(evaluation.value, -6.0);
    assert_eq!(evaluation.expression.to_string(), "( ( + 3 ) * ( - 2 ) )");
}

#[test]
fn test_determinism() {
    let source = "- 1.5 * ( 2 + 3 ) ^ 2 / 4 - 7";
    let first = climb_core::evaluate(source).unwrap();
    for _ in 0..10 {
        assert_eq!(climb_core::evaluate(source).unwrap(), first);
    }
}
