use std::path::PathBuf;

use crate::parser::prelude::parse_source;
use super::error::EvalErrorType;
use super::{eval_source, interpret};

fn eval_str(input: &str) -> f64 {
    let expression = parse_source(input).expect("parse");

    interpret(&expression).expect("eval")
}

fn eval_failure(input: &str) -> EvalErrorType {
    let expression = parse_source(input).expect("parse");

    match interpret(&expression) {
        Err(err) => err.error,
        Ok(value) => panic!("expected evaluation error for `{input}`, got {value}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_arithmetic() {
    assert_close(eval_str("1 + 2"), 3.0);
    assert_close(eval_str("10 - 7"), 3.0);
    assert_close(eval_str("3 * 4"), 12.0);
    assert_close(eval_str("8 / 2"), 4.0);
    assert_close(eval_str("2 ^ 3"), 8.0);
}

#[test]
fn test_precedence() {
    assert_close(eval_str("2 + 3 * 4"), 14.0);
    assert_close(eval_str("(2 + 3) * 4"), 20.0);
    assert_close(eval_str("3 + 4 * (2 - 1)"), 7.0);
    assert_close(eval_str("10 / 2 * 5"), 25.0);
}

#[test]
fn test_power() {
    assert_close(eval_str("2 ^ 3 ^ 2"), 512.0);
    assert_close(eval_str("1 / (2 ^ -1)"), 2.0);
    assert_close(eval_str("(2 + 3) ^ 2"), 25.0);
}

#[test]
fn test_signed_literal_power() {
    // The lexer folds the sign into the literal, so both group as
    // (-3)^2 = 9 rather than -(3^2).
    assert_close(eval_str("-3 ^ 2"), 9.0);
    assert_close(eval_str("(-3) ^ 2"), 9.0);
}

#[test]
fn test_factorial() {
    assert_close(eval_str("3!"), 6.0);
    assert_close(eval_str("0!"), 1.0);
    assert_close(eval_str("1!"), 1.0);
    assert_close(eval_str("5! - 120"), 0.0);
    assert_close(eval_str("3!^2"), 36.0);
    assert_close(eval_str("2 ^ 3!"), 64.0);
    assert_close(eval_str("(3!)!"), 720.0);
}

#[test]
fn test_implicit_multiplication() {
    assert_close(eval_str("2(3+1)"), 8.0);
    assert_close(eval_str("2sin(0)"), 0.0);
    assert_close(eval_str("(2)(3)"), 6.0);
}

#[test]
fn test_functions_use_radians() {
    assert_close(eval_str("sin(0)"), 0.0);
    assert_close(eval_str("cos(0)"), 1.0);
    assert_close(eval_str("sin(30)"), 30.0f64.sin());
    assert_close(eval_str("sin(cos(0))"), 1.0f64.sin());
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval_failure("1 / 0"), EvalErrorType::DivisionByZero);
    assert_eq!(eval_failure("4 / (2 - 2)"), EvalErrorType::DivisionByZero);
}

#[test]
fn test_factorial_domain() {
    assert_eq!(eval_failure("(-1)!"), EvalErrorType::NegativeFactorial);
    assert_eq!(eval_failure("2.5!"), EvalErrorType::NonIntegerFactorial);
}

#[test]
fn test_determinism() {
    let a = parse_source("2 ^ 3! - sin(0.5)").expect("parse");
    let b = parse_source("2 ^ 3! - sin(0.5)").expect("parse");

    assert_eq!(a, b);
    assert_close(
        interpret(&a).expect("eval"),
        interpret(&b).expect("eval")
    );
}

#[test]
fn test_eval_source_reports_errors() {
    let err = eval_source("4 / (2 - 2)", PathBuf::from("<test>"))
        .expect_err("expected evaluation error");

    assert!(err.pretty_string().contains("Division by zero"));

    let err = eval_source("(2 + 3", PathBuf::from("<test>"))
        .expect_err("expected parse error");

    assert!(err.pretty_string().contains("Unclosed parenthesis"));
}
