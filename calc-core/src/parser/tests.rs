use crate::lexer::prelude::{tokenize, TokenKind};
use super::prelude::{
    parse_source, FunctionName, ParseError, ParseErrorType, Parser, Postfix
};

fn parsed_display(input: &str) -> String {
    match parse_source(input) {
        Ok(expression) => expression.to_string(),
        Err(err) => panic!("parse failed for `{input}`: {:?}", err.error),
    }
}

fn parse_failure(input: &str) -> ParseErrorType {
    match parse_source(input) {
        Err(err) => err.error,
        Ok(expression) => panic!("expected parse error for `{input}`, got `{expression}`"),
    }
}

#[test]
fn test_precedence() {
    assert_eq!(parsed_display("2 + 3 * 4"), "(2 + (3 * 4))");
    assert_eq!(parsed_display("(2 + 3) * 4"), "((2 + 3) * 4)");
    assert_eq!(parsed_display("10 / 2 * 5"), "((10 / 2) * 5)");
    assert_eq!(parsed_display("10 - 2 + 3"), "((10 - 2) + 3)");
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(parsed_display("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
}

#[test]
fn test_factorial_binds_tighter_than_power() {
    assert_eq!(parsed_display("3!^2"), "((3!) ^ 2)");
    assert_eq!(parsed_display("2 ^ 3!"), "(2 ^ (3!))");
    assert_eq!(parsed_display("3!!"), "((3!)!)");
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(parsed_display("2(3+1)"), "(2 * (3 + 1))");
    assert_eq!(parsed_display("2sin(0)"), "(2 * sin(0))");
    assert_eq!(parsed_display("(2)(3)"), "(2 * 3)");
    assert_eq!(parsed_display("2 3"), "(2 * 3)");
}

#[test]
fn test_signed_literal_with_power() {
    // The leading minus is part of the literal, so this groups as
    // (-3)^2, not -(3^2).
    assert_eq!(parsed_display("-3 ^ 2"), "(-3 ^ 2)");
}

#[test]
fn test_function_calls() {
    assert_eq!(parsed_display("sin(cos(0))"), "sin(cos(0))");
    assert_eq!(parsed_display("sin(30) ^ 2"), "(sin(30) ^ 2)");
}

#[test]
fn test_postfix() {
    let expression = parse_source("2 + 3 * 4").expect("parse");
    assert_eq!(expression.postfix(), "2 3 4 * +");

    let expression = parse_source("sin(30)!").expect("parse");
    assert_eq!(expression.postfix(), "30 sin !");
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(parse_failure("(2 + 3"), ParseErrorType::UnclosedParen);
    assert_eq!(parse_failure("2 + 3)"), ParseErrorType::UnexpectedClosingParen);
    assert_eq!(parse_failure("(2 + )"), ParseErrorType::UnexpectedClosingParen);
}

#[test]
fn test_function_without_parentheses() {
    assert_eq!(
        parse_failure("sin 30"),
        ParseErrorType::ExpectedLParenAfterFunction { function: FunctionName::Sin }
    );
}

#[test]
fn test_missing_atom() {
    assert_eq!(
        parse_failure("2 + * 3"),
        ParseErrorType::UnexpectedToken { token: TokenKind::Multiply }
    );
    assert_eq!(parse_failure(""), ParseErrorType::UnexpectedEof);
    assert_eq!(parse_failure("2 +"), ParseErrorType::UnexpectedEof);
}

#[test]
fn test_lexical_error_is_wrapped() {
    assert!(matches!(
        parse_failure("2 & 2"),
        ParseErrorType::LexError { .. }
    ));
}

#[test]
fn test_parser_over_token_sequence() -> Result<(), ParseError> {
    let tokens = tokenize("2 + 2").expect("tokenize");

    let parsed = Parser::new(tokens)?.parse()?;

    assert_eq!(parsed.to_string(), "(2 + 2)");

    Ok(())
}

#[test]
fn test_determinism() {
    let a = parse_source("2sin(30)! ^ 2").expect("parse");
    let b = parse_source("2sin(30)! ^ 2").expect("parse");

    assert_eq!(a, b);
}
