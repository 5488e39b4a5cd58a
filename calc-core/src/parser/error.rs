use crate::{lexer::prelude::{LexicalError, TokenKind}, utils::prelude::SrcSpan};
use super::ast::FunctionName;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedClosingParen,
    UnclosedParen,
    ExpectedLParenAfterFunction { function: FunctionName },
    ExpectedRParenAfterArgument,
    ExpectedRParenAfterExpression,
    UnexpectedToken { token: TokenKind },
    UnexpectedEof,
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedClosingParen => ("Unexpected closing parenthesis", vec![]),
            ParseErrorType::UnclosedParen => ("Unclosed parenthesis", vec![]),
            ParseErrorType::ExpectedLParenAfterFunction { function } => (
                "Expect '(' after function name.",
                vec![format!("`{function}` is a function call, write `{function}(...)`")]
            ),
            ParseErrorType::ExpectedRParenAfterArgument => {
                ("Expect ')' after function argument.", vec![])
            },
            ParseErrorType::ExpectedRParenAfterExpression => {
                ("Expect ')' after expression", vec![])
            },
            ParseErrorType::UnexpectedToken { token } => (
                "Unexpected token",
                vec![format!("Found `{}`, expected a number, `(`, `sin` or `cos`", token.as_literal())]
            ),
            ParseErrorType::UnexpectedEof => ("Unexpected end of expression", vec![]),
            ParseErrorType::LexError { error } => error.details()
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
