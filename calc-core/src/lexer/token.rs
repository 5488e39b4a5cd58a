use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

pub fn str_to_function(word: &str) -> Option<TokenKind> {
    Some(match word {
        "sin" => TokenKind::Sin,
        "cos" => TokenKind::Cos,

        _ => return None
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // {<digit>}[.{/ <digit> /}], optionally signed
    Number,

    // Additive operators
    Plus, // +
    Minus, // -

    // Multiplicative operators
    Multiply, // *
    Divide, // /

    Power, // ^
    Factorial, // !

    LParen, // (
    RParen, // )

    // Built-in functions
    Sin, // sin
    Cos, // cos

    Eof,
}

impl TokenKind {
    // A `-` straight after one of these is the sign of a numeric
    // literal, not a subtraction.
    pub fn binds_following_sign(&self) -> bool {
        match self {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Power
            | TokenKind::LParen => true,
            _ => false
        }
    }

    // Tokens that can start an atom; one of these straight after a
    // parsed atom forms an implicit multiplication.
    pub fn begins_atom(&self) -> bool {
        match self {
            TokenKind::Number
            | TokenKind::LParen
            | TokenKind::Sin
            | TokenKind::Cos => true,
            _ => false
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            TokenKind::Number => "a number".to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Multiply => "*".to_string(),
            TokenKind::Divide => "/".to_string(),
            TokenKind::Power => "^".to_string(),
            TokenKind::Factorial => "!".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Sin => "sin".to_string(),
            TokenKind::Cos => "cos".to_string(),
            TokenKind::Eof => "end of expression".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    // Exact source substring the token was scanned from.
    pub lexeme: String,
    // Parsed numeric value, only present for Number tokens.
    pub literal: Option<f64>,
    pub location: SrcSpan,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literal {
            Some(value) => write!(f, "{:?}({value})", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}
