use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

pub trait Postfix {
    fn postfix(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        };

        write!(f, "{operator}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Factorial,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factorial => write!(f, "!")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionName {
    Sin,
    Cos,
}

impl Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        };

        write!(f, "{name}")
    }
}

// expression -> term {("+" | "-") term}
// term       -> power {("*" | "/" | ε) power}
// power      -> factorial ["^" power]
// factorial  -> function {"!"}
// function   -> ("sin" | "cos") "(" expression ")" | primary
// primary    -> number | "(" expression ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number {
        value: f64,
        location: SrcSpan
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: SrcSpan
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        location: SrcSpan
    },
    Function {
        name: FunctionName,
        argument: Box<Expression>,
        location: SrcSpan
    },
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number { location, .. }
            | Self::Binary { location, .. }
            | Self::Unary { location, .. }
            | Self::Function { location, .. } => *location
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Binary { operator, left, right, .. } => write!(f, "({left} {operator} {right})"),
            Self::Unary { operator, operand, .. } => write!(f, "({operand}{operator})"),
            Self::Function { name, argument, .. } => write!(f, "{name}({argument})"),
        }
    }
}

impl Postfix for Expression {
    fn postfix(&self) -> String {
        match self {
            Self::Number { value, .. } => format!("{value}"),
            Self::Binary { operator, left, right, .. } => {
                format!("{} {} {operator}", left.postfix(), right.postfix())
            },
            Self::Unary { operator, operand, .. } => {
                format!("{} {operator}", operand.postfix())
            },
            Self::Function { name, argument, .. } => {
                format!("{} {name}", argument.postfix())
            },
        }
    }
}
