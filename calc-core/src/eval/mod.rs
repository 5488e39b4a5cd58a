#[cfg(test)]
mod tests;

pub mod error;

use std::path::PathBuf;

use crate::{
    parser::prelude::{parse_source, BinaryOperator, Expression, FunctionName, UnaryOperator},
    utils::prelude::{Error, SrcSpan},
};

use self::error::{eval_error, EvalError, EvalErrorType};

// Runs the whole pipeline over one expression source, wrapping stage
// failures for diagnostic rendering.
pub fn eval_source(src: &str, path: PathBuf) -> Result<f64, Error> {
    let expression = match parse_source(src) {
        Ok(expression) => expression,
        Err(error) => return Err(Error::Parse {
            path,
            src: src.to_string(),
            error
        })
    };

    match interpret(&expression) {
        Ok(value) => Ok(value),
        Err(error) => Err(Error::Eval {
            path,
            src: src.to_string(),
            error
        })
    }
}

// Pure function of the tree; no state survives between calls.
pub fn interpret(expression: &Expression) -> Result<f64, EvalError> {
    match expression {
        Expression::Number { value, .. } => Ok(*value),
        Expression::Binary { operator, left, right, .. } => eval_binary(*operator, left, right),
        Expression::Unary { operator, operand, location } => eval_unary(*operator, operand, *location),
        Expression::Function { name, argument, .. } => eval_function(*name, argument),
    }
}

fn eval_binary(
    operator: BinaryOperator,
    left: &Expression,
    right: &Expression
) -> Result<f64, EvalError> {
    let left_value = interpret(left)?;
    let right_value = interpret(right)?;

    match operator {
        BinaryOperator::Plus => Ok(left_value + right_value),
        BinaryOperator::Minus => Ok(left_value - right_value),
        BinaryOperator::Multiply => Ok(left_value * right_value),
        BinaryOperator::Divide => {
            if right_value == 0.0 {
                return eval_error(EvalErrorType::DivisionByZero, right.location());
            }

            Ok(left_value / right_value)
        },
        BinaryOperator::Power => Ok(left_value.powf(right_value)),
    }
}

fn eval_unary(
    operator: UnaryOperator,
    operand: &Expression,
    location: SrcSpan
) -> Result<f64, EvalError> {
    let value = interpret(operand)?;

    match operator {
        UnaryOperator::Factorial => {
            if value < 0.0 {
                return eval_error(EvalErrorType::NegativeFactorial, location);
            }
            if value.fract() != 0.0 {
                return eval_error(EvalErrorType::NonIntegerFactorial, location);
            }

            // Product of 2..=n; 0! and 1! both fall through to 1.
            let mut result = 1.0;
            let mut factor = 2.0;

            while factor <= value {
                result *= factor;
                factor += 1.0;
            }

            Ok(result)
        }
    }
}

fn eval_function(name: FunctionName, argument: &Expression) -> Result<f64, EvalError> {
    let value = interpret(argument)?;

    // Arguments are taken as radians; no unit conversion happens here.
    match name {
        FunctionName::Sin => Ok(value.sin()),
        FunctionName::Cos => Ok(value.cos()),
    }
}
