use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorType {
    DivisionByZero,
    NegativeFactorial,
    NonIntegerFactorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalError {
    pub error: EvalErrorType,
    pub location: SrcSpan
}

impl EvalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            EvalErrorType::DivisionByZero => {
                ("Division by zero", vec!["The divisor evaluates to exactly 0".to_string()])
            },
            EvalErrorType::NegativeFactorial => {
                ("Factorial is not defined for negative numbers", vec![])
            },
            EvalErrorType::NonIntegerFactorial => {
                ("Factorial is only defined for integers", vec![])
            }
        }
    }
}

pub fn eval_error<T>(error: EvalErrorType, location: SrcSpan) -> Result<T, EvalError> {
    Err(EvalError { error, location })
}
