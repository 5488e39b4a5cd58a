use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    UnknownIdentifier { name: String },
    InvalidNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => {
                ("Unexpected character", vec![format!("`{ch}` is not part of any expression")])
            },
            LexicalErrorType::UnknownIdentifier { name } => {
                ("Unexpected identifier", vec![format!("`{name}` is not a known function, expected `sin` or `cos`")])
            },
            LexicalErrorType::InvalidNumber => {
                ("Invalid number literal", vec![])
            }
        }
    }
}
