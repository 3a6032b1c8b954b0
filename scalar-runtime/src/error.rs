//! Evaluation error types

use scalar_ops::ParseError;
use thiserror::Error;

use crate::value::ScalarType;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{primitive} expects {expected} operand(s), got {found}")]
    ArityMismatch {
        primitive: String,
        expected: usize,
        found: usize,
    },

    #[error("{primitive} operand {index}: expected {expected}, got {found}")]
    TypeMismatch {
        primitive: String,
        index: usize,
        expected: ScalarType,
        found: ScalarType,
    },

    #[error("Division by zero in {primitive}")]
    DivisionByZero { primitive: String },
}

impl EvalError {
    /// Whether the call itself was malformed (bad name, arity or operand types)
    pub fn is_malformed_call(&self) -> bool {
        !matches!(self, EvalError::DivisionByZero { .. })
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
