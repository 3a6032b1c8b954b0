//! Error types for scalar-ops
//!
//! The catalogue itself is total; only parsing of names and widths fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown width suffix: {0:?}")]
    UnknownWidth(String),

    #[error("Unsupported bit width: {0}")]
    UnsupportedBits(u32),

    #[error("Unknown primitive: {0:?}")]
    UnknownPrimitive(String),

    #[error("Invalid {ty} literal: {text:?}")]
    InvalidLiteral { ty: String, text: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
