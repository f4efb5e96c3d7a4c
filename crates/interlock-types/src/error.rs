use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("non-canonical padding in {0} word")]
    NonCanonicalPadding(&'static str),

    #[error("int256 value does not fit in 64 bits")]
    IntegerOverflow,
}
