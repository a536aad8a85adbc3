//! Error types.

use thiserror::Error;

/// Errors reported by strict percent-decoding.
///
/// Offsets are byte offsets of the offending `%` in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("truncated percent sequence at offset {offset}")]
    Truncated { offset: usize },

    #[error("invalid percent sequence {sequence:?} at offset {offset}")]
    InvalidHex { offset: usize, sequence: String },

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
