//! Domain error types.

use thiserror::Error;

/// Errors produced while parsing a bit pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input was empty or contained characters outside `[0-9a-fA-F]`.
    #[error("invalid hex input: {input:?}")]
    InvalidHex {
        /// The rejected input string.
        input: String,
    },
}

impl DecodeError {
    /// Creates invalid hex error.
    #[must_use]
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
