//! Error types for packed vector construction and format lookup.
//!
//! Encoding and decoding themselves never fail: out-of-range inputs are
//! clamped.  Errors only arise from bulk construction out of a slice that is
//! too short, and from the runtime format registry.

use thiserror::Error;

/// Result type alias for packed vector operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer values were supplied than the format has components.
    #[error("invalid argument: need at least {expected} components, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    /// No packed format is known by this name.
    #[error("unknown packed vector format: {0:?}")]
    UnknownFormat(String),

    /// Text is not a hex integer that fits in the format's packed width.
    #[error("invalid packed value {text:?} for a {bits}-bit format")]
    InvalidPacked { text: String, bits: u32 },
}

impl Error {
    pub fn invalid_argument(expected: usize, actual: usize) -> Self {
        Error::InvalidArgument { expected, actual }
    }

    pub fn invalid_packed(text: impl Into<String>, bits: u32) -> Self {
        Error::InvalidPacked {
            text: text.into(),
            bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::invalid_argument(4, 3).to_string(),
            "invalid argument: need at least 4 components, got 3"
        );
        assert_eq!(
            Error::UnknownFormat("Byte3".into()).to_string(),
            "unknown packed vector format: \"Byte3\""
        );
        assert_eq!(
            Error::invalid_packed("12345", 16).to_string(),
            "invalid packed value \"12345\" for a 16-bit format"
        );
    }
}
