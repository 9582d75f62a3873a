//! Errors raised while reading version strings

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The only way parsing can fail: the input does not match the version
/// grammar from start to end.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid version {input:?}")]
    InvalidVersion { input: String },
}

impl ParseError {
    pub fn invalid(input: &str) -> Self {
        ParseError::InvalidVersion { input: input.to_string() }
    }

    /// The offending input string
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidVersion { input } => input,
        }
    }
}
