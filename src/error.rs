// File: ./src/error.rs
//! Error types for ICS parsing and formatting.

use thiserror::Error;

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, IcsError>;

/// Failures of the ICS pipeline.
///
/// Malformed property lines and unparseable dates are absorbed by the parser
/// and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IcsError {
    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// An RRULE part could not be decoded
    #[error("invalid recurrence rule part '{part}': {message}")]
    InvalidRecurrence {
        /// The offending `KEY=VALUE` part (or list entry)
        part: String,
        /// What was wrong with it
        message: String,
    },
}

impl IcsError {
    /// Create a recurrence error
    #[inline]
    #[must_use = "returns IcsError for an undecodable RRULE part"]
    pub fn invalid_recurrence(part: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecurrence {
            part: part.into(),
            message: message.into(),
        }
    }
}

impl From<std::str::Utf8Error> for IcsError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8(err.to_string())
    }
}
