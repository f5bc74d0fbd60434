//! Error types for a1notation-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, building, or measuring A1 references
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input: empty text, bad column letters, non-positive row,
    /// unsupported notation, or inverted row bounds
    #[error("{0}")]
    InvalidArgument(String),

    /// Width or height requested on an axis the reference does not bound
    #[error("{0}")]
    UnboundedDimension(String),

    /// A sheet-only reference was requested from a builder without a sheet
    #[error("Sheet name is not set")]
    MissingSheet,
}

impl Error {
    /// Create a new "invalid argument" error with a message
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a new "unbounded dimension" error with a message
    pub fn unbounded<S: Into<String>>(msg: S) -> Self {
        Error::UnboundedDimension(msg.into())
    }

    /// Whether this error reports malformed input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Whether this error reports an unbounded width or height
    pub fn is_unbounded_dimension(&self) -> bool {
        matches!(self, Error::UnboundedDimension(_))
    }
}
