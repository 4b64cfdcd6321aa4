//! Error types for sieve
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Lookups of unknown documents or words are not errors: they yield empty
//! results. Only malformed input and configuration problems surface here.

use thiserror::Error;

/// Result type alias for sieve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the sieve index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller-supplied input was rejected
    ///
    /// Raised for negative or duplicate document ids, empty rating lists,
    /// malformed query or stop-word tokens, and document words containing
    /// control characters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be parsed or applied
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::InvalidArgument`]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Build an [`Error::Config`]
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether this error rejects caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
