//! Structured error types for the circode crates.

use thiserror::Error;

/// Unified error type for all circode operations.
///
/// Failing a code property is never an error; tests report it as `false`.
/// These variants cover malformed input and lookups that cannot be served.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircodeError {
    /// Parse error (a token holds characters outside the nucleotide alphabet)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A substitution name that is not part of the catalog
    #[error("unknown substitution: {0:?}")]
    UnknownSubstitution(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the circode crates.
pub type Result<T> = std::result::Result<T, CircodeError>;
