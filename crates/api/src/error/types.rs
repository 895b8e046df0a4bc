//! Error type definitions for hash operations

use thiserror::Error;

/// Primary error type returned by the fips-sha1 crates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid parameter error
    #[error("invalid parameter '{context}': {message}")]
    InvalidParameter {
        context: &'static str,
        message: &'static str,
    },

    /// Invalid length error with context
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation not permitted in the object's current lifecycle state
    #[error("invalid state for {context}: {message}")]
    InvalidState {
        context: &'static str,
        message: &'static str,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: &'static str,
    },
}

/// Result type for hash operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidState { message, .. } => Self::InvalidState { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Returns true for lifecycle misuse such as hashing after finalization
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
