//! Error handling for the SHA-1 primitives

use core::fmt;

use fips_sha1_api::{Error as CoreError, Result as CoreResult};

/// The error type for the SHA-1 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation attempted in the wrong lifecycle state
    State {
        /// Algorithm whose state rejected the call
        algorithm: &'static str,
        /// What was wrong with the state
        reason: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a State error
    pub fn state(algorithm: &'static str, reason: &'static str) -> Self {
        Error::State { algorithm, reason }
    }
}

/// Result type for SHA-1 primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::State { algorithm, reason } => {
                write!(f, "Invalid state in {}: {}", algorithm, reason)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        CoreError::from(err).into()
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::State { algorithm, reason } => CoreError::InvalidState {
                context: algorithm,
                message: reason,
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg,
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
