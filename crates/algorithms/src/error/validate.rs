//! Validation utilities for the SHA-1 primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an object is in a state where the call is allowed
#[inline(always)]
pub fn state(condition: bool, algorithm: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::state(algorithm, reason));
    }
    Ok(())
}
