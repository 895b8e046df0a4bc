//! Public API traits and types for the fips-sha1 library
//!
//! This crate provides the public API surface shared by the fips-sha1 crates:
//! the error type returned across crate boundaries and the traits describing
//! hash algorithms.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::HashAlgorithm;
