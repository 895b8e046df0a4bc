//! Trait definitions for the fips-sha1 API

pub mod hash;

pub use hash::HashAlgorithm;
