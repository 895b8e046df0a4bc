//! Testing utilities for the fips-sha1 library
//!
//! Shared known-answer vectors and seeded message generators used by the
//! integration tests under `tests/`.

pub mod corpus;
