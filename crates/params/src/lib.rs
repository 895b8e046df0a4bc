//! Constant values for fips-sha1 operations
//!
//! This library provides the FIPS 180-1 constants used across the project.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;
