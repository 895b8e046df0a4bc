//! # fips-sha1
//!
//! A pure Rust implementation of the FIPS 180-1 SHA-1 hash function.
//!
//! ## Usage
//!
//! ```
//! use fips_sha1::prelude::*;
//!
//! assert_eq!(
//!     sha1(b"The quick brown fox jumps over the lazy dog"),
//!     "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
//! );
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"ab")?;
//! hasher.update(b"c")?;
//! assert_eq!(hasher.hexdigest()?, "a9993e364706816aba3e25717850c26c9cd0d89d");
//! # Ok::<(), fips_sha1::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and `std::io::Write` for the hasher
//! - `alloc`: hex string helpers
//! - `serde`: hex (de)serialization of digests
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`fips-sha1-api`]: public error type and algorithm traits
//! - [`fips-sha1-params`]: FIPS 180-1 constants
//! - [`fips-sha1-algorithms`]: compression function, padding and streaming hasher

#![cfg_attr(not(feature = "std"), no_std)]

pub use fips_sha1_algorithms as algorithms;
pub use fips_sha1_api as api;
pub use fips_sha1_params as params;

/// Common imports for fips-sha1 users
pub mod prelude {
    pub use fips_sha1_algorithms::hash::{sha1_digest, HashFunction, Sha1, Sha1Algorithm};
    pub use fips_sha1_algorithms::types::Digest;
    pub use fips_sha1_api::{Error, HashAlgorithm, Result};

    #[cfg(feature = "alloc")]
    pub use fips_sha1_algorithms::hash::sha1;
}
