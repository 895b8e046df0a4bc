//! SHA-1 hash function built from first principles
//!
//! This crate implements FIPS 180-1 SHA-1: the message padding procedure, the
//! 512-bit block compression function and a streaming hasher that accepts
//! input in chunks of any size. The library is usable in both `std` and
//! `no_std` environments.
//!
//! SHA-1 is considered cryptographically broken for collision resistance and
//! should only be used for compatibility with existing systems.
//!
//! ```
//! use fips_sha1_algorithms::hash::{sha1, HashFunction, Sha1};
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"The quick brown fox ")?.update(b"jumps over the lazy dog")?;
//! let digest = hasher.finalize()?;
//!
//! assert_eq!(digest.to_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
//! assert_eq!(sha1(b"The quick brown fox jumps over the lazy dog"), digest.to_hex());
//! # Ok::<(), fips_sha1_algorithms::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
#[cfg(feature = "alloc")]
pub use hash::sha1;
pub use hash::{sha1_digest, HashFunction, Sha1, Sha1Algorithm};

// Type system
pub mod types;
pub use types::{ByteSerializable, ConstantTimeEq, Digest, FixedSize};
