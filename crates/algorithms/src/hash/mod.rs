//! Hash function implementations
//!
//! This module contains the hashing seam shared by the crate: the
//! [`HashFunction`] trait and the SHA-1 implementation behind it.

use crate::error::Result;

pub mod sha1;

// Re-exports
#[cfg(feature = "alloc")]
pub use self::sha1::sha1;
pub use self::sha1::{sha1_digest, Sha1, Sha1Algorithm};
pub use fips_sha1_api::HashAlgorithm;

/// Trait for streaming cryptographic hash functions
pub trait HashFunction: Sized {
    /// Algorithm marker carrying the static parameters
    type Algorithm: HashAlgorithm;

    /// Digest type produced by [`finalize`](Self::finalize)
    type Output: AsRef<[u8]>;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input; fails once the hasher has been finalized
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    ///
    /// The hasher is terminal afterwards: further `update` or `finalize`
    /// calls return a state error.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
