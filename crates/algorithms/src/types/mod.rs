//! Type-safe wrappers for hash outputs
//!
//! This module provides the fixed-size digest type together with the small
//! set of traits shared by byte-oriented values.

pub mod digest;

pub use digest::Digest;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

/// Trait for types that can be serialized to a byte representation
pub trait ByteSerializable: Sized {
    /// Convert to a byte vector
    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self>;
}
