//! Static description of a hash algorithm

/// Marker trait for hash algorithms with their fixed parameters
///
/// Implemented by uninhabited marker types so the parameters are available
/// at compile time without constructing a hasher.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Returns the algorithm identifier
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}
