//! Constants for the SHA-1 hash function (FIPS 180-1)

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the SHA-1 chaining state
pub const SHA1_STATE_WORDS: usize = 5;

/// Number of rounds (and message schedule words) per block
pub const SHA1_ROUNDS: usize = 80;

/// Size of the big-endian bit-length field appended by padding
pub const SHA1_LENGTH_FIELD_SIZE: usize = 8;

/// Initial hash values h0..h4
pub const SHA1_INITIAL_STATE: [u32; SHA1_STATE_WORDS] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds
pub const SHA1_ROUND_CONSTANTS: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
