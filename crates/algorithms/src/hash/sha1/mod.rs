//! SHA-1 hash function
//!
//! This module implements the SHA-1 hash function as specified in FIPS 180-1.
//! Note: SHA-1 is considered cryptographically broken and should only be used
//! for compatibility with existing systems.
//!
//! The work is split between a pure [`compress`] step, a standalone [`pad`]
//! routine and the streaming [`Sha1`] hasher that drives both.

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "alloc")]
use alloc::string::String;

use fips_sha1_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE, SHA1_STATE_WORDS};

use crate::error::{validate, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

mod compress;
mod padding;

pub use compress::{compress, Block, HashState};
pub use padding::{pad, Padding};

/// A SHA-1 digest
pub type Sha1Digest = Digest<SHA1_OUTPUT_SIZE>;

const ALGORITHM_ID: &str = "SHA-1";

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = ALGORITHM_ID;
}

/// Streaming SHA-1 hasher
///
/// Feed input with [`update`](Sha1::update) in chunks of any size, then call
/// [`finalize`](Sha1::finalize) once. Splitting the input differently never
/// changes the digest. Finalizing is terminal: later `update` and `finalize`
/// calls are rejected until [`reset`](Sha1::reset).
///
/// A `Sha1` is plain owned data. Sharing one between threads requires
/// external synchronization.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha1 {
    /// Current chaining state
    state: HashState,
    /// Pending bytes of an incomplete block
    buffer: [u8; SHA1_BLOCK_SIZE],
    /// Bytes in buffer, always below one block between calls
    buffer_len: usize,
    /// Total message length in bits, modulo 2^64
    total_len: u64,
    finalized: bool,
}

impl Sha1 {
    /// Creates a new SHA-1 hasher
    pub fn new() -> Self {
        Self {
            state: HashState::INITIAL,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
            finalized: false,
        }
    }

    /// Absorb more input
    ///
    /// Returns a state error if the hasher has already been finalized.
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.ensure_active("update after finalize")?;
        self.absorb(data);
        Ok(self)
    }

    /// Pad, process the final block(s) and return the raw digest
    ///
    /// Returns a state error if called a second time.
    pub fn finalize(&mut self) -> Result<Sha1Digest> {
        self.ensure_active("finalize called twice")?;
        Ok(self.finish())
    }

    /// Like [`finalize`](Sha1::finalize), rendered as 40 lowercase hex characters
    #[cfg(feature = "alloc")]
    pub fn hexdigest(&mut self) -> Result<String> {
        Ok(self.finalize()?.to_hex())
    }

    /// Return the hasher to its freshly constructed state
    pub fn reset(&mut self) {
        trace!("SHA-1 reset (finalized: {})", self.finalized);
        self.zeroize();
        self.state = HashState::INITIAL;
    }

    /// Whether `finalize` has been called since construction or the last reset
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of message bits absorbed so far, modulo 2^64
    pub fn len_bits(&self) -> u64 {
        self.total_len
    }

    fn ensure_active(&self, reason: &'static str) -> Result<()> {
        let result = validate::state(!self.finalized, ALGORITHM_ID, reason);
        if result.is_err() {
            debug!("SHA-1 rejected call: {}", reason);
        }
        result
    }

    /// Infallible core of `update`
    fn absorb(&mut self, mut data: &[u8]) {
        self.total_len = self
            .total_len
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        if self.buffer_len > 0 {
            let take = core::cmp::min(SHA1_BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < SHA1_BLOCK_SIZE {
                return;
            }
            self.state = compress(&self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(SHA1_BLOCK_SIZE);
        for chunk in &mut blocks {
            let mut block: Block = [0u8; SHA1_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.state = compress(&self.state, &block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Pad and process the tail; marks the hasher finalized
    fn finish(&mut self) -> Sha1Digest {
        let tail = padding::build(&self.buffer[..self.buffer_len], self.total_len);
        trace!(
            "SHA-1 finalize: {} message bits, {} padding block(s)",
            self.total_len,
            tail.block_count()
        );

        for block in tail.as_blocks() {
            self.state = compress(&self.state, block);
        }

        self.finalized = true;
        self.buffer.zeroize();
        self.buffer_len = 0;
        Digest::new(self.state.to_bytes())
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pending message bytes and chaining words stay out of logs
        f.debug_struct("Sha1")
            .field("buffer_len", &self.buffer_len)
            .field("total_len", &self.total_len)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Sha1Digest;

    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        Sha1::update(self, data)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Sha1::finalize(self)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Sha1 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Digest<SHA1_OUTPUT_SIZE> {
    /// The digest as the five big-endian words h0..h4
    pub fn to_words(&self) -> [u32; SHA1_STATE_WORDS] {
        let mut words = [0u32; SHA1_STATE_WORDS];
        BigEndian::read_u32_into(self.as_bytes(), &mut words);
        words
    }

    /// Build a digest from the five words h0..h4
    pub fn from_words(words: [u32; SHA1_STATE_WORDS]) -> Self {
        Digest::new(HashState::from_words(words).to_bytes())
    }
}

/// One-shot SHA-1 returning the raw digest
pub fn sha1_digest(data: &[u8]) -> Sha1Digest {
    let mut hasher = Sha1::new();
    hasher.absorb(data);
    hasher.finish()
}

/// One-shot SHA-1 returning 40 lowercase hex characters
///
/// ```
/// assert_eq!(
///     fips_sha1_algorithms::hash::sha1(b""),
///     "da39a3ee5e6b4b0d3255bfef95601890afd80709"
/// );
/// ```
#[cfg(feature = "alloc")]
pub fn sha1(data: &[u8]) -> String {
    sha1_digest(data).to_hex()
}
