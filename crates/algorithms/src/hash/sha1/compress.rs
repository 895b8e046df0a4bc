//! SHA-1 compression function
//!
//! Maps a 160-bit chaining state and one 512-bit block to a new state,
//! following the FIPS 180-1 round function.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use fips_sha1_params::utils::hash::{
    SHA1_BLOCK_SIZE, SHA1_INITIAL_STATE, SHA1_OUTPUT_SIZE, SHA1_ROUNDS, SHA1_ROUND_CONSTANTS,
    SHA1_STATE_WORDS,
};

/// One 512-bit message block
pub type Block = [u8; SHA1_BLOCK_SIZE];

/// The five 32-bit chaining words h0..h4
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct HashState([u32; SHA1_STATE_WORDS]);

impl HashState {
    /// The FIPS 180-1 initial state
    pub const INITIAL: Self = Self(SHA1_INITIAL_STATE);

    /// Build a state from explicit words
    pub const fn from_words(words: [u32; SHA1_STATE_WORDS]) -> Self {
        Self(words)
    }

    /// The chaining words in order h0..h4
    pub const fn words(&self) -> [u32; SHA1_STATE_WORDS] {
        self.0
    }

    /// Serialize the words big-endian, h0 first
    pub fn to_bytes(&self) -> [u8; SHA1_OUTPUT_SIZE] {
        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.0, &mut out);
        out
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Expand the sixteen big-endian block words into the 80-word schedule
fn schedule(block: &Block) -> [u32; SHA1_ROUNDS] {
    let mut w = [0u32; SHA1_ROUNDS];
    BigEndian::read_u32_into(block, &mut w[..16]);
    for t in 16..SHA1_ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// Round function and constant for round `t`
#[inline(always)]
fn round_fk(t: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match t {
        // Ch, written without the complement
        0..=19 => (d ^ (b & (c ^ d)), SHA1_ROUND_CONSTANTS[0]),
        20..=39 => (b ^ c ^ d, SHA1_ROUND_CONSTANTS[1]),
        // Maj
        40..=59 => ((b & c) | (b & d) | (c & d), SHA1_ROUND_CONSTANTS[2]),
        _ => (b ^ c ^ d, SHA1_ROUND_CONSTANTS[3]),
    }
}

/// Compress one block into `state`, returning the new state
///
/// Pure: neither argument is modified and nothing is retained. All additions
/// are modulo 2^32.
pub fn compress(state: &HashState, block: &Block) -> HashState {
    let mut w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = state.0;

    for (t, &wt) in w.iter().enumerate() {
        let (f, k) = round_fk(t, b, c, d);
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }
    w.zeroize();

    let h = state.0;
    HashState([
        h[0].wrapping_add(a),
        h[1].wrapping_add(b),
        h[2].wrapping_add(c),
        h[3].wrapping_add(d),
        h[4].wrapping_add(e),
    ])
}
