//! SHA-1 message padding
//!
//! The padded tail is the unprocessed remainder, a single `0x80` byte, zero
//! bytes up to 56 mod 64, and the original message length in bits as a
//! 64-bit big-endian integer.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use fips_sha1_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_LENGTH_FIELD_SIZE};

use super::compress::Block;
use crate::error::{validate, Result};

/// Offset of the length field inside the last block
const LENGTH_OFFSET: usize = SHA1_BLOCK_SIZE - SHA1_LENGTH_FIELD_SIZE;

/// The final one or two blocks of a padded message
#[derive(Clone, Zeroize)]
pub struct Padding {
    blocks: [Block; 2],
    count: usize,
}

impl Padding {
    /// Number of blocks in the tail, one or two
    pub fn block_count(&self) -> usize {
        self.count
    }

    /// The padded tail as whole blocks
    pub fn as_blocks(&self) -> &[Block] {
        &self.blocks[..self.count]
    }
}

/// Pad the pending `remainder` of a message whose total length is `bit_len`
///
/// `remainder` must be shorter than one block; `bit_len` is the length
/// recorded before any padding was appended.
pub fn pad(remainder: &[u8], bit_len: u64) -> Result<Padding> {
    validate::parameter(
        remainder.len() < SHA1_BLOCK_SIZE,
        "remainder",
        "must be shorter than one block",
    )?;
    Ok(build(remainder, bit_len))
}

/// Padding for a remainder already known to be shorter than one block
pub(super) fn build(remainder: &[u8], bit_len: u64) -> Padding {
    let mut tail = [0u8; 2 * SHA1_BLOCK_SIZE];
    let len = remainder.len();
    tail[..len].copy_from_slice(remainder);
    tail[len] = 0x80;

    // Two blocks when the marker byte leaves no room for the length field
    let count = if len + 1 > LENGTH_OFFSET { 2 } else { 1 };
    let end = count * SHA1_BLOCK_SIZE;
    BigEndian::write_u64(&mut tail[end - SHA1_LENGTH_FIELD_SIZE..end], bit_len);

    let mut blocks = [[0u8; SHA1_BLOCK_SIZE]; 2];
    blocks[0].copy_from_slice(&tail[..SHA1_BLOCK_SIZE]);
    blocks[1].copy_from_slice(&tail[SHA1_BLOCK_SIZE..]);
    tail.zeroize();

    Padding { blocks, count }
}
