//! Seeded random message generation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Shortest random message
pub const MIN_LEN: usize = 1;

/// Longest random message
pub const MAX_LEN: usize = 1000;

/// Deterministic RNG so failures can be replayed from the seed
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A random message with a length drawn from `MIN_LEN..=MAX_LEN`
pub fn random_message<R: Rng>(rng: &mut R) -> Vec<u8> {
    let len = rng.gen_range(MIN_LEN..=MAX_LEN);
    let mut message = vec![0u8; len];
    rng.fill(&mut message[..]);
    message
}

/// Copy of `message` with one byte incremented (wrapping) at `position`
pub fn increment_byte(message: &[u8], position: usize) -> Vec<u8> {
    let mut modified = message.to_vec();
    modified[position] = modified[position].wrapping_add(1);
    modified
}

/// Split `message` into consecutive chunks at random cut points
///
/// Cut points may repeat, which yields empty chunks between non-empty ones.
pub fn random_chunks<'a, R: Rng>(rng: &mut R, message: &'a [u8], pieces: usize) -> Vec<&'a [u8]> {
    let mut cuts: Vec<usize> = (0..pieces.saturating_sub(1))
        .map(|_| rng.gen_range(0..=message.len()))
        .collect();
    cuts.sort_unstable();

    let mut chunks = Vec::with_capacity(pieces);
    let mut start = 0;
    for cut in cuts {
        chunks.push(&message[start..cut]);
        start = cut;
    }
    chunks.push(&message[start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chunks_reassemble() {
        let mut rng = rng(7);
        let message = random_message(&mut rng);
        for pieces in 1..8 {
            let chunks = random_chunks(&mut rng, &message, pieces);
            assert_eq!(chunks.len(), pieces);
            assert_eq!(chunks.concat(), message);
        }
    }

    #[test]
    fn test_increment_byte_wraps() {
        assert_eq!(increment_byte(&[0xff, 1], 0), vec![0x00, 1]);
    }
}
