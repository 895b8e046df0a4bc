//! Property-based tests for the SHA-1 hasher

use fips_sha1_algorithms::hash::{sha1, sha1_digest, Sha1};
use fips_sha1_algorithms::Error;
use fips_sha1_tests::corpus;
use proptest::prelude::*;
use sha1_reference::Digest as _;

/// Messages of the length range used by the conformance corpus
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), corpus::MIN_LEN..=corpus::MAX_LEN)
}

/// A message plus sorted cut points, possibly repeated
fn message_with_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..400).prop_flat_map(|msg| {
        let len = msg.len();
        (
            Just(msg),
            prop::collection::vec(0..=len, 0..12).prop_map(|mut cuts| {
                cuts.sort_unstable();
                cuts
            }),
        )
    })
}

proptest! {
    #[test]
    fn prop_matches_reference(msg in message()) {
        let expected = hex::encode(sha1_reference::Sha1::digest(&msg));
        prop_assert_eq!(sha1(&msg), expected);
    }

    #[test]
    fn prop_deterministic(msg in message()) {
        prop_assert_eq!(sha1_digest(&msg), sha1_digest(&msg));
    }

    #[test]
    fn prop_two_way_split(a in message(), b in message()) {
        let mut joined = a.clone();
        joined.extend_from_slice(&b);

        let mut hasher = Sha1::new();
        hasher.update(&a).unwrap();
        hasher.update(&b).unwrap();
        prop_assert_eq!(hasher.hexdigest().unwrap(), sha1(&joined));
    }

    #[test]
    fn prop_n_way_split_with_empty_chunks((msg, cuts) in message_with_cuts()) {
        let mut hasher = Sha1::new();
        let mut start = 0;
        for cut in cuts {
            hasher.update(&msg[start..cut]).unwrap();
            // Interleave an empty chunk after every piece
            hasher.update(&[]).unwrap();
            start = cut;
        }
        hasher.update(&msg[start..]).unwrap();
        prop_assert_eq!(hasher.finalize().unwrap(), sha1_digest(&msg));
    }

    #[test]
    fn prop_single_byte_increment_changes_digest(
        msg in message(),
        position in any::<prop::sample::Index>(),
    ) {
        let modified = corpus::increment_byte(&msg, position.index(msg.len()));
        prop_assert_ne!(sha1(&msg), sha1(&modified));
    }

    #[test]
    fn prop_finalized_hasher_rejects_input(msg in message()) {
        let mut hasher = Sha1::new();
        hasher.update(&msg).unwrap();
        let digest = hasher.finalize().unwrap();

        let update_rejected = matches!(hasher.update(&msg), Err(Error::State { .. }));
        let finalize_rejected = matches!(hasher.finalize(), Err(Error::State { .. }));
        prop_assert!(update_rejected);
        prop_assert!(finalize_rejected);
        prop_assert_eq!(digest, sha1_digest(&msg));
    }
}

#[test]
fn test_fixed_size_chunking_straddles_blocks() {
    let mut rng = corpus::rng(1);
    let msg = corpus::random_message(&mut rng);
    let expected = sha1_digest(&msg);

    for size in [1usize, 3, 55, 56, 63, 64, 65, 127, 129] {
        let mut hasher = Sha1::new();
        for chunk in msg.chunks(size) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.finalize().unwrap(), expected, "chunk size {}", size);
    }
}
