//! FIPS 180 and boundary known-answer tests

use fips_sha1_algorithms::hash::{sha1, sha1_digest, HashFunction, Sha1};
use fips_sha1_tests::vectors::{BOUNDARY_LENGTHS, KNOWN_ANSWERS, MILLION_A_DIGEST};
use sha1_reference::Digest as _;

#[test]
fn test_known_answers_one_shot() {
    for vector in KNOWN_ANSWERS {
        assert_eq!(
            sha1(vector.message),
            vector.digest,
            "message {:?}",
            String::from_utf8_lossy(vector.message)
        );
    }
}

#[test]
fn test_known_answers_streaming() {
    for vector in KNOWN_ANSWERS {
        let mut hasher = Sha1::new();
        for chunk in vector.message.chunks(7) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.hexdigest().unwrap(), vector.digest);
    }
}

#[test]
fn test_million_a() {
    let mut hasher = Sha1::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(hasher.hexdigest().unwrap(), MILLION_A_DIGEST);
}

#[test]
fn test_boundary_lengths_match_reference() {
    for &len in BOUNDARY_LENGTHS {
        let message: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
        let expected = hex::encode(sha1_reference::Sha1::digest(&message));

        assert_eq!(sha1(&message), expected, "one-shot, {} bytes", len);

        let digest = Sha1::digest(&message).unwrap();
        assert_eq!(digest.to_hex(), expected, "trait digest, {} bytes", len);
        assert_eq!(sha1_digest(&message), digest);
    }
}
