// Path: crates/crypto/src/algorithms/hash/tests.rs
//! Tests for hash function implementations

use super::{sha256, sha256_concat};

#[test]
fn test_sha256_is_deterministic() {
    let message = b"test message";
    assert_eq!(sha256(message), sha256(message));
    assert_ne!(sha256(message), sha256(b"test messagf"));
}

#[test]
fn test_sha256_known_vector() {
    assert_eq!(
        hex::encode(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_concat_matches_joined_input() {
    let joined = sha256(b"saltpayload");
    let parts: [&[u8]; 2] = [b"salt", b"payload"];
    assert_eq!(sha256_concat(parts), joined);
}
