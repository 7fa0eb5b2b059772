// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for all consensus-critical values.
//!
//! This module provides simple wrappers around `parity-scale-codec` (SCALE), which is
//! compact and deterministic: the same value always encodes to the same bytes, with
//! fields in declaration order and no map iteration involved. Instructions, client
//! transactions, and state changes are hashed and reordered over these bytes, so every
//! component must go through these two functions rather than a codec of its own.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into a deterministic, canonical byte representation using SCALE codec.
///
/// This function should be used for all data that is hashed, signed, or exchanged
/// between validators.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// Fails fast on any decoding error, including trailing bytes after the value, so a
/// buffer holding some other type is rejected instead of being partially read.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(Encode, Decode, Debug, PartialEq, Eq)]
    struct TestStruct {
        id: u32,
        name: String,
        tags: Vec<u8>,
    }

    #[test]
    fn test_canonical_codec_roundtrip() {
        let original_struct = TestStruct {
            id: 42,
            name: "test-data".to_string(),
            tags: vec![1, 2, 3],
        };

        let encoded = to_bytes_canonical(&original_struct).unwrap();
        assert!(!encoded.is_empty());

        let decoded = from_bytes_canonical::<TestStruct>(&encoded).unwrap();
        assert_eq!(original_struct, decoded);

        let mut original_set = BTreeSet::new();
        original_set.insert([1u8; 32]);
        original_set.insert([2u8; 32]);

        let encoded_set = to_bytes_canonical(&original_set).unwrap();
        let decoded_set = from_bytes_canonical::<BTreeSet<[u8; 32]>>(&encoded_set).unwrap();
        assert_eq!(original_set, decoded_set);
    }

    #[test]
    fn test_canonical_decode_failure() {
        let original_struct = TestStruct {
            id: 99,
            name: "another-test".to_string(),
            tags: vec![10, 20, 30, 40, 50],
        };

        let mut encoded = to_bytes_canonical(&original_struct).unwrap();
        encoded.pop();
        encoded.pop();

        let error_msg = from_bytes_canonical::<TestStruct>(&encoded).unwrap_err();
        assert!(error_msg.contains("canonical decode failed"));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut encoded = to_bytes_canonical(&7u32).unwrap();
        encoded.push(0);
        assert!(from_bytes_canonical::<u32>(&encoded).is_err());
    }
}
