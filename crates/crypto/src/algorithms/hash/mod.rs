// Path: crates/crypto/src/algorithms/hash/mod.rs
//! Cryptographic hash functions using sha2

use sha2::{Digest, Sha256};

/// Create a SHA-256 hash of any type that can be referenced as bytes
pub fn sha256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    Sha256::digest(data.as_ref()).into()
}

/// SHA-256 over the concatenation of `parts`, without building the concatenation.
pub fn sha256_concat<'a, I>(parts: I) -> [u8; 32]
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut h = Sha256::new();
    for part in parts {
        h.update(part);
    }
    h.finalize().into()
}

#[cfg(test)]
mod tests;
