// Path: crates/api/src/crypto/mod.rs
//! Defines unified traits for signing and verification.

use crate::error::CryptoError;
use omni_types::app::Identity;

/// A trait for any key that can be serialized to and from bytes.
pub trait SerializableKey {
    /// Converts the key to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;

    /// Creates a key from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>
    where
        Self: Sized;
}

/// A trait for a public key used for signature verification.
pub trait VerifyingKey: SerializableKey {
    /// Verifies raw signature bytes against a message.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError>;
}

/// A party able to authorize instructions.
///
/// Implementations may be local keys or remote signing devices; `sign` failing
/// aborts whatever multi-signer operation asked for the signature.
pub trait Signer {
    /// The identity the signature is attributed to.
    fn identity(&self) -> Identity;

    /// Signs a request digest.
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
