// Path: crates/crypto/src/sign/eddsa/mod.rs
//! Implementation of Ed25519 signatures using ed25519-dalek

use crate::error::CryptoError;
use ed25519_dalek::{Signer as _, Verifier as _};
use omni_api::crypto::{SerializableKey, Signer, VerifyingKey};
use omni_types::app::Identity;

/// Ed25519 key pair implementation
#[derive(Clone)]
pub struct Ed25519KeyPair {
    secret_key: ed25519_dalek::SigningKey,
}

/// Ed25519 signature implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519Signature(ed25519_dalek::Signature);

/// Ed25519 public key implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey(ed25519_dalek::VerifyingKey);

impl Ed25519KeyPair {
    /// Generate a new Ed25519 key pair
    pub fn generate() -> Self {
        Self::from_seed(&rand::random::<[u8; 32]>())
    }

    /// Create from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            secret_key: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// The public verification key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.secret_key.verifying_key())
    }

    /// The private seed (32 bytes)
    pub fn seed(&self) -> [u8; 32] {
        self.secret_key.to_bytes()
    }

    /// Sign a message
    pub fn sign_message(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.secret_key.sign(message))
    }
}

impl Signer for Ed25519KeyPair {
    fn identity(&self) -> Identity {
        Identity::Ed25519(self.public_key().to_array())
    }

    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.sign_message(digest).to_bytes())
    }
}

impl VerifyingKey for Ed25519PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let signature = Ed25519Signature::from_bytes(signature)?;
        self.0
            .verify(message, &signature.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}

impl SerializableKey for Ed25519PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array = <[u8; 32]>::try_from(bytes).map_err(|_| {
            CryptoError::InvalidKey(format!(
                "Invalid public key length: expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        ed25519_dalek::VerifyingKey::from_bytes(&array)
            .map(Ed25519PublicKey)
            .map_err(|e| CryptoError::InvalidKey(format!("Failed to parse public key: {}", e)))
    }
}

impl SerializableKey for Ed25519Signature {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        ed25519_dalek::Signature::from_slice(bytes)
            .map(Ed25519Signature)
            .map_err(|e| CryptoError::InvalidSignature(format!("Failed to parse signature: {}", e)))
    }
}

impl Ed25519PublicKey {
    /// Get the raw public key bytes
    pub fn to_array(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

/// Verifies `signature` over `message` under a raw Ed25519 public key.
pub fn verify_ed25519(
    public_key: &[u8; 32],
    message: &[u8],
    signature: &[u8],
) -> Result<(), CryptoError> {
    Ed25519PublicKey::from_bytes(public_key)?.verify(message, signature)
}

#[cfg(test)]
mod tests;
