// Path: crates/crypto/src/error.rs
//! Local error types for the `omni-crypto` crate.

// Re-export the canonical error type from the API crate.
pub use omni_api::error::CryptoError;
