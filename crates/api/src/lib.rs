// Path: crates/api/src/lib.rs

//! # Omniledger API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
#![deny(missing_docs)]
//! # Omniledger API
//!
//! Core traits at the boundary between the transaction core and the components
//! it treats as external: the keyed state store and the signing devices.

/// Defines unified traits for signing and verification.
pub mod crypto;
/// Re-exports all core error types from the central `omni-types` crate.
pub mod error;
/// The read interface onto the external state store.
pub mod state;
/// In-memory implementations of the traits, for tests and tooling.
pub mod test_utils;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::crypto::{SerializableKey, Signer, VerifyingKey};
    pub use crate::error::{CryptoError, ErrorCode, StateError, TransactionError};
    pub use crate::state::{Record, RecordValue, StateView};
}
