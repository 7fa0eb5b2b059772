// Path: crates/crypto/src/lib.rs
//! # Omniledger Crypto Crate Lints
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
        clippy::indexing_slicing
    )
)]
//! # Omniledger Cryptography
//!
//! The concrete hash and signature schemes behind the `omni-api` crypto traits.

pub mod algorithms;
pub mod error;
pub mod sign;
