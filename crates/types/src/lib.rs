// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]

//! # Omniledger Core Types
//!
//! This crate is the foundational library for the Omniledger transaction core,
//! containing the instruction and transaction data model, the digests that bind
//! an instruction to its authorization proof, the canonical codec, error types,
//! and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `omni-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. Every validating node must
//! compute byte-identical digests from the values defined here, so nothing in the
//! digest path iterates an unordered container.

/// The maximum size in bytes for a single argument value carried by an instruction.
pub const MAX_ARGUMENT_VALUE_BYTES: usize = 256 * 1024; // 256 KiB

/// Instructions, transactions, state changes, and the access-control request shape.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical values.
pub mod codec;
/// Configuration structures for transaction validation limits.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
