// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use omni_types::error::{CryptoError, ErrorCode, StateError, TransactionError};
