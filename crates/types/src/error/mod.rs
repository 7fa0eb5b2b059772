// Path: crates/types/src/error/mod.rs
//! Core error types for the Omniledger transaction core.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while reading from the external state view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The requested key was not found in the state.
    #[error("Key not found in state")]
    KeyNotFound,
    /// A value is present under the key but does not have the expected shape.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "STATE_KEY_NOT_FOUND",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::Backend(_) => "STATE_BACKEND_ERROR",
        }
    }
}

/// Errors from cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The signature failed cryptographic verification.
    #[error("Signature verification failed")]
    VerificationFailed,
    /// The provided key material is malformed or invalid for the specified algorithm.
    #[error("Invalid cryptographic key: {0}")]
    InvalidKey(String),
    /// The provided signature material is malformed or invalid for the specified algorithm.
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),
    /// A generic failure in an underlying cryptographic library or signing device.
    #[error("Cryptographic operation failed: {0}")]
    OperationFailed(String),
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::VerificationFailed => "CRYPTO_VERIFICATION_FAILED",
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidSignature(_) => "CRYPTO_INVALID_SIGNATURE",
            Self::OperationFailed(_) => "CRYPTO_OPERATION_FAILED",
        }
    }
}

/// Errors related to instruction and transaction processing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// An error occurred during serialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred during deserialization.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// The transaction is invalid for a model-specific reason.
    #[error("Invalid transaction: {0}")]
    Invalid(String),
    /// The access-control policy embedded in an evolve instruction could not be read.
    #[error("Invalid darc: {0}")]
    InvalidDarc(String),
    /// An error originating from the state view.
    #[error("State error: {0}")]
    State(#[from] StateError),
    /// A signer failed to produce a signature; no signature was attached.
    #[error("Signing failed: {0}")]
    Signing(String),
    /// The signature failed cryptographic verification.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    /// The instruction requires something this core cannot do on its own.
    #[error("Unsupported: {0}")]
    Unsupported(String),
    /// An instruction's `index` does not match its position in the transaction.
    #[error("Instruction position mismatch. Expected: {expected}, Got: {got}")]
    PositionMismatch {
        /// The position of the instruction in its transaction.
        expected: u32,
        /// The index carried by the instruction.
        got: u32,
    },
    /// An instruction's `length` does not match the number of instructions in the transaction.
    #[error("Transaction length mismatch. Expected: {expected}, Got: {got}")]
    LengthMismatch {
        /// The number of instructions in the transaction.
        expected: u32,
        /// The length carried by the instruction.
        got: u32,
    },
    /// A configured size limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "TX_SERIALIZATION_ERROR",
            Self::Deserialization(_) => "TX_DESERIALIZATION_ERROR",
            Self::Invalid(_) => "TX_INVALID",
            Self::InvalidDarc(_) => "TX_INVALID_DARC",
            Self::State(_) => "TX_STATE_ERROR",
            Self::Signing(_) => "TX_SIGNING_FAILED",
            Self::InvalidSignature(_) => "TX_INVALID_SIGNATURE",
            Self::Unsupported(_) => "TX_UNSUPPORTED",
            Self::PositionMismatch { .. } => "TX_POSITION_MISMATCH",
            Self::LengthMismatch { .. } => "TX_LENGTH_MISMATCH",
            Self::LimitExceeded(_) => "TX_LIMIT_EXCEEDED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(StateError::KeyNotFound.code(), "STATE_KEY_NOT_FOUND");
        assert_eq!(
            CryptoError::VerificationFailed.code(),
            "CRYPTO_VERIFICATION_FAILED"
        );
        assert_eq!(
            TransactionError::State(StateError::InvalidValue("x".into())).code(),
            "TX_STATE_ERROR"
        );
        assert_eq!(
            TransactionError::PositionMismatch {
                expected: 1,
                got: 2
            }
            .code(),
            "TX_POSITION_MISMATCH"
        );
    }
}
