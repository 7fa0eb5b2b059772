// Path: crates/types/src/app/coin.rs

//! A reusable payload shape for value-transfer contracts.

use crate::app::ids::InstanceId;
use crate::codec;
use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A quantity of one coin type. Coin types are defined by a genesis instance
/// that is unique for each type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Coin {
    /// Points to the genesis instance of this coin type.
    pub name: InstanceId,
    /// The number of coins held.
    pub value: u64,
}

impl Coin {
    /// Creates a coin record.
    pub fn new(name: InstanceId, value: u64) -> Self {
        Self { name, value }
    }

    /// Parses a coin from a stored value.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, TransactionError> {
        codec::from_bytes_canonical(buf).map_err(TransactionError::Deserialization)
    }

    /// The canonical encoding, suitable as a `StateChange` value.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        codec::to_bytes_canonical(self).map_err(TransactionError::Serialization)
    }
}
