// Path: crates/api/src/state/mod.rs
//! Defines the `StateView` trait, the read-only interface through which the
//! transaction core looks up stored instances.
//!
//! A stored instance is a `Record`: an ordered list of typed cells where cell 0
//! holds the instance's state bytes and cell 1 the identifier of the contract
//! that owns it. The store itself, and how it lays records out on disk, is not
//! part of this workspace.

use omni_types::app::StateChange;
use omni_types::error::StateError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Position of the state bytes in a stored record.
pub const RECORD_STATE_INDEX: usize = 0;
/// Position of the owning contract's identifier in a stored record.
pub const RECORD_CONTRACT_INDEX: usize = 1;

/// One typed cell of a stored record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum RecordValue {
    /// An opaque byte string.
    Bytes(Vec<u8>),
    /// A cell of any other type, named by its type.
    Other(String),
}

impl RecordValue {
    /// The bytes held by the cell, if it is a byte cell.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RecordValue::Bytes(b) => Some(b),
            RecordValue::Other(_) => None,
        }
    }
}

/// A stored record: an ordered list of typed cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct Record {
    values: Vec<RecordValue>,
}

impl Record {
    /// A record with arbitrary cells.
    pub fn from_values(values: Vec<RecordValue>) -> Self {
        Self { values }
    }

    /// The standard instance record: `[state, contract_id]`.
    pub fn new(state: Vec<u8>, contract_id: Vec<u8>) -> Self {
        Self {
            values: vec![RecordValue::Bytes(state), RecordValue::Bytes(contract_id)],
        }
    }

    /// The record a state change leaves behind once applied.
    pub fn from_state_change(sc: &StateChange) -> Self {
        Self::new(sc.value.clone(), sc.contract_id.clone())
    }

    /// The cells, in positional order.
    pub fn values(&self) -> &[RecordValue] {
        &self.values
    }
}

/// Read access to the external keyed state store.
///
/// `Ok(None)` is a lookup miss; a present but malformed record is returned as-is
/// and left to the caller to reject.
pub trait StateView: Send + Sync {
    /// Gets the record stored under `key`.
    fn get(&self, key: &[u8]) -> Result<Option<Record>, StateError>;
}

impl<T: StateView + ?Sized> StateView for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Record>, StateError> {
        (**self).get(key)
    }
}

impl<T: StateView + ?Sized> StateView for &T {
    fn get(&self, key: &[u8]) -> Result<Option<Record>, StateError> {
        (**self).get(key)
    }
}
