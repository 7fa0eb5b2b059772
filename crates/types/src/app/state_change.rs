// Path: crates/types/src/app/state_change.rs

//! Effect records produced when an instruction is applied.

use crate::app::ids::InstanceId;
use crate::codec;
use crate::error::{StateError, TransactionError};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Deref;

/// How the state store is modified.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum StateAction {
    /// Insert a new key-value association.
    #[codec(index = 1)]
    Create,
    /// Change the value of an existing key.
    #[codec(index = 2)]
    Update,
    /// Delete an existing key-value association.
    #[codec(index = 3)]
    Remove,
}

impl fmt::Display for StateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StateAction::Create => "Create",
            StateAction::Update => "Update",
            StateAction::Remove => "Remove",
        };
        f.write_str(s)
    }
}

/// One new state to be applied to the store.
///
/// Once applied it becomes the triple `instance_id -> (contract_id, value)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct StateChange {
    /// Create, Update, or Remove.
    pub state_action: StateAction,
    /// The key of the state to change, as raw bytes.
    pub instance_id: Vec<u8>,
    /// The contract that can interpret the value.
    pub contract_id: Vec<u8>,
    /// The data needed by the contract.
    pub value: Vec<u8>,
}

impl StateChange {
    /// Fills out a state change for the given instance.
    pub fn new(
        state_action: StateAction,
        instance_id: &InstanceId,
        contract_id: &str,
        value: Vec<u8>,
    ) -> Self {
        Self {
            state_action,
            instance_id: instance_id.to_bytes().to_vec(),
            contract_id: contract_id.as_bytes().to_vec(),
            value,
        }
    }

    /// Parses the target key, failing if it is not exactly 64 bytes.
    pub fn instance_id(&self) -> Result<InstanceId, StateError> {
        InstanceId::try_from(self.instance_id.as_slice())
    }

    /// The canonical encoding, as it enters `StateChanges::hash`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        codec::to_bytes_canonical(self).map_err(TransactionError::Serialization)
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "statechange")?;
        writeln!(f, "\taction: {}", self.state_action)?;
        writeln!(
            f,
            "\tcontractID: {}",
            String::from_utf8_lossy(&self.contract_id)
        )?;
        writeln!(f, "\tkey: {}", hex::encode(&self.instance_id))?;
        write!(f, "\tvalue: {}", hex::encode(&self.value))
    }
}

/// An ordered list of state changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
#[serde(transparent)]
pub struct StateChanges(pub Vec<StateChange>);

impl StateChanges {
    /// SHA-256 over the canonical encoding of every state change, in order.
    pub fn hash(&self) -> Result<[u8; 32], TransactionError> {
        let mut h = Sha256::new();
        for sc in &self.0 {
            h.update(sc.to_bytes()?);
        }
        Ok(h.finalize().into())
    }
}

impl Deref for StateChanges {
    type Target = [StateChange];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<StateChange>> for StateChanges {
    fn from(changes: Vec<StateChange>) -> Self {
        Self(changes)
    }
}
