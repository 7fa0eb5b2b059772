// Path: crates/types/src/app/transaction.rs

//! Client transactions: instructions applied as one all-or-nothing unit.

use crate::app::instruction::Instruction;
use crate::codec;
use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ops::Deref;

/// An ordered list of instructions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
#[serde(transparent)]
pub struct Instructions(pub Vec<Instruction>);

impl Instructions {
    /// SHA-256 over every instruction's hash, in order.
    ///
    /// Order matters: the same instructions in another order are another transaction.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        for instr in &self.0 {
            h.update(instr.hash());
        }
        h.finalize().into()
    }
}

impl Deref for Instructions {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Instruction>> for Instructions {
    fn from(instrs: Vec<Instruction>) -> Self {
        Self(instrs)
    }
}

/// Instructions that are applied in order. If any of them fails, none are applied;
/// enforcing that is up to the applier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct ClientTransaction {
    /// The instructions, with `index`/`length` matching their positions.
    pub instructions: Instructions,
}

impl ClientTransaction {
    /// Wraps a list of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions: Instructions(instructions),
        }
    }

    /// The identity of the transaction.
    pub fn hash(&self) -> [u8; 32] {
        self.instructions.hash()
    }

    /// The canonical wire encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        codec::to_bytes_canonical(self).map_err(TransactionError::Serialization)
    }

    /// Parses a transaction from its canonical wire encoding.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, TransactionError> {
        codec::from_bytes_canonical(buf).map_err(TransactionError::Deserialization)
    }
}

/// A batch of client transactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
#[serde(transparent)]
pub struct ClientTransactions(pub Vec<ClientTransaction>);

impl ClientTransactions {
    /// SHA-256 over every transaction's instruction-list hash, in order.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        for tx in &self.0 {
            h.update(tx.instructions.hash());
        }
        h.finalize().into()
    }
}

impl Deref for ClientTransactions {
    type Target = [ClientTransaction];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ClientTransaction>> for ClientTransactions {
    fn from(txs: Vec<ClientTransaction>) -> Self {
        Self(txs)
    }
}
