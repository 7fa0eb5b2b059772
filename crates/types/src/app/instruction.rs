// Path: crates/types/src/app/instruction.rs

//! The atomic unit of ledger mutation.

use crate::app::darc::Signature;
use crate::app::ids::{InstanceId, Nonce, SubId};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Deref;

/// The action label of a delete instruction.
pub const DELETE_ACTION: &str = "Delete";
/// The reserved action of a policy-evolution request. Its request message is the
/// new DARC's ID instead of the instruction hash.
pub const EVOLVE_ACTION: &str = "invoke:evolve";
/// The argument under which an evolve instruction carries the new DARC.
pub const DARC_ARGUMENT: &str = "darc";

/// A name/value pair passed to a contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Argument {
    /// Any name recognized by the contract.
    pub name: String,
    /// The binary-encoded value.
    pub value: Vec<u8>,
}

impl Argument {
    /// Creates an argument.
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered, searchable list of arguments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
#[serde(transparent)]
pub struct Arguments(pub Vec<Argument>);

impl Arguments {
    /// Wraps a list of arguments, keeping their order.
    pub fn new(args: Vec<Argument>) -> Self {
        Self(args)
    }

    /// Returns the value of the first argument called `name`.
    ///
    /// Later duplicates are never reached. An argument whose value is empty is
    /// reported as `None`, exactly like a missing one; contracts cannot tell the
    /// two apart.
    pub fn search(&self, name: &str) -> Option<&[u8]> {
        self.0
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_slice())
            .filter(|value| !value.is_empty())
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(args: Vec<Argument>) -> Self {
        Self(args)
    }
}

/// Creates a new instance of a contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Spawn {
    /// The kind of contract to spawn.
    pub contract_id: String,
    /// All data needed to spawn the new instance.
    pub args: Arguments,
}

/// Calls a method on an existing instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Invoke {
    /// Instance-specific command, interpreted by the contract.
    pub command: String,
    /// All data needed to execute the command.
    pub args: Arguments,
}

/// The operation an instruction performs. Exactly one is always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Operation {
    /// Spawn a new instance from the target instance.
    #[codec(index = 0)]
    Spawn(Spawn),
    /// Invoke a command on the target instance.
    #[codec(index = 1)]
    Invoke(Invoke),
    /// Remove the target instance.
    #[codec(index = 2)]
    Delete,
}

impl Operation {
    /// The discriminator byte written into the instruction digest.
    fn discriminator(&self) -> u8 {
        match self {
            Operation::Spawn(_) => 0,
            Operation::Invoke(_) => 1,
            Operation::Delete => 2,
        }
    }
}

/// The kind of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrType {
    /// A spawn instruction.
    Spawn,
    /// An invoke instruction.
    Invoke,
    /// A delete instruction.
    Delete,
}

/// One Spawn, Invoke, or Delete against an instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Instruction {
    /// The instance the instruction targets.
    pub instance_id: InstanceId,
    /// Anti-replay value, monotonic per DARC from the client's side.
    pub nonce: Nonce,
    /// Position of this instruction within its client transaction.
    pub index: u32,
    /// Total number of instructions in the client transaction.
    pub length: u32,
    /// What the instruction does.
    pub operation: Operation,
    /// Signatures that the DARC in `instance_id` can verify.
    pub signatures: Vec<Signature>,
}

impl Instruction {
    /// Creates an unsigned instruction.
    pub fn new(
        instance_id: InstanceId,
        nonce: Nonce,
        index: u32,
        length: u32,
        operation: Operation,
    ) -> Self {
        Self {
            instance_id,
            nonce,
            index,
            length,
            operation,
            signatures: Vec::new(),
        }
    }

    /// The digest of the instruction, independent of its signatures.
    ///
    /// SHA-256 over: darc id, sub id, nonce, `index` and `length` as little-endian
    /// u32, the operation discriminator, the spawn contract id, then every
    /// argument's name and value in order.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(self.instance_id.darc_id.0);
        h.update(self.instance_id.sub_id.0);
        h.update(self.nonce.0);
        h.update(self.index.to_le_bytes());
        h.update(self.length.to_le_bytes());
        h.update([self.operation.discriminator()]);
        // The invoke command is not hashed. Signatures and derived IDs depend on
        // this exact layout, so it must not change without a ledger upgrade.
        if let Operation::Spawn(spawn) = &self.operation {
            h.update(spawn.contract_id.as_bytes());
        }
        if let Some(args) = self.arguments() {
            for arg in args.iter() {
                h.update(arg.name.as_bytes());
                h.update(&arg.value);
            }
        }
        h.finalize().into()
    }

    /// Derives the ID of an instance created by this instruction.
    ///
    /// The new sub id is SHA-256 over `what`, the instruction hash, and every
    /// signature's bytes in order; the DARC id is inherited. Signer identities are
    /// not hashed, which other nodes already rely on to find spawned instances.
    pub fn derive_id(&self, what: &str) -> InstanceId {
        let mut h = Sha256::new();
        h.update(what.as_bytes());
        h.update(self.hash());
        for sig in &self.signatures {
            h.update(&sig.signature);
        }
        InstanceId {
            darc_id: self.instance_id.darc_id,
            sub_id: SubId(h.finalize().into()),
        }
    }

    /// The action label the DARC is asked to authorize.
    pub fn action(&self) -> String {
        match &self.operation {
            Operation::Spawn(spawn) => format!("spawn:{}", spawn.contract_id),
            Operation::Invoke(invoke) => format!("invoke:{}", invoke.command),
            Operation::Delete => DELETE_ACTION.to_string(),
        }
    }

    /// The kind of the instruction.
    pub fn instr_type(&self) -> InstrType {
        match self.operation {
            Operation::Spawn(_) => InstrType::Spawn,
            Operation::Invoke(_) => InstrType::Invoke,
            Operation::Delete => InstrType::Delete,
        }
    }

    /// The arguments of the operation; `None` for a delete.
    pub fn arguments(&self) -> Option<&Arguments> {
        match &self.operation {
            Operation::Spawn(spawn) => Some(&spawn.args),
            Operation::Invoke(invoke) => Some(&invoke.args),
            Operation::Delete => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instr: {}", hex::encode(self.hash()))?;
        writeln!(f, "\tdarc ID: {}", self.instance_id.darc_id)?;
        writeln!(f, "\tnonce: {}", self.nonce)?;
        writeln!(f, "\tindex: {}\n\tlength: {}", self.index, self.length)?;
        writeln!(f, "\taction: {}", self.action())?;
        writeln!(f, "\tsignatures: {}", self.signatures.len())
    }
}

#[cfg(test)]
mod tests;
