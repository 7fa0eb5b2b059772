// Path: crates/types/src/app/mod.rs

//! Core application-level data structures: instructions, client transactions,
//! state changes, and the access-control request shape they are checked with.

/// A minimal value-transfer payload.
pub mod coin;
/// The DARC request shape and policy identity.
pub mod darc;
/// Fixed-width identifiers and nonces.
pub mod ids;
/// The atomic unit of ledger mutation.
pub mod instruction;
/// Effect records produced by executing instructions.
pub mod state_change;
/// Ordered groups of instructions and batches thereof.
pub mod transaction;

pub use coin::Coin;
pub use darc::{Darc, Identity, Request, Rule, Signature};
pub use ids::{DarcId, InstanceId, Nonce, SubId, ID_LEN, INSTANCE_ID_LEN};
pub use instruction::{
    Argument, Arguments, InstrType, Instruction, Invoke, Operation, Spawn, DARC_ARGUMENT,
    DELETE_ACTION, EVOLVE_ACTION,
};
pub use state_change::{StateAction, StateChange, StateChanges};
pub use transaction::{ClientTransaction, ClientTransactions, Instructions};
