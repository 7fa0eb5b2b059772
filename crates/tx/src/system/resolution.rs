// Path: crates/tx/src/system/resolution.rs

//! Resolving which contract handles an instruction, and the state it acts on.

use omni_api::state::{RecordValue, StateView, RECORD_CONTRACT_INDEX, RECORD_STATE_INDEX};
use omni_types::app::{Instruction, Operation};
use omni_types::error::{StateError, TransactionError};
use tracing::{debug, warn};

/// The contract an instruction is dispatched to, with its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractState {
    /// The contract ID.
    pub contract_id: String,
    /// The stored state bytes; `None` for a spawn, which has no prior state.
    pub state: Option<Vec<u8>>,
}

fn byte_cell<'a>(values: &'a [RecordValue], index: usize) -> Result<&'a [u8], StateError> {
    let cell = values.get(index).ok_or_else(|| {
        StateError::InvalidValue(format!(
            "record has {} cells, expected at least 2",
            values.len()
        ))
    })?;
    cell.as_bytes()
        .ok_or_else(|| StateError::InvalidValue(format!("record cell {} is not bytes", index)))
}

/// Returns the contract ID and state for `instr`.
///
/// A spawn names its contract directly and reads nothing. Any other instruction
/// looks up its instance in `view`; a missing instance is `KeyNotFound` and a
/// record of the wrong shape is `InvalidValue`.
pub fn get_contract_state(
    instr: &Instruction,
    view: &dyn StateView,
) -> Result<ContractState, TransactionError> {
    if let Operation::Spawn(spawn) = &instr.operation {
        return Ok(ContractState {
            contract_id: spawn.contract_id.clone(),
            state: None,
        });
    }

    let key = instr.instance_id.to_bytes();
    debug!(target: "resolution", instance = %instr.instance_id, "looking up instance");
    let record = view.get(&key)?.ok_or(StateError::KeyNotFound)?;

    let parse = || -> Result<ContractState, StateError> {
        let state = byte_cell(record.values(), RECORD_STATE_INDEX)?;
        let contract = byte_cell(record.values(), RECORD_CONTRACT_INDEX)?;
        let contract_id = String::from_utf8(contract.to_vec())
            .map_err(|e| StateError::InvalidValue(format!("contract id: {}", e)))?;
        Ok(ContractState {
            contract_id,
            state: Some(state.to_vec()),
        })
    };
    parse().map_err(|e| {
        warn!(target: "resolution", instance = %instr.instance_id, error = %e, "malformed record");
        TransactionError::State(e)
    })
}
