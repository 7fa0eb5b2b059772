// Path: crates/tx/src/system/validation.rs

//! Stateless well-formedness checks run before a transaction is applied.

use omni_types::app::ClientTransaction;
use omni_types::config::TransactionConfig;
use omni_types::error::{ErrorCode, TransactionError};
use tracing::warn;

fn reject(err: TransactionError) -> TransactionError {
    warn!(target: "validation", code = err.code(), "{}", err);
    err
}

/// Checks that a transaction is structurally sound and within `config` limits.
///
/// Every instruction must carry its own position as `index` and the instruction
/// count as `length`, so a dropped or reordered instruction is caught here.
pub fn validate_transaction(
    tx: &ClientTransaction,
    config: &TransactionConfig,
) -> Result<(), TransactionError> {
    let instrs = &tx.instructions;
    if instrs.is_empty() {
        return Err(reject(TransactionError::Invalid(
            "transaction has no instructions".into(),
        )));
    }
    let count = u32::try_from(instrs.len())
        .ok()
        .filter(|n| *n <= config.max_instructions_per_transaction)
        .ok_or_else(|| {
            reject(TransactionError::LimitExceeded(format!(
                "{} instructions, limit is {}",
                instrs.len(),
                config.max_instructions_per_transaction
            )))
        })?;

    for (position, instr) in (0u32..).zip(instrs.iter()) {
        if instr.index != position {
            return Err(reject(TransactionError::PositionMismatch {
                expected: position,
                got: instr.index,
            }));
        }
        if instr.length != count {
            return Err(reject(TransactionError::LengthMismatch {
                expected: count,
                got: instr.length,
            }));
        }
        if instr.signatures.len() > config.max_signatures_per_instruction {
            return Err(reject(TransactionError::LimitExceeded(format!(
                "instruction {} has {} signatures, limit is {}",
                position,
                instr.signatures.len(),
                config.max_signatures_per_instruction
            ))));
        }
        let oversized = instr
            .arguments()
            .into_iter()
            .flat_map(|args| args.iter())
            .find(|arg| arg.value.len() > config.max_argument_value_bytes);
        if let Some(arg) = oversized {
            return Err(reject(TransactionError::LimitExceeded(format!(
                "argument '{}' of instruction {} is {} bytes, limit is {}",
                arg.name,
                position,
                arg.value.len(),
                config.max_argument_value_bytes
            ))));
        }
    }
    Ok(())
}

/// Checks the batch size, then every transaction in it.
pub fn validate_batch(
    txs: &[ClientTransaction],
    config: &TransactionConfig,
) -> Result<(), TransactionError> {
    if txs.len() > config.max_transactions_per_batch {
        return Err(reject(TransactionError::LimitExceeded(format!(
            "{} transactions, limit is {}",
            txs.len(),
            config.max_transactions_per_batch
        ))));
    }
    txs.iter().try_for_each(|tx| validate_transaction(tx, config))
}
