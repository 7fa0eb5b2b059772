// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for transaction validation.
use crate::MAX_ARGUMENT_VALUE_BYTES;
use serde::{Deserialize, Serialize};

/// Size limits applied by the stateless well-formedness checks.
///
/// Every field may be omitted from a configuration file, in which case it takes
/// its default value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TransactionConfig {
    /// Upper bound on the number of instructions in one client transaction.
    #[serde(default = "default_max_instructions_per_transaction")]
    pub max_instructions_per_transaction: u32,
    /// Upper bound on the number of client transactions in one batch.
    #[serde(default = "default_max_transactions_per_batch")]
    pub max_transactions_per_batch: usize,
    /// Upper bound on the size in bytes of a single argument value.
    #[serde(default = "default_max_argument_value_bytes")]
    pub max_argument_value_bytes: usize,
    /// Upper bound on the number of signatures attached to one instruction.
    #[serde(default = "default_max_signatures_per_instruction")]
    pub max_signatures_per_instruction: usize,
}

fn default_max_instructions_per_transaction() -> u32 {
    64
}
fn default_max_transactions_per_batch() -> usize {
    1000
}
fn default_max_argument_value_bytes() -> usize {
    MAX_ARGUMENT_VALUE_BYTES
}
fn default_max_signatures_per_instruction() -> usize {
    16
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            max_instructions_per_transaction: default_max_instructions_per_transaction(),
            max_transactions_per_batch: default_max_transactions_per_batch(),
            max_argument_value_bytes: default_max_argument_value_bytes(),
            max_signatures_per_instruction: default_max_signatures_per_instruction(),
        }
    }
}

impl TransactionConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| format!("invalid transaction config: {}", e))
    }
}
