// Path: crates/tx/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

pub mod ordering;
pub mod system;

pub use ordering::sort_transactions;
pub use system::authorization::{sign_by, to_darc_request, verify_instruction, verify_request};
pub use system::resolution::{get_contract_state, ContractState};
pub use system::validation::{validate_batch, validate_transaction};
