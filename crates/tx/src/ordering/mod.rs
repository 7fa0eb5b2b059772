// Path: crates/tx/src/ordering/mod.rs

//! Censorship-resistant ordering of a batch of client transactions.
//!
//! The order is keyed on a salt that every transaction in the batch contributes
//! to, so a proposer can only steer the final order by changing which
//! transactions are in the batch, which other validators can see.

use omni_crypto::algorithms::hash::{sha256, sha256_concat};
use omni_types::app::ClientTransaction;
use omni_types::error::TransactionError;
use tracing::{debug, warn};

/// XOR of the SHA-256 of every serialized transaction. Independent of order.
pub fn xor_transactions<T: AsRef<[u8]>>(serialized: &[T]) -> [u8; 32] {
    serialized.iter().fold([0u8; 32], |mut acc, tx| {
        for (a, b) in acc.iter_mut().zip(sha256(tx)) {
            *a ^= b;
        }
        acc
    })
}

/// Sorts serialized transactions ascending by `SHA-256(salt || tx)`.
pub fn sort_with_salt(serialized: Vec<Vec<u8>>, salt: &[u8; 32]) -> Vec<Vec<u8>> {
    let mut keyed: Vec<([u8; 32], Vec<u8>)> = serialized
        .into_iter()
        .map(|tx| {
            let key = sha256_concat([salt.as_slice(), tx.as_slice()]);
            (key, tx)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, tx)| tx).collect()
}

/// Puts `txs` into the canonical salted order.
///
/// Every transaction is encoded and decoded back before anything is written, so
/// on error the batch is left exactly as it was.
pub fn sort_transactions(txs: &mut [ClientTransaction]) -> Result<(), TransactionError> {
    let serialized = txs
        .iter()
        .map(ClientTransaction::to_bytes)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            warn!(target: "ordering", error = %e, "cannot encode batch; order unchanged");
            e
        })?;

    let salt = xor_transactions(&serialized);
    debug!(
        target: "ordering",
        batch = txs.len(),
        salt = %hex::encode(salt),
        "sorting batch"
    );

    let sorted = sort_with_salt(serialized, &salt)
        .iter()
        .map(|bytes| ClientTransaction::from_bytes(bytes))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            warn!(target: "ordering", error = %e, "cannot decode batch; order unchanged");
            e
        })?;

    for (slot, tx) in txs.iter_mut().zip(sorted) {
        *slot = tx;
    }
    Ok(())
}
