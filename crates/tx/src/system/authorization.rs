// Path: crates/tx/src/system/authorization.rs

//! Building the access-control request for an instruction, and signing it.

use omni_api::crypto::Signer;
use omni_crypto::sign::eddsa::verify_ed25519;
use omni_types::app::{
    Darc, Identity, Instruction, Request, Signature, DARC_ARGUMENT, EVOLVE_ACTION,
};
use omni_types::error::TransactionError;
use tracing::{debug, warn};

/// The digest a request for `instr` commits to.
///
/// For the evolve action this is the ID of the DARC carried in the `darc`
/// argument, so that the request is checked against the policy being installed.
/// For every other action it is the instruction hash.
fn request_message(instr: &Instruction, action: &str) -> Result<[u8; 32], TransactionError> {
    if action != EVOLVE_ACTION {
        return Ok(instr.hash());
    }
    let encoded = instr
        .arguments()
        .and_then(|args| args.search(DARC_ARGUMENT))
        .ok_or_else(|| {
            TransactionError::InvalidDarc(format!("missing '{}' argument", DARC_ARGUMENT))
        })?;
    Ok(Darc::from_bytes(encoded)?.id().0)
}

fn build_request(instr: &Instruction, signatures: &[Signature]) -> Result<Request, TransactionError> {
    let action = instr.action();
    let message = request_message(instr, &action)?;
    debug!(
        target: "authorization",
        %action,
        signers = signatures.len(),
        "built darc request"
    );
    Ok(Request::new(
        instr.instance_id.darc_id,
        action,
        message,
        signatures.iter().map(|s| s.signer.clone()).collect(),
        signatures.iter().map(|s| s.signature.clone()).collect(),
    ))
}

/// Converts an instruction into the request the DARC evaluator checks, carrying
/// the identities and signatures already attached to it.
pub fn to_darc_request(instr: &Instruction) -> Result<Request, TransactionError> {
    build_request(instr, &instr.signatures)
}

/// Signs `instr` with every signer, in order.
///
/// The request is first built from placeholder signatures that carry only the
/// signers' identities, so the digest each of them signs covers who is signing.
/// The instruction's signatures are replaced only once every signer has
/// succeeded; on error they are left as they were.
pub fn sign_by(instr: &mut Instruction, signers: &[&dyn Signer]) -> Result<(), TransactionError> {
    let mut staged: Vec<Signature> = signers
        .iter()
        .map(|s| Signature::placeholder(s.identity()))
        .collect();
    let digest = build_request(instr, &staged)?.hash();

    for (signer, slot) in signers.iter().zip(staged.iter_mut()) {
        slot.signature = signer.sign(&digest).map_err(|e| {
            warn!(
                target: "authorization",
                signer = %slot.signer,
                error = %e,
                "signer failed; instruction left unsigned"
            );
            TransactionError::Signing(format!("signer {}: {}", slot.signer, e))
        })?;
    }
    instr.signatures = staged;
    Ok(())
}

/// Checks every signature of a request against its digest.
///
/// Only Ed25519 identities can be checked here; a DARC identity delegates to
/// another policy and is reported as unsupported. A request without signatures
/// authorizes nothing and is rejected.
pub fn verify_request(request: &Request) -> Result<(), TransactionError> {
    if request.identities.len() != request.signatures.len() {
        return Err(TransactionError::InvalidSignature(format!(
            "{} identities but {} signatures",
            request.identities.len(),
            request.signatures.len()
        )));
    }
    if request.identities.is_empty() {
        return Err(TransactionError::InvalidSignature(
            "request carries no signatures".into(),
        ));
    }

    let digest = request.hash();
    for (identity, signature) in request.identities.iter().zip(&request.signatures) {
        match identity {
            Identity::Ed25519(pk) => {
                verify_ed25519(pk, &digest, signature).map_err(|e| {
                    warn!(
                        target: "authorization",
                        signer = %identity,
                        action = %request.action,
                        "signature verification failed"
                    );
                    TransactionError::InvalidSignature(format!("signer {}: {}", identity, e))
                })?;
            }
            Identity::Darc(_) => {
                return Err(TransactionError::Unsupported(format!(
                    "signer {} needs the policy graph to verify",
                    identity
                )))
            }
        }
    }
    Ok(())
}

/// Builds the request for `instr` and verifies its signatures.
pub fn verify_instruction(instr: &Instruction) -> Result<(), TransactionError> {
    verify_request(&to_darc_request(instr)?)
}
