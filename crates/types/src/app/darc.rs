// Path: crates/types/src/app/darc.rs

//! The request shape consumed by the external DARC (delegation-based access
//! control) evaluator, plus the minimal policy object needed to address one.
//!
//! Policy evaluation itself lives outside this crate. What lives here is the
//! exact byte layout that gets digested and signed.

use crate::app::ids::DarcId;
use crate::codec;
use crate::error::TransactionError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// The party behind a signature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub enum Identity {
    /// A raw Ed25519 public key.
    #[codec(index = 0)]
    Ed25519([u8; 32]),
    /// Another DARC, whose own rules decide on the signature.
    #[codec(index = 1)]
    Darc(DarcId),
}

impl Identity {
    /// Canonical bytes of the identity as they enter a request digest: a one-byte
    /// kind tag followed by the key or DARC id.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (tag, body): (u8, &[u8]) = match self {
            Identity::Ed25519(pk) => (0, pk),
            Identity::Darc(id) => (1, id.as_ref()),
        };
        let mut out = Vec::with_capacity(1 + body.len());
        out.push(tag);
        out.extend_from_slice(body);
        out
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Ed25519(pk) => write!(f, "ed25519:{}", hex::encode(pk)),
            Identity::Darc(id) => write!(f, "darc:{}", id),
        }
    }
}

/// A signature together with the identity that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Signature {
    /// Who signed.
    pub signer: Identity,
    /// The signature bytes. Empty while an instruction is only identity-populated.
    pub signature: Vec<u8>,
}

impl Signature {
    /// A placeholder that carries the signer's identity and no signature yet.
    pub fn placeholder(signer: Identity) -> Self {
        Self {
            signer,
            signature: Vec::new(),
        }
    }
}

/// A request to be checked against a DARC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Request {
    /// The base ID of the DARC the request is evaluated against.
    pub base_id: DarcId,
    /// The action being requested, e.g. `spawn:coin`.
    pub action: String,
    /// The digest the signatures commit to.
    pub message: [u8; 32],
    /// The identities claiming to authorize the request, in signature order.
    pub identities: Vec<Identity>,
    /// The signatures over `hash()`, parallel to `identities`.
    pub signatures: Vec<Vec<u8>>,
}

impl Request {
    /// Assembles a request.
    pub fn new(
        base_id: DarcId,
        action: impl Into<String>,
        message: [u8; 32],
        identities: Vec<Identity>,
        signatures: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            base_id,
            action: action.into(),
            message,
            identities,
            signatures,
        }
    }

    /// The digest that every signer signs: SHA-256 over the base ID, the action
    /// prefixed with its length as a little-endian u64, the message, and each
    /// identity's canonical bytes in order. Signatures are not part of it.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(self.base_id.0);
        h.update((self.action.len() as u64).to_le_bytes());
        h.update(self.action.as_bytes());
        h.update(self.message);
        for identity in &self.identities {
            h.update(identity.to_bytes());
        }
        h.finalize().into()
    }
}

/// One action/expression pair of a DARC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Rule {
    /// The action this rule governs.
    pub action: String,
    /// The policy expression, opaque to this crate.
    pub expression: Vec<u8>,
}

/// The parts of an access-control policy object needed to compute its ID.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Darc {
    /// Incremented on every evolution.
    pub version: u64,
    /// Free-form description.
    pub description: Vec<u8>,
    /// The ID of version 0 of this DARC; `None` for version 0 itself.
    pub base_id: Option<DarcId>,
    /// The rules, in their canonical order.
    pub rules: Vec<Rule>,
}

impl Darc {
    /// Parses a DARC from its canonical encoding.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, TransactionError> {
        codec::from_bytes_canonical(buf).map_err(TransactionError::InvalidDarc)
    }

    /// Returns the canonical encoding of this DARC.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        codec::to_bytes_canonical(self).map_err(TransactionError::Serialization)
    }

    /// The identifier of this version of the DARC: SHA-256 over its canonical
    /// encoding. Every variable-length field is length-prefixed and `base_id`
    /// carries a presence tag, so no two distinct DARCs share an encoding.
    pub fn id(&self) -> DarcId {
        DarcId(self.using_encoded(|bytes| Sha256::digest(bytes).into()))
    }

    /// The ID of the first version of this DARC, which every later version shares.
    pub fn base_id(&self) -> DarcId {
        self.base_id.unwrap_or_else(|| self.id())
    }
}
