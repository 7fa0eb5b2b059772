// Path: crates/types/src/app/ids.rs

//! Fixed-width identifiers for ledger instances and the anti-replay nonce.

use crate::error::StateError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The length in bytes of a `DarcId`, `SubId`, or `Nonce`.
pub const ID_LEN: usize = 32;
/// The length in bytes of a serialized `InstanceId`.
pub const INSTANCE_ID_LEN: usize = 2 * ID_LEN;

macro_rules! fixed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Default, Encode, Decode,
        )]
        pub struct $name(pub [u8; ID_LEN]);

        impl $name {
            /// Builds the value from a byte slice.
            ///
            /// A slice of any length other than 32 yields the all-zero value rather
            /// than an error. Use `TryFrom<&[u8]>` where a hard error is wanted.
            pub fn from_slice(buf: &[u8]) -> Self {
                Self::try_from(buf).unwrap_or_default()
            }

            /// Returns true if every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; ID_LEN]
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = StateError;

            fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
                <[u8; ID_LEN]>::try_from(buf).map(Self).map_err(|_| {
                    StateError::InvalidValue(format!(
                        "{} must be {} bytes, got {}",
                        stringify!($name),
                        ID_LEN,
                        buf.len()
                    ))
                })
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }
    };
}

fixed_id!(
    /// Identifies the access-control policy (DARC) governing an instance.
    DarcId
);
fixed_id!(
    /// Disambiguates instances spawned under the same policy.
    SubId
);
fixed_id!(
    /// Anti-replay counter tracked per `DarcId` by the client.
    ///
    /// The core only stores and hashes it; monotonicity is checked elsewhere.
    Nonce
);

/// The address of one instance: its governing policy plus a disambiguating sub-id.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
    Encode, Decode,
)]
pub struct InstanceId {
    /// The base ID of the DARC controlling access to this instance.
    pub darc_id: DarcId,
    /// A unique ID among all the instances spawned under `darc_id`.
    pub sub_id: SubId,
}

impl InstanceId {
    /// Creates an instance ID from its two halves.
    pub fn new(darc_id: DarcId, sub_id: SubId) -> Self {
        Self { darc_id, sub_id }
    }

    /// Builds an instance ID from `darc_id || sub_id`.
    ///
    /// A slice of any length other than 64 yields the all-zero ID rather than an
    /// error; callers must not rely on this for length validation.
    pub fn from_slice(buf: &[u8]) -> Self {
        Self::try_from(buf).unwrap_or_default()
    }

    /// Returns the concatenation `darc_id || sub_id`, the key under which the
    /// instance is stored.
    pub fn to_bytes(&self) -> [u8; INSTANCE_ID_LEN] {
        let mut out = [0u8; INSTANCE_ID_LEN];
        let (darc, sub) = out.split_at_mut(ID_LEN);
        darc.copy_from_slice(&self.darc_id.0);
        sub.copy_from_slice(&self.sub_id.0);
        out
    }
}

impl TryFrom<&[u8]> for InstanceId {
    type Error = StateError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        if buf.len() != INSTANCE_ID_LEN {
            return Err(StateError::InvalidValue(format!(
                "InstanceId must be {} bytes, got {}",
                INSTANCE_ID_LEN,
                buf.len()
            )));
        }
        let (darc, sub) = buf.split_at(ID_LEN);
        Ok(Self {
            darc_id: DarcId::try_from(darc)?,
            sub_id: SubId::try_from(sub)?,
        })
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.darc_id, self.sub_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_slice_roundtrip() {
        let id = InstanceId::new(DarcId([1u8; 32]), SubId([2u8; 32]));
        let bytes = id.to_bytes();
        assert_eq!(&bytes[..32], &[1u8; 32]);
        assert_eq!(&bytes[32..], &[2u8; 32]);
        assert_eq!(InstanceId::from_slice(&bytes), id);
        assert_eq!(InstanceId::try_from(&bytes[..]).unwrap(), id);
    }

    #[test]
    fn test_wrong_length_defaults_to_zero() {
        // Lenient constructors never error; `TryFrom` is the checked path.
        assert_eq!(InstanceId::from_slice(&[7u8; 63]), InstanceId::default());
        assert_eq!(InstanceId::from_slice(&[]), InstanceId::default());
        assert!(Nonce::from_slice(&[7u8; 33]).is_zero());
        assert!(DarcId::from_slice(&[7u8; 31]).is_zero());
    }

    #[test]
    fn test_wrong_length_strict_errors() {
        assert!(matches!(
            InstanceId::try_from(&[0u8; 65][..]),
            Err(StateError::InvalidValue(_))
        ));
        assert!(Nonce::try_from(&[0u8; 3][..]).is_err());
    }

    #[test]
    fn test_display_is_lower_hex() {
        let nonce = Nonce([0xab; 32]);
        assert_eq!(nonce.to_string(), "ab".repeat(32));
        let id = InstanceId::new(DarcId([0x01; 32]), SubId([0x02; 32]));
        assert_eq!(id.to_string(), format!("{}{}", "01".repeat(32), "02".repeat(32)));
    }
}
