//! Account addresses.
//!
//! ```text
//! [0x01][chain id][secure_hash(public key)[0..20]][checksum 4]
//! checksum = secure_hash(first 22 bytes)[0..4]
//! ```

use std::fmt;

use super::hash::secure_hash;
use super::keys::PublicKey;
use crate::config::{ADDRESS_CHECKSUM_LENGTH, ADDRESS_HASH_LENGTH, ADDRESS_LENGTH, ADDRESS_VERSION};
use crate::encoding::base58::{self, DecodeError};

const BODY_LENGTH: usize = ADDRESS_LENGTH - ADDRESS_CHECKSUM_LENGTH;

/// A decoded, checksum-verified 26-byte address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub fn from_public_key(public_key: &PublicKey, chain_id: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_VERSION;
        bytes[1] = chain_id;
        bytes[2..BODY_LENGTH].copy_from_slice(&secure_hash(public_key.as_bytes())[..ADDRESS_HASH_LENGTH]);
        let checksum = secure_hash(&bytes[..BODY_LENGTH]);
        bytes[BODY_LENGTH..].copy_from_slice(&checksum[..ADDRESS_CHECKSUM_LENGTH]);
        Self(bytes)
    }

    /// Validates length, version byte and checksum of raw address bytes.
    pub fn from_bytes(field: &'static str, bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|_| DecodeError::InvalidLength {
            field,
            expected: ADDRESS_LENGTH,
            actual: bytes.len(),
        })?;
        if bytes[0] != ADDRESS_VERSION {
            return Err(DecodeError::InvalidAddress {
                field,
                reason: format!("unknown version byte {}", bytes[0]),
            });
        }
        let checksum = secure_hash(&bytes[..BODY_LENGTH]);
        if bytes[BODY_LENGTH..] != checksum[..ADDRESS_CHECKSUM_LENGTH] {
            return Err(DecodeError::InvalidAddress {
                field,
                reason: "checksum mismatch".to_string(),
            });
        }
        Ok(Self(bytes))
    }

    pub fn from_base58(field: &'static str, text: &str) -> Result<Self, DecodeError> {
        let bytes = base58::decode(field, text)?;
        Self::from_bytes(field, &bytes)
    }

    pub fn chain_id(&self) -> u8 {
        self.0[1]
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
