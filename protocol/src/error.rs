//! Error types for transaction and order encoding.
//!
//! Every encode or sign path returns a [`TransactionError`]. There is no
//! fallback to an empty buffer: if the canonical bytes cannot be built,
//! nothing gets signed.

use thiserror::Error;

use crate::crypto::SigningError;
use crate::encoding::DecodeError;

/// Errors that can occur while building canonical bytes or signing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// A base58 field (key, id, address) is malformed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Key material was rejected or the signature backend failed.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// A field value the network would reject: alias length, proof count,
    /// oversized attachment, out-of-window timestamp.
    #[error("constraint violated on {field}: {reason}")]
    EncodingConstraint { field: &'static str, reason: String },

    /// The layout version is not one this kind can encode.
    #[error("unsupported version {version} for {kind} (supported: {supported:?})")]
    UnsupportedVersion {
        kind: &'static str,
        version: u8,
        supported: &'static [u8],
    },
}

impl TransactionError {
    pub(crate) fn constraint(field: &'static str, reason: impl Into<String>) -> Self {
        Self::EncodingConstraint {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert() {
        let err: TransactionError = DecodeError::InvalidLength {
            field: "assetId",
            expected: 32,
            actual: 3,
        }
        .into();
        assert!(matches!(err, TransactionError::Decode(_)));
        assert_eq!(err.to_string(), "decode error: assetId: expected 32 bytes, got 3");
    }

    #[test]
    fn unsupported_version_message() {
        let err = TransactionError::UnsupportedVersion {
            kind: "Burn",
            version: 7,
            supported: &[2],
        };
        assert_eq!(err.to_string(), "unsupported version 7 for Burn (supported: [2])");
    }

    #[test]
    fn constraint_helper() {
        let err = TransactionError::constraint("alias", "too short");
        assert_eq!(err.to_string(), "constraint violated on alias: too short");
    }
}
