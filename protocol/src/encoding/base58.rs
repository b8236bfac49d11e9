//! Base58 text encoding for keys, ids, addresses and signatures.
//!
//! Thin wrapper over `bs58` (Bitcoin alphabet) that tags failures with the
//! name of the field being decoded, so an error surfacing from deep inside
//! an encoder still says which input was wrong.

use thiserror::Error;

/// Errors raised while turning text fields back into raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{field}: invalid base58: {reason}")]
    InvalidBase58 { field: &'static str, reason: String },

    #[error("{field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: invalid address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },
}

/// Encodes raw bytes as base58.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decodes a base58 string. An empty string decodes to an empty vector.
pub fn decode(field: &'static str, text: &str) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| DecodeError::InvalidBase58 {
            field,
            reason: e.to_string(),
        })
}

/// Decodes a base58 string that must hold exactly `N` bytes.
pub fn decode_fixed<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], DecodeError> {
    let bytes = decode(field, text)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| DecodeError::InvalidLength {
            field,
            expected: N,
            actual: bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let raw = [7u8; 32];
        let text = encode(&raw);
        assert_eq!(decode("key", &text).unwrap(), raw.to_vec());
        assert_eq!(encode(&decode("key", &text).unwrap()), text);
    }

    #[test]
    fn empty_string_decodes_to_nothing() {
        assert!(decode("key", "").unwrap().is_empty());
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        // '0', 'O', 'I' and 'l' are not in the Bitcoin alphabet.
        let err = decode("assetId", "0OIl").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidBase58 { field: "assetId", .. }));
    }

    #[test]
    fn fixed_length_is_enforced() {
        let text = encode(&[1u8; 31]);
        let err = decode_fixed::<32>("leaseId", &text).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength {
                field: "leaseId",
                expected: 32,
                actual: 31
            }
        );

        let ok = decode_fixed::<32>("leaseId", &encode(&[1u8; 32])).unwrap();
        assert_eq!(ok, [1u8; 32]);
    }

    #[test]
    fn error_message_names_the_field() {
        let err = decode("senderPublicKey", "!!").unwrap_err();
        assert!(err.to_string().starts_with("senderPublicKey"));
    }
}
