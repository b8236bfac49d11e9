//! Transfer and lease recipients: a raw address or a registered alias.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ALIAS_ALPHABET, ALIAS_PREFIX, MAX_ALIAS_LENGTH, MIN_ALIAS_LENGTH};
use crate::crypto::Address;
use crate::encoding::ByteWriter;
use crate::error::TransactionError;

/// Where value goes.
///
/// Text containing `alias:` parses as an alias whose name is everything
/// after the last `:` (`alias:T:bob` and `alias:bob` both name `bob`).
/// Anything else is taken as a base58 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recipient {
    Address(String),
    Alias(String),
}

impl Recipient {
    pub fn parse(text: &str) -> Self {
        if text.contains(ALIAS_PREFIX) {
            let name = text.rsplit(':').next().unwrap_or_default();
            Self::Alias(name.to_string())
        } else {
            Self::Address(text.to_string())
        }
    }

    pub fn address(base58: impl Into<String>) -> Self {
        Self::Address(base58.into())
    }

    pub fn alias(name: impl Into<String>) -> Self {
        Self::Alias(name.into())
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }

    /// Appends the recipient's canonical bytes.
    ///
    /// An alias becomes `[version][chain id][with_size(name)]`; an address
    /// is written as its 26 decoded bytes with no prefix. Addresses must
    /// carry a valid checksum and belong to `chain_id`.
    pub fn write_to(&self, w: &mut ByteWriter, version: u8, chain_id: u8) -> Result<(), TransactionError> {
        match self {
            Self::Alias(name) => write_alias(w, "recipient", version, chain_id, name),
            Self::Address(text) => {
                let address = Address::from_base58("recipient", text)?;
                if address.chain_id() != chain_id {
                    return Err(TransactionError::constraint(
                        "recipient",
                        format!(
                            "address belongs to chain {:?}, transaction targets {:?}",
                            address.chain_id() as char,
                            chain_id as char
                        ),
                    ));
                }
                w.put_bytes(address.as_bytes());
                Ok(())
            }
        }
    }
}

/// Writes `[version][chain id][with_size(alias UTF-8)]` after validating
/// the alias.
pub(crate) fn write_alias(
    w: &mut ByteWriter,
    field: &'static str,
    version: u8,
    chain_id: u8,
    name: &str,
) -> Result<(), TransactionError> {
    validate_alias(field, name)?;
    w.put_u8(version).put_u8(chain_id);
    w.put_with_size(field, name.as_bytes())?;
    Ok(())
}

/// Checks length (in UTF-8 bytes) and alphabet of an alias name.
pub fn validate_alias(field: &'static str, name: &str) -> Result<(), TransactionError> {
    let len = name.len();
    if !(MIN_ALIAS_LENGTH..=MAX_ALIAS_LENGTH).contains(&len) {
        return Err(TransactionError::constraint(
            field,
            format!(
                "alias is {} bytes, must be within [{}, {}]",
                len, MIN_ALIAS_LENGTH, MAX_ALIAS_LENGTH
            ),
        ));
    }
    if let Some(bad) = name.chars().find(|c| !ALIAS_ALPHABET.contains(*c)) {
        return Err(TransactionError::constraint(
            field,
            format!("alias contains forbidden character {:?}", bad),
        ));
    }
    Ok(())
}

impl From<String> for Recipient {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&str> for Recipient {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Recipient> for String {
    fn from(recipient: Recipient) -> Self {
        recipient.to_string()
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(text) => f.write_str(text),
            Self::Alias(name) => write!(f, "{}{}", ALIAS_PREFIX, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::WavesKeypair;

    #[test]
    fn parse_alias_forms() {
        assert_eq!(Recipient::parse("alias:T:bob1"), Recipient::alias("bob1"));
        assert_eq!(Recipient::parse("alias:bob1"), Recipient::alias("bob1"));
        assert!(!Recipient::parse("3N1HYdheYRhPvJq6hVuCvvGFNjHWrFTG1ux").is_alias());
    }

    #[test]
    fn alias_length_bounds() {
        assert!(validate_alias("alias", "abcd").is_ok());
        assert!(validate_alias("alias", &"a".repeat(30)).is_ok());
        assert!(validate_alias("alias", "abc").is_err());
        assert!(validate_alias("alias", &"a".repeat(31)).is_err());
    }

    #[test]
    fn alias_alphabet() {
        assert!(validate_alias("alias", "my.alias-01@x_y").is_ok());
        assert!(validate_alias("alias", "UPPER").is_err());
        assert!(validate_alias("alias", "with space").is_err());
    }

    #[test]
    fn alias_bytes_layout() {
        let mut w = ByteWriter::new();
        Recipient::alias("bob1").write_to(&mut w, 2, b'T').unwrap();
        assert_eq!(w.into_bytes(), vec![2, b'T', 0, 4, b'b', b'o', b'b', b'1']);
    }

    #[test]
    fn address_bytes_are_raw() {
        let address = WavesKeypair::from_seed("recipient seed").address(b'T');
        let mut w = ByteWriter::new();
        Recipient::address(address.to_base58())
            .write_to(&mut w, 2, b'T')
            .unwrap();
        assert_eq!(w.as_slice(), address.as_bytes());
    }

    #[test]
    fn address_on_other_chain_is_rejected() {
        let address = WavesKeypair::from_seed("recipient seed").address(b'W');
        let mut w = ByteWriter::new();
        let err = Recipient::address(address.to_base58())
            .write_to(&mut w, 2, b'T')
            .unwrap_err();
        assert!(matches!(err, TransactionError::EncodingConstraint { field: "recipient", .. }));
    }

    #[test]
    fn serde_roundtrip() {
        let alias = Recipient::alias("bob1");
        let json = serde_json::to_string(&alias).unwrap();
        assert_eq!(json, "\"alias:bob1\"");
        assert_eq!(serde_json::from_str::<Recipient>(&json).unwrap(), alias);
    }
}
