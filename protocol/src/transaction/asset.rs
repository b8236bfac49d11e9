//! Asset identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::WAVES_ASSET_ID;
use crate::error::TransactionError;

/// Either the native asset or an issued asset identified by its base58 id.
///
/// The native asset has no id on chain. Text forms `""` and `"WAVES"` (any
/// case) both parse to [`AssetId::Waves`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetId {
    #[default]
    Waves,
    Issued(String),
}

impl AssetId {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() || text.eq_ignore_ascii_case(WAVES_ASSET_ID) {
            Self::Waves
        } else {
            Self::Issued(text.to_string())
        }
    }

    pub fn issued(id: impl Into<String>) -> Self {
        Self::parse(&id.into())
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Waves)
    }

    /// The base58 id of an issued asset, or a constraint error for the
    /// native asset (burn, reissue and sponsorship need a real id).
    pub fn require_issued(&self, field: &'static str) -> Result<&str, TransactionError> {
        match self {
            Self::Issued(id) => Ok(id),
            Self::Waves => Err(TransactionError::constraint(
                field,
                "the native asset cannot be used here",
            )),
        }
    }
}

impl From<String> for AssetId {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&str> for AssetId {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<AssetId> for String {
    fn from(asset: AssetId) -> Self {
        match asset {
            AssetId::Waves => WAVES_ASSET_ID.to_string(),
            AssetId::Issued(id) => id,
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waves => f.write_str(WAVES_ASSET_ID),
            Self::Issued(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_sentinels() {
        assert!(AssetId::parse("").is_native());
        assert!(AssetId::parse("WAVES").is_native());
        assert!(AssetId::parse("waves").is_native());
        assert!(!AssetId::parse("8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS").is_native());
    }

    #[test]
    fn require_issued() {
        assert!(AssetId::Waves.require_issued("assetId").is_err());
        assert_eq!(AssetId::issued("abc").require_issued("assetId").unwrap(), "abc");
    }

    #[test]
    fn serde_roundtrip() {
        let assets = vec![AssetId::Waves, AssetId::issued("8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS")];
        for a in assets {
            let json = serde_json::to_string(&a).unwrap();
            let recovered: AssetId = serde_json::from_str(&json).unwrap();
            assert_eq!(a, recovered);
        }
    }
}
