//! The transaction type registry.
//!
//! Sixteen reserved codes and their display names. The table is for
//! display and lookup only; encoding is driven by the concrete
//! [`TransactionBody`](super::body::TransactionBody) variant, never by this
//! enum.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant for the operation a transaction represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    /// Reserved. Only appears in the genesis block.
    Genesis = 1,
    /// Reserved. Superseded by `Transfer`.
    Payment = 2,
    Issue = 3,
    Transfer = 4,
    Reissue = 5,
    Burn = 6,
    Exchange = 7,
    CreateLeasing = 8,
    CancelLeasing = 9,
    CreateAlias = 10,
    MassTransfer = 11,
    Data = 12,
    AddressScript = 13,
    Sponsorship = 14,
    AssetScript = 15,
    ScriptInvocation = 16,
}

impl TransactionType {
    pub const ALL: [TransactionType; 16] = [
        Self::Genesis,
        Self::Payment,
        Self::Issue,
        Self::Transfer,
        Self::Reissue,
        Self::Burn,
        Self::Exchange,
        Self::CreateLeasing,
        Self::CancelLeasing,
        Self::CreateAlias,
        Self::MassTransfer,
        Self::Data,
        Self::AddressScript,
        Self::Sponsorship,
        Self::AssetScript,
        Self::ScriptInvocation,
    ];

    /// The on-chain type byte.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a type by its code. `None` outside 1..=16.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Genesis => "Genesis",
            Self::Payment => "Payment",
            Self::Issue => "Issue",
            Self::Transfer => "Transfer",
            Self::Reissue => "Reissue",
            Self::Burn => "Burn",
            Self::Exchange => "Exchange",
            Self::CreateLeasing => "Create Leasing",
            Self::CancelLeasing => "Cancel Leasing",
            Self::CreateAlias => "Create Alias",
            Self::MassTransfer => "MassTransfer",
            Self::Data => "Data",
            Self::AddressScript => "Address Script",
            Self::Sponsorship => "Sponsorship",
            Self::AssetScript => "Asset Script",
            Self::ScriptInvocation => "Script Invocation",
        }
    }

    /// Codes the network keeps for historical blocks; no client builds them.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::Genesis | Self::Payment)
    }
}

/// Name for a raw type code; empty for unknown codes.
pub fn name_for_code(code: u8) -> &'static str {
    TransactionType::from_code(code).map_or("", TransactionType::name)
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_one_through_sixteen() {
        let codes: Vec<u8> = TransactionType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, (1..=16).collect::<Vec<u8>>());
    }

    #[test]
    fn from_code_roundtrip() {
        for t in TransactionType::ALL {
            assert_eq!(TransactionType::from_code(t.code()), Some(t));
        }
        assert_eq!(TransactionType::from_code(0), None);
        assert_eq!(TransactionType::from_code(17), None);
        assert_eq!(TransactionType::try_from(42u8), Err(42));
    }

    #[test]
    fn display_names() {
        assert_eq!(TransactionType::CreateAlias.to_string(), "Create Alias");
        assert_eq!(TransactionType::CancelLeasing.name(), "Cancel Leasing");
        assert_eq!(name_for_code(6), "Burn");
        assert_eq!(name_for_code(99), "");
    }

    #[test]
    fn only_genesis_and_payment_are_reserved() {
        let reserved: Vec<_> = TransactionType::ALL
            .into_iter()
            .filter(|t| t.is_reserved())
            .collect();
        assert_eq!(reserved, vec![TransactionType::Genesis, TransactionType::Payment]);
    }

    #[test]
    fn transaction_type_serde_roundtrip() {
        for t in TransactionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            let recovered: TransactionType = serde_json::from_str(&json).unwrap();
            assert_eq!(t, recovered);
        }
    }
}
