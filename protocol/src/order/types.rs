//! Value types shared by order encoding and signing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ORDER_VERSION_V2, ORDER_VERSION_V3};
use crate::encoding::ByteWriter;
use crate::error::TransactionError;
use crate::transaction::AssetId;

// ---------------------------------------------------------------------------
// OrderType
// ---------------------------------------------------------------------------

/// Side of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Buy,
    Sell,
}

impl OrderType {
    /// Byte written into canonical bytes: 0 for buy, 1 for sell.
    pub fn byte(self) -> u8 {
        match self {
            Self::Buy => 0,
            Self::Sell => 1,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("buy"),
            Self::Sell => f.write_str("sell"),
        }
    }
}

// ---------------------------------------------------------------------------
// AssetPair
// ---------------------------------------------------------------------------

/// The traded pair. An order always buys or sells the amount asset and
/// pays or receives the price asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    pub amount_asset: AssetId,
    pub price_asset: AssetId,
}

impl AssetPair {
    pub fn new(amount_asset: impl Into<AssetId>, price_asset: impl Into<AssetId>) -> Self {
        Self {
            amount_asset: amount_asset.into(),
            price_asset: price_asset.into(),
        }
    }

    /// Optional-asset encoding of the amount asset, then of the price asset.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        let mut w = ByteWriter::new();
        w.put_asset_option("assetPair.amountAsset", &self.amount_asset)?
            .put_asset_option("assetPair.priceAsset", &self.price_asset)?;
        Ok(w.into_bytes())
    }
}

// ---------------------------------------------------------------------------
// OrderLayout
// ---------------------------------------------------------------------------

/// Byte layout of an order.
///
/// V2 is used whenever the matcher fee is paid in the native asset. V3
/// appends the fee asset and always carries version byte 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderLayout {
    V2,
    V3,
}

impl OrderLayout {
    pub const SUPPORTED_VERSIONS: &'static [u8] = &[ORDER_VERSION_V2, ORDER_VERSION_V3];

    pub fn for_fee_asset(fee_asset: &AssetId) -> Self {
        if fee_asset.is_native() {
            Self::V2
        } else {
            Self::V3
        }
    }

    /// The version byte this layout writes.
    pub fn version(self) -> u8 {
        match self {
            Self::V2 => ORDER_VERSION_V2,
            Self::V3 => ORDER_VERSION_V3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::base58;

    #[test]
    fn order_type_bytes() {
        assert_eq!(OrderType::Buy.byte(), 0);
        assert_eq!(OrderType::Sell.byte(), 1);
        assert_eq!(OrderType::parse("SELL"), Some(OrderType::Sell));
        assert_eq!(OrderType::parse("hold"), None);
    }

    #[test]
    fn order_type_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&OrderType::Sell).unwrap(), "\"sell\"");
        let parsed: OrderType = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(parsed, OrderType::Buy);
    }

    #[test]
    fn native_pair_is_two_zero_bytes() {
        let pair = AssetPair::new("WAVES", "");
        assert_eq!(pair.to_bytes().unwrap(), vec![0, 0]);
    }

    #[test]
    fn issued_amount_asset_is_length_prefixed() {
        let id = base58::encode(&[9u8; 32]);
        let bytes = AssetPair::new(id.as_str(), AssetId::Waves).to_bytes().unwrap();
        assert_eq!(bytes.len(), 1 + 2 + 32 + 1);
        assert_eq!(&bytes[..3], &[1, 0, 32]);
        assert_eq!(&bytes[3..35], &[9u8; 32]);
        assert_eq!(bytes[35], 0);
    }

    #[test]
    fn malformed_asset_is_a_decode_error() {
        let err = AssetPair::new("0OIl", AssetId::Waves).to_bytes().unwrap_err();
        assert!(matches!(err, TransactionError::Decode(_)));
    }

    #[test]
    fn layout_follows_fee_asset() {
        assert_eq!(OrderLayout::for_fee_asset(&AssetId::Waves), OrderLayout::V2);
        assert_eq!(OrderLayout::for_fee_asset(&AssetId::parse("waves")), OrderLayout::V2);
        assert_eq!(OrderLayout::for_fee_asset(&AssetId::issued("8LQW8f7P")), OrderLayout::V3);
        assert_eq!(OrderLayout::V3.version(), 3);
    }
}
