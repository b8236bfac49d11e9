//! The order record and its canonical bytes.
//!
//! # Byte Layout
//!
//! ```text
//! [version 1][senderPublicKey 32][matcherPublicKey 32][assetPair]
//! [orderType 1][price 8][amount 8][timestamp 8][expiration 8][matcherFee 8]
//! V3 only: [opt_asset(matcherFeeAssetId)]
//! ```
//!
//! The version byte is the layout's, not the field's: an order paying its
//! fee in an issued asset always encodes as version 3.

use serde::{Deserialize, Serialize};

use super::types::{AssetPair, OrderLayout, OrderType};
use crate::config::{DEFAULT_MATCHER_FEE, ORDER_VERSION_V2, PUBLIC_KEY_LENGTH};
use crate::crypto::hash::blake2b256;
use crate::encoding::{base58, ByteWriter};
use crate::error::TransactionError;
use crate::transaction::AssetId;

/// A limit order for the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub matcher_public_key: String,
    /// Empty until signing fills it from the private key.
    pub sender_public_key: String,
    pub asset_pair: AssetPair,
    pub order_type: OrderType,
    /// Price of one amount-asset unit in price-asset units, scaled by 10^8.
    pub price: u64,
    pub amount: u64,
    /// Zero until signing takes it from the clock.
    pub timestamp: u64,
    pub expiration: u64,
    pub matcher_fee_asset_id: AssetId,
    pub matcher_fee: u64,
    pub version: u8,
    pub proofs: Vec<String>,
}

impl Order {
    pub fn new(
        matcher_public_key: impl Into<String>,
        asset_pair: AssetPair,
        order_type: OrderType,
        price: u64,
        amount: u64,
    ) -> Self {
        Self {
            matcher_public_key: matcher_public_key.into(),
            sender_public_key: String::new(),
            asset_pair,
            order_type,
            price,
            amount,
            timestamp: 0,
            expiration: 0,
            matcher_fee_asset_id: AssetId::Waves,
            matcher_fee: DEFAULT_MATCHER_FEE,
            version: ORDER_VERSION_V2,
            proofs: Vec::new(),
        }
    }

    pub fn with_sender_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.sender_public_key = public_key.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_expiration(mut self, expiration: u64) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_matcher_fee(mut self, fee: u64) -> Self {
        self.matcher_fee = fee;
        self
    }

    pub fn with_matcher_fee_asset(mut self, asset: impl Into<AssetId>) -> Self {
        self.matcher_fee_asset_id = asset.into();
        self
    }

    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn layout(&self) -> OrderLayout {
        OrderLayout::for_fee_asset(&self.matcher_fee_asset_id)
    }

    /// Fails with `UnsupportedVersion` for anything but 2 or 3.
    pub fn check_version(&self) -> Result<(), TransactionError> {
        if OrderLayout::SUPPORTED_VERSIONS.contains(&self.version) {
            Ok(())
        } else {
            Err(TransactionError::UnsupportedVersion {
                kind: "Order",
                version: self.version,
                supported: OrderLayout::SUPPORTED_VERSIONS,
            })
        }
    }

    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        self.check_version()?;
        let layout = self.layout();

        let mut w = ByteWriter::with_capacity(160);
        w.put_u8(layout.version())
            .put_base58_fixed::<PUBLIC_KEY_LENGTH>("senderPublicKey", &self.sender_public_key)?
            .put_base58_fixed::<PUBLIC_KEY_LENGTH>("matcherPublicKey", &self.matcher_public_key)?
            .put_bytes(&self.asset_pair.to_bytes()?)
            .put_u8(self.order_type.byte())
            .put_long("price", self.price)?
            .put_long("amount", self.amount)?
            .put_long("timestamp", self.timestamp)?
            .put_long("expiration", self.expiration)?
            .put_long("matcherFee", self.matcher_fee)?;

        if layout == OrderLayout::V3 {
            w.put_asset_option("matcherFeeAssetId", &self.matcher_fee_asset_id)?;
        }
        Ok(w.into_bytes())
    }

    /// Order id: base58 of `blake2b256(canonical bytes)`.
    pub fn id(&self) -> Result<String, TransactionError> {
        Ok(base58::encode(&blake2b256(&self.canonical_bytes()?)))
    }
}
