//! Transaction variants and their canonical byte layouts.
//!
//! One struct per kind, gathered in the closed [`TransactionBody`] sum type.
//! Encoding is a single `match`: each arm writes the whole layout for its
//! kind, because the kinds disagree on where the chain id, the sender key
//! and the fee/timestamp pair go.
//!
//! ```text
//! CreateAlias   [10][v][spk][with_size([v][chain][with_size(alias)])][fee][ts]
//! Burn          [6][v][chain][spk][asset 32][quantity][fee][ts]
//! Lease         [8][v][0x00][spk][recipient][amount][fee][ts]
//! LeaseCancel   [9][v][chain][spk][fee][ts][lease id 32]
//! Transfer      [4][v][spk][opt asset][opt fee asset][ts][amount][fee][recipient][with_size(attachment)]
//! Reissue       [5][v][chain][spk][asset 32][quantity][reissuable][fee][ts]
//! MassTransfer  [11][v][spk][opt asset][count u16][(recipient, amount)*][ts][fee][with_size(attachment)]
//! Sponsorship   [14][v][spk][asset 32][min sponsored fee][fee][ts]
//! ```

use serde::{Deserialize, Serialize};

use super::asset::AssetId;
use super::builder::Transaction;
use super::recipient::{write_alias, Recipient};
use super::types::TransactionType;
use crate::config::{
    DEFAULT_TX_VERSION, DIGEST_LENGTH, MAX_ATTACHMENT_SIZE, MAX_MASS_TRANSFER_RECIPIENTS, PUBLIC_KEY_LENGTH,
};
use crate::encoding::base58;
use crate::encoding::ByteWriter;
use crate::error::TransactionError;

/// Alias version byte used inside transfer recipients.
const ALIAS_RECIPIENT_VERSION: u8 = 2;

// ---------------------------------------------------------------------------
// Variant payloads
// ---------------------------------------------------------------------------

/// Registers a short readable name for the sender's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlias {
    /// 4 to 30 bytes from `-.0123456789@_abcdefghijklmnopqrstuvwxyz`.
    pub alias: String,
}

/// Irreversibly destroys some amount of an issued asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Burn {
    pub asset_id: AssetId,
    pub quantity: u64,
}

/// Leases WAVES to a node operator's address or alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub recipient: Recipient,
    pub amount: u64,
}

/// Ends a lease created by an earlier [`Lease`] transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCancel {
    /// Base58 id of the lease transaction.
    pub lease_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub recipient: Recipient,
    pub asset_id: AssetId,
    pub amount: u64,
    pub fee_asset_id: AssetId,
    /// Base58-encoded, at most 140 bytes once decoded.
    pub attachment: String,
}

/// Issues more of an asset whose issuer kept it reissuable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reissue {
    pub asset_id: AssetId,
    pub quantity: u64,
    pub reissuable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEntry {
    pub recipient: Recipient,
    pub amount: u64,
}

impl TransferEntry {
    pub fn new(recipient: impl Into<Recipient>, amount: u64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
        }
    }
}

/// Up to 100 transfers of one asset in a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransfer {
    pub asset_id: AssetId,
    pub transfers: Vec<TransferEntry>,
    pub attachment: String,
}

/// Lets holders of an asset pay fees in it. A zero minimum fee cancels
/// sponsorship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsorship {
    pub asset_id: AssetId,
    pub min_sponsored_asset_fee: u64,
}

// ---------------------------------------------------------------------------
// TransactionBody
// ---------------------------------------------------------------------------

/// The kind-specific part of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransactionBody {
    CreateAlias(CreateAlias),
    Burn(Burn),
    Lease(Lease),
    LeaseCancel(LeaseCancel),
    Transfer(Transfer),
    Reissue(Reissue),
    MassTransfer(MassTransfer),
    Sponsorship(Sponsorship),
}

impl TransactionBody {
    pub fn kind(&self) -> TransactionType {
        match self {
            Self::CreateAlias(_) => TransactionType::CreateAlias,
            Self::Burn(_) => TransactionType::Burn,
            Self::Lease(_) => TransactionType::CreateLeasing,
            Self::LeaseCancel(_) => TransactionType::CancelLeasing,
            Self::Transfer(_) => TransactionType::Transfer,
            Self::Reissue(_) => TransactionType::Reissue,
            Self::MassTransfer(_) => TransactionType::MassTransfer,
            Self::Sponsorship(_) => TransactionType::Sponsorship,
        }
    }

    /// Layout versions this kind knows how to encode.
    pub fn supported_versions(&self) -> &'static [u8] {
        match self {
            Self::MassTransfer(_) | Self::Sponsorship(_) => &[1],
            _ => &[DEFAULT_TX_VERSION],
        }
    }

    /// The newest supported version, used when a builder does not pick one.
    pub fn default_version(&self) -> u8 {
        let versions = self.supported_versions();
        versions[versions.len() - 1]
    }

    pub fn supports_version(&self, version: u8) -> bool {
        self.supported_versions().contains(&version)
    }

    pub(crate) fn encode(&self, tx: &Transaction) -> Result<Vec<u8>, TransactionError> {
        let mut w = ByteWriter::with_capacity(256);
        w.put_u8(self.kind().code()).put_u8(tx.version);

        match self {
            Self::CreateAlias(body) => {
                put_sender(&mut w, tx)?;
                let mut inner = ByteWriter::new();
                write_alias(&mut inner, "alias", tx.version, tx.chain_id, &body.alias)?;
                w.put_with_size("alias", inner.as_slice())?;
                put_fee_and_timestamp(&mut w, tx)?;
            }
            Self::Burn(body) => {
                w.put_u8(tx.chain_id);
                put_sender(&mut w, tx)?;
                put_asset_id(&mut w, &body.asset_id)?;
                w.put_long("quantity", body.quantity)?;
                put_fee_and_timestamp(&mut w, tx)?;
            }
            Self::Lease(body) => {
                require_positive("amount", body.amount)?;
                w.put_u8(0);
                put_sender(&mut w, tx)?;
                body.recipient.write_to(&mut w, tx.version, tx.chain_id)?;
                w.put_long("amount", body.amount)?;
                put_fee_and_timestamp(&mut w, tx)?;
            }
            Self::LeaseCancel(body) => {
                w.put_u8(tx.chain_id);
                put_sender(&mut w, tx)?;
                put_fee_and_timestamp(&mut w, tx)?;
                w.put_base58_fixed::<DIGEST_LENGTH>("leaseId", &body.lease_id)?;
            }
            Self::Transfer(body) => {
                require_positive("amount", body.amount)?;
                put_sender(&mut w, tx)?;
                w.put_asset_option("assetId", &body.asset_id)?;
                w.put_asset_option("feeAssetId", &body.fee_asset_id)?;
                w.put_long("timestamp", tx.timestamp)?;
                w.put_long("amount", body.amount)?;
                w.put_long("fee", tx.fee)?;
                body.recipient
                    .write_to(&mut w, ALIAS_RECIPIENT_VERSION, tx.chain_id)?;
                put_attachment(&mut w, &body.attachment)?;
            }
            Self::Reissue(body) => {
                w.put_u8(tx.chain_id);
                put_sender(&mut w, tx)?;
                put_asset_id(&mut w, &body.asset_id)?;
                w.put_long("quantity", body.quantity)?;
                w.put_bool(body.reissuable);
                put_fee_and_timestamp(&mut w, tx)?;
            }
            Self::MassTransfer(body) => {
                let count = body.transfers.len();
                if count == 0 || count > MAX_MASS_TRANSFER_RECIPIENTS {
                    return Err(TransactionError::constraint(
                        "transfers",
                        format!(
                            "{} entries, must be within [1, {}]",
                            count, MAX_MASS_TRANSFER_RECIPIENTS
                        ),
                    ));
                }
                put_sender(&mut w, tx)?;
                w.put_asset_option("assetId", &body.asset_id)?;
                w.put_u16(count as u16);
                for entry in &body.transfers {
                    entry
                        .recipient
                        .write_to(&mut w, ALIAS_RECIPIENT_VERSION, tx.chain_id)?;
                    w.put_long("amount", entry.amount)?;
                }
                w.put_long("timestamp", tx.timestamp)?;
                w.put_long("fee", tx.fee)?;
                put_attachment(&mut w, &body.attachment)?;
            }
            Self::Sponsorship(body) => {
                put_sender(&mut w, tx)?;
                put_asset_id(&mut w, &body.asset_id)?;
                w.put_long("minSponsoredAssetFee", body.min_sponsored_asset_fee)?;
                put_fee_and_timestamp(&mut w, tx)?;
            }
        }

        Ok(w.into_bytes())
    }
}

// ---------------------------------------------------------------------------
// Shared field writers
// ---------------------------------------------------------------------------

fn put_sender(w: &mut ByteWriter, tx: &Transaction) -> Result<(), TransactionError> {
    w.put_base58_fixed::<PUBLIC_KEY_LENGTH>("senderPublicKey", &tx.sender_public_key)?;
    Ok(())
}

fn put_fee_and_timestamp(w: &mut ByteWriter, tx: &Transaction) -> Result<(), TransactionError> {
    w.put_long("fee", tx.fee)?.put_long("timestamp", tx.timestamp)?;
    Ok(())
}

fn put_asset_id(w: &mut ByteWriter, asset: &AssetId) -> Result<(), TransactionError> {
    let id = asset.require_issued("assetId")?;
    w.put_base58_fixed::<DIGEST_LENGTH>("assetId", id)?;
    Ok(())
}

fn put_attachment(w: &mut ByteWriter, attachment: &str) -> Result<(), TransactionError> {
    let bytes = base58::decode("attachment", attachment)?;
    if bytes.len() > MAX_ATTACHMENT_SIZE {
        return Err(TransactionError::constraint(
            "attachment",
            format!("{} bytes, at most {} allowed", bytes.len(), MAX_ATTACHMENT_SIZE),
        ));
    }
    w.put_with_size("attachment", &bytes)?;
    Ok(())
}

fn require_positive(field: &'static str, value: u64) -> Result<(), TransactionError> {
    if value == 0 {
        return Err(TransactionError::constraint(field, "must be > 0"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
