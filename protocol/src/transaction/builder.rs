//! The transaction record and its builder.
//!
//! A [`Transaction`] is the shared header (sender key, timestamp, fee,
//! version, chain id, proofs) around a kind-specific [`TransactionBody`].
//! [`TransactionBuilder`] assembles one; signing happens in
//! [`super::signing`], which returns a new value rather than mutating this
//! one.

use serde::{Deserialize, Serialize};

use super::asset::AssetId;
use super::body::{
    Burn, CreateAlias, Lease, LeaseCancel, MassTransfer, Reissue, Sponsorship, Transfer, TransactionBody,
    TransferEntry,
};
use super::recipient::Recipient;
use super::types::TransactionType;
use crate::config::{NetworkConfig, CHAIN_ID_MAINNET};
use crate::crypto::hash::blake2b256;
use crate::encoding::base58;
use crate::error::TransactionError;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A transaction before or after signing.
///
/// # Canonical Byte Format
///
/// [`Transaction::canonical_bytes`] is a pure function of the fields below,
/// excluding `proofs` and `signature`. Zero `fee`/`timestamp` and an empty
/// `sender_public_key` are valid *before* signing; the signer back-fills
/// them, and encoding an empty sender key fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Base58 public key of the sender. Empty until signing fills it in.
    pub sender_public_key: String,

    /// Unix time in milliseconds. Must be within 1.5 hours of the node clock.
    pub timestamp: u64,

    /// Fee in wavelets.
    pub fee: u64,

    /// Layout version; see [`TransactionBody::supported_versions`].
    pub version: u8,

    /// Network the transaction targets (`W`, `T`, `S`).
    pub chain_id: u8,

    /// Base58 signatures, at most eight.
    pub proofs: Vec<String>,

    /// Legacy single signature from version-1 layouts. Never written by
    /// proof-based signing and never part of canonical bytes.
    pub signature: Option<String>,

    pub body: TransactionBody,
}

impl Transaction {
    /// A transaction with every header field at its pre-signing default.
    pub fn new(body: TransactionBody) -> Self {
        Self {
            sender_public_key: String::new(),
            timestamp: 0,
            fee: 0,
            version: body.default_version(),
            chain_id: CHAIN_ID_MAINNET,
            proofs: Vec::new(),
            signature: None,
            body,
        }
    }

    pub fn kind(&self) -> TransactionType {
        self.body.kind()
    }

    /// Fails with `UnsupportedVersion` if the body cannot encode `version`.
    pub fn check_version(&self) -> Result<(), TransactionError> {
        if self.body.supports_version(self.version) {
            Ok(())
        } else {
            Err(TransactionError::UnsupportedVersion {
                kind: self.kind().name(),
                version: self.version,
                supported: self.body.supported_versions(),
            })
        }
    }

    /// The exact bytes nodes re-derive and verify signatures against.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        self.check_version()?;
        self.body.encode(self)
    }

    /// Transaction id: base58 of `blake2b256(canonical bytes)`.
    pub fn id(&self) -> Result<String, TransactionError> {
        Ok(base58::encode(&blake2b256(&self.canonical_bytes()?)))
    }

    pub fn is_signed(&self) -> bool {
        !self.proofs.is_empty() || self.signature.is_some()
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] values.
///
/// # Usage
///
/// ```
/// use waves_protocol::config::NetworkConfig;
/// use waves_protocol::transaction::TransactionBuilder;
///
/// let tx = TransactionBuilder::lease("alias:T:node", 10_000_000)
///     .network(&NetworkConfig::testnet())
///     .fee(100_000)
///     .build();
/// assert_eq!(tx.chain_id, b'T');
/// ```
///
/// Unset fields keep their pre-signing defaults: version from the body,
/// mainnet chain id, zero fee and timestamp, empty sender key.
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn new(body: TransactionBody) -> Self {
        Self {
            tx: Transaction::new(body),
        }
    }

    pub fn alias(alias: impl Into<String>) -> Self {
        Self::new(TransactionBody::CreateAlias(CreateAlias { alias: alias.into() }))
    }

    pub fn burn(asset_id: impl Into<AssetId>, quantity: u64) -> Self {
        Self::new(TransactionBody::Burn(Burn {
            asset_id: asset_id.into(),
            quantity,
        }))
    }

    pub fn lease(recipient: impl Into<Recipient>, amount: u64) -> Self {
        Self::new(TransactionBody::Lease(Lease {
            recipient: recipient.into(),
            amount,
        }))
    }

    pub fn lease_cancel(lease_id: impl Into<String>) -> Self {
        Self::new(TransactionBody::LeaseCancel(LeaseCancel {
            lease_id: lease_id.into(),
        }))
    }

    /// A transfer paying its fee in WAVES with no attachment.
    pub fn transfer(recipient: impl Into<Recipient>, asset_id: impl Into<AssetId>, amount: u64) -> Self {
        Self::new(TransactionBody::Transfer(Transfer {
            recipient: recipient.into(),
            asset_id: asset_id.into(),
            amount,
            fee_asset_id: AssetId::Waves,
            attachment: String::new(),
        }))
    }

    pub fn reissue(asset_id: impl Into<AssetId>, quantity: u64, reissuable: bool) -> Self {
        Self::new(TransactionBody::Reissue(Reissue {
            asset_id: asset_id.into(),
            quantity,
            reissuable,
        }))
    }

    pub fn mass_transfer(asset_id: impl Into<AssetId>, transfers: Vec<TransferEntry>) -> Self {
        Self::new(TransactionBody::MassTransfer(MassTransfer {
            asset_id: asset_id.into(),
            transfers,
            attachment: String::new(),
        }))
    }

    pub fn sponsorship(asset_id: impl Into<AssetId>, min_sponsored_asset_fee: u64) -> Self {
        Self::new(TransactionBody::Sponsorship(Sponsorship {
            asset_id: asset_id.into(),
            min_sponsored_asset_fee,
        }))
    }

    /// Targets the chain of a network preset.
    pub fn network(self, network: &NetworkConfig) -> Self {
        self.chain_id(network.chain_id)
    }

    pub fn chain_id(mut self, chain_id: u8) -> Self {
        self.tx.chain_id = chain_id;
        self
    }

    pub fn sender_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.tx.sender_public_key = public_key.into();
        self
    }

    pub fn fee(mut self, fee: u64) -> Self {
        self.tx.fee = fee;
        self
    }

    /// Sets the timestamp explicitly (Unix milliseconds). Left at zero, the
    /// signer takes it from its clock.
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.tx.timestamp = timestamp;
        self
    }

    pub fn version(mut self, version: u8) -> Self {
        self.tx.version = version;
        self
    }

    /// Sets the attachment of a transfer or mass transfer. Ignored by other
    /// kinds.
    pub fn attachment(mut self, attachment_base58: impl Into<String>) -> Self {
        match &mut self.tx.body {
            TransactionBody::Transfer(body) => body.attachment = attachment_base58.into(),
            TransactionBody::MassTransfer(body) => body.attachment = attachment_base58.into(),
            _ => {}
        }
        self
    }

    /// Sets the fee asset of a transfer. Ignored by other kinds.
    pub fn fee_asset(mut self, fee_asset_id: impl Into<AssetId>) -> Self {
        if let TransactionBody::Transfer(body) = &mut self.tx.body {
            body.fee_asset_id = fee_asset_id.into();
        }
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> String {
        base58::encode(&[3u8; 32])
    }

    fn sample_tx() -> Transaction {
        TransactionBuilder::burn(base58::encode(&[5u8; 32]), 1_000)
            .chain_id(b'T')
            .sender_public_key(sender())
            .fee(100_000)
            .timestamp(1_700_000_000_000)
            .build()
    }

    #[test]
    fn builder_defaults() {
        let tx = TransactionBuilder::alias("abcd").build();
        assert_eq!(tx.version, 2);
        assert_eq!(tx.chain_id, b'W');
        assert_eq!(tx.fee, 0);
        assert_eq!(tx.timestamp, 0);
        assert!(tx.sender_public_key.is_empty());
        assert!(!tx.is_signed());
    }

    #[test]
    fn canonical_bytes_are_deterministic() {
        assert_eq!(sample_tx().canonical_bytes().unwrap(), sample_tx().canonical_bytes().unwrap());
        assert_eq!(sample_tx().id().unwrap(), sample_tx().id().unwrap());
    }

    #[test]
    fn id_is_32_bytes_of_base58() {
        let id = sample_tx().id().unwrap();
        assert_eq!(base58::decode("id", &id).unwrap().len(), 32);
    }

    #[test]
    fn proofs_and_signature_do_not_affect_bytes() {
        let mut tx = sample_tx();
        let before = tx.canonical_bytes().unwrap();
        tx.proofs.push("proof".into());
        tx.signature = Some("legacy".into());
        assert_eq!(tx.canonical_bytes().unwrap(), before);
        assert!(tx.is_signed());
    }

    #[test]
    fn unsupported_version_is_reported() {
        let tx = TransactionBuilder::burn(base58::encode(&[5u8; 32]), 1)
            .sender_public_key(sender())
            .version(3)
            .build();
        let err = tx.canonical_bytes().unwrap_err();
        assert_eq!(
            err,
            TransactionError::UnsupportedVersion {
                kind: "Burn",
                version: 3,
                supported: &[2],
            }
        );
    }

    #[test]
    fn empty_sender_key_fails_instead_of_encoding() {
        let tx = TransactionBuilder::burn(base58::encode(&[5u8; 32]), 1).build();
        assert!(matches!(tx.canonical_bytes(), Err(TransactionError::Decode(_))));
    }

    #[test]
    fn transaction_json_roundtrip() {
        let tx = sample_tx();
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("senderPublicKey"));
        let recovered: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, recovered);
    }

    #[test]
    fn attachment_and_fee_asset_only_touch_transfers() {
        let tx = TransactionBuilder::transfer("alias:bob1", AssetId::Waves, 10)
            .attachment("3mJr7AoUXx2Wqd")
            .fee_asset("WAVES")
            .build();
        match tx.body {
            TransactionBody::Transfer(ref body) => {
                assert_eq!(body.attachment, "3mJr7AoUXx2Wqd");
                assert!(body.fee_asset_id.is_native());
            }
            _ => panic!("expected transfer"),
        }

        let lease = TransactionBuilder::lease("alias:bob1", 10).attachment("abc").build();
        assert!(matches!(lease.body, TransactionBody::Lease(_)));
    }
}
