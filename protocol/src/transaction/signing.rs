//! Transaction signing.
//!
//! Signing is a pure transformation: [`Signer::sign`] takes a transaction
//! by reference and returns a [`SignedTransaction`] holding a copy with its
//! defaults back-filled and exactly one proof. The input is never touched,
//! so two threads can sign the same transaction without coordination.
//!
//! The procedure:
//! 1. Resolve the key material (seed phrase or base58 private key).
//! 2. Fill an empty sender key from it, a zero timestamp from the clock,
//!    and a zero fee from the network minimum. A sender key that is already
//!    set is kept even when the signing key differs, which is how
//!    co-signers of a scripted account produce proofs.
//! 3. Reject timestamps the network would refuse.
//! 4. Encode the canonical bytes. Any failure stops here; nothing is signed.
//! 5. Sign, replace the proof list with the new signature and drop any
//!    legacy signature.

use serde::Serialize;
use tracing::{debug, warn};

use super::builder::Transaction;
use crate::clock::{Clock, SystemClock};
use crate::config::{NetworkConfig, MAX_PROOFS};
use crate::crypto::{KeyMaterial, WavesKeypair};
use crate::error::TransactionError;

// ---------------------------------------------------------------------------
// Signer
// ---------------------------------------------------------------------------

/// Signs transactions and orders for one network with an injected clock.
#[derive(Debug, Clone)]
pub struct Signer<C: Clock = SystemClock> {
    network: NetworkConfig,
    clock: C,
}

impl Signer<SystemClock> {
    /// A signer reading the operating system clock.
    pub fn system(network: NetworkConfig) -> Self {
        Self::new(network, SystemClock)
    }
}

impl<C: Clock> Signer<C> {
    pub fn new(network: NetworkConfig, clock: C) -> Self {
        Self { network, clock }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Back-fills defaults, encodes and signs. See the module docs for the
    /// exact order of steps.
    ///
    /// # Errors
    ///
    /// - `Signing` if the key material is malformed.
    /// - `EncodingConstraint` for a timestamp outside the tolerance window
    ///   or any field the encoder rejects.
    /// - `Decode` / `UnsupportedVersion` from canonical encoding.
    pub fn sign(&self, tx: &Transaction, key: &KeyMaterial) -> Result<SignedTransaction, TransactionError> {
        let keypair = key.keypair()?;
        let mut tx = tx.clone();
        self.fill_defaults(&mut tx, &keypair)?;

        let bytes = tx.canonical_bytes()?;
        let signature = keypair.sign(&bytes).to_base58();
        tx.proofs.clear();
        tx.proofs.push(signature.clone());
        tx.signature = None;

        let signed = SignedTransaction::new(tx, signature)?;
        debug!(
            kind = %signed.transaction.kind(),
            id = %signed.id,
            chain = %(signed.transaction.chain_id as char),
            "transaction signed"
        );
        Ok(signed)
    }

    fn fill_defaults(&self, tx: &mut Transaction, keypair: &WavesKeypair) -> Result<(), TransactionError> {
        let public_key = keypair.public_key().to_base58();
        if tx.sender_public_key.is_empty() {
            debug!("sender public key taken from signing key");
            tx.sender_public_key = public_key;
        } else if tx.sender_public_key != public_key {
            debug!(sender = %tx.sender_public_key, signer = %public_key, "signing for another account");
        }

        if tx.timestamp == 0 {
            tx.timestamp = self.clock.now_millis();
            debug!(timestamp = tx.timestamp, "timestamp taken from clock");
        }
        if tx.fee == 0 {
            tx.fee = self.network.min_fee;
            debug!(fee = tx.fee, "fee defaulted to network minimum");
        }

        self.check_timestamp(tx.timestamp)
    }

    /// Rejects timestamps further than the network tolerance from "now".
    pub(crate) fn check_timestamp(&self, timestamp: u64) -> Result<(), TransactionError> {
        let now = self.clock.now_millis();
        let tolerance = self.network.timestamp_tolerance_ms;
        let distance = now.abs_diff(timestamp);
        if distance > tolerance {
            warn!(timestamp, now, tolerance, "timestamp outside network window");
            return Err(TransactionError::constraint(
                "timestamp",
                format!(
                    "{} is {}ms away from now ({}), tolerance is {}ms",
                    timestamp, distance, now, tolerance
                ),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SignedTransaction
// ---------------------------------------------------------------------------

/// A transaction with its defaults filled in and at least one proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    id: String,
    #[serde(skip)]
    signature: String,
    #[serde(flatten)]
    transaction: Transaction,
}

impl SignedTransaction {
    fn new(transaction: Transaction, signature: String) -> Result<Self, TransactionError> {
        Ok(Self {
            id: transaction.id()?,
            signature,
            transaction,
        })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }

    /// Base58 transaction id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The most recently added proof.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn proofs(&self) -> &[String] {
        &self.transaction.proofs
    }

    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        self.transaction.canonical_bytes()
    }

    /// Appends a co-signer's proof for multi-signature accounts. The key
    /// does not need to match the sender.
    ///
    /// Fails with `EncodingConstraint` once eight proofs are present.
    pub fn add_proof(&self, key: &KeyMaterial) -> Result<Self, TransactionError> {
        if self.proofs().len() >= MAX_PROOFS {
            return Err(TransactionError::constraint(
                "proofs",
                format!("already holds {} proofs, the maximum", MAX_PROOFS),
            ));
        }
        let keypair = key.keypair()?;
        let signature = keypair.sign(&self.canonical_bytes()?).to_base58();

        let mut transaction = self.transaction.clone();
        transaction.proofs.push(signature.clone());
        debug!(id = %self.id, proofs = transaction.proofs.len(), "proof added");

        Ok(Self {
            id: self.id.clone(),
            signature,
            transaction,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
