//! Signature checks for signed transactions.
//!
//! Checks run cheapest first: proof count, proof size and decoding before
//! canonical encoding, encoding before curve arithmetic.

use super::builder::Transaction;
use crate::config::{MAX_PROOFS, MAX_PROOF_SIZE};
use crate::crypto::{PublicKey, SigningError, WavesSignature};
use crate::encoding::base58;
use crate::error::TransactionError;

/// Verifies the first proof (or the legacy signature when there are no
/// proofs) against the transaction's own sender key.
pub fn verify_transaction(tx: &Transaction) -> Result<(), TransactionError> {
    let signature = match (tx.proofs.first(), tx.signature.as_ref()) {
        (Some(proof), _) => proof,
        (None, Some(legacy)) => legacy,
        (None, None) => return Err(TransactionError::constraint("proofs", "transaction is unsigned")),
    };
    check_proofs(tx)?;

    let sender = PublicKey::from_base58(&tx.sender_public_key)?;
    let signature = WavesSignature::from_base58(signature)?;
    let message = tx.canonical_bytes()?;

    if sender.verify(&message, &signature) {
        Ok(())
    } else {
        Err(SigningError::VerificationFailed.into())
    }
}

/// Multi-signature check: every proof must verify against at least one of
/// `keys`. An empty proof list fails.
pub fn verify_proofs(tx: &Transaction, keys: &[PublicKey]) -> Result<(), TransactionError> {
    if tx.proofs.is_empty() {
        return Err(TransactionError::constraint("proofs", "transaction is unsigned"));
    }
    check_proofs(tx)?;

    let signatures = tx
        .proofs
        .iter()
        .map(|p| WavesSignature::from_base58(p))
        .collect::<Result<Vec<_>, _>>()?;
    let message = tx.canonical_bytes()?;

    for signature in &signatures {
        if !keys.iter().any(|key| key.verify(&message, signature)) {
            return Err(SigningError::VerificationFailed.into());
        }
    }
    Ok(())
}

/// Network limits on the proof list: at most eight entries of at most
/// 64 bytes each.
fn check_proofs(tx: &Transaction) -> Result<(), TransactionError> {
    if tx.proofs.len() > MAX_PROOFS {
        return Err(TransactionError::constraint(
            "proofs",
            format!("{} proofs, at most {} allowed", tx.proofs.len(), MAX_PROOFS),
        ));
    }
    for proof in &tx.proofs {
        let size = base58::decode("proofs", proof)?.len();
        if size > MAX_PROOF_SIZE {
            return Err(TransactionError::constraint(
                "proofs",
                format!("proof is {} bytes, at most {} allowed", size, MAX_PROOF_SIZE),
            ));
        }
    }
    Ok(())
}
