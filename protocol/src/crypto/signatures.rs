//! # Curve25519 Signatures
//!
//! Accounts hold a single Curve25519 (X25519) key pair, yet sign with
//! Ed25519-shaped signatures. The trick is the same one Signal uses: the
//! clamped private scalar `k` doubles as an Ed25519 secret scalar, and the
//! one bit of information the Montgomery public key loses (the sign of the
//! Edwards x-coordinate) travels in the top bit of the signature.
//!
//! ```text
//! A = k·B                             sign bit of A -> sig[63] bit 7
//! r = SHA-512(0xFE ‖ 0xFF×31 ‖ k ‖ M ‖ Z) mod ℓ
//! R = r·B
//! h = SHA-512(R ‖ A ‖ M) mod ℓ
//! s = r + h·k mod ℓ                   sig = R ‖ s
//! ```
//!
//! Verification rebuilds `A` from the Montgomery key and the stolen bit,
//! clears that bit, and hands the rest to `ed25519-dalek`.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use thiserror::Error;

use super::hash::sha512_parts;

/// Errors during signature operations.
///
/// Messages never echo secret material back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    #[error("invalid private key material")]
    InvalidPrivateKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature bytes: expected 64 bytes")]
    InvalidSignatureBytes,

    #[error("signature verification failed")]
    VerificationFailed,
}

const NONCE_PREFIX: [u8; 32] = {
    let mut prefix = [0xFF; 32];
    prefix[0] = 0xFE;
    prefix
};

/// Signs `message` with a clamped Curve25519 private key.
///
/// `entropy` is mixed into the nonce. All-zero entropy yields deterministic
/// signatures; the nonce is still secret because it is keyed by `k`.
pub fn sign(private_key: &[u8; 32], message: &[u8], entropy: &[u8; 64]) -> [u8; 64] {
    let k = Scalar::from_bytes_mod_order(*private_key);
    let public = EdwardsPoint::mul_base(&k).compress();
    let sign_bit = public.as_bytes()[31] & 0x80;

    let r = Scalar::from_bytes_mod_order_wide(&sha512_parts(&[
        &NONCE_PREFIX[..],
        &private_key[..],
        message,
        &entropy[..],
    ]));
    let big_r = EdwardsPoint::mul_base(&r).compress();

    let h = Scalar::from_bytes_mod_order_wide(&sha512_parts(&[
        &big_r.as_bytes()[..],
        &public.as_bytes()[..],
        message,
    ]));
    let s = r + h * k;

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(big_r.as_bytes());
    signature[32..].copy_from_slice(s.as_bytes());
    signature[63] &= 0x7F;
    signature[63] |= sign_bit;
    signature
}

/// Verifies a signature against a Montgomery-form public key.
///
/// Returns `false` for every failure mode, including keys that do not map
/// to a curve point.
pub fn verify(public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool {
    let sign_bit = signature[63] >> 7;
    let Some(edwards) = MontgomeryPoint(*public_key).to_edwards(sign_bit) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(edwards.compress().as_bytes()) else {
        return false;
    };

    let mut ed_signature = *signature;
    ed_signature[63] &= 0x7F;
    verifying_key
        .verify(message, &DalekSignature::from_bytes(&ed_signature))
        .is_ok()
}
