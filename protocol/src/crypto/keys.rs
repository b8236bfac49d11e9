//! # Key Management
//!
//! Curve25519 account keys and the seed-phrase derivation that produces them.
//!
//! ```text
//! account seed = secure_hash(nonce_u32_be ‖ seed_utf8)
//! private key  = clamp(sha256(account seed))
//! public key   = X25519(private key, 9)       // Montgomery u-coordinate
//! ```
//!
//! Key bytes are never logged. `Debug` on anything holding a private key
//! prints the public half only.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::Address;
use super::hash::{secure_hash, sha256};
use super::signatures::{self, SigningError};
use crate::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::encoding::base58::{self, DecodeError};

/// Applies the Curve25519 clamping rules to a 32-byte scalar.
pub fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
    bytes
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A Curve25519 public key (Montgomery u-coordinate).
///
/// Serializes as base58, the form every API and transaction field uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_base58(text: &str) -> Result<Self, DecodeError> {
        base58::decode_fixed::<PUBLIC_KEY_LENGTH>("publicKey", text).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }

    /// The address this key controls on the given chain.
    pub fn address(&self, chain_id: u8) -> Address {
        Address::from_public_key(self, chain_id)
    }

    pub fn verify(&self, message: &[u8], signature: &WavesSignature) -> bool {
        signatures::verify(&self.0, message, &signature.0)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = DecodeError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_base58(&text)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.to_base58()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_base58())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

// ---------------------------------------------------------------------------
// WavesSignature
// ---------------------------------------------------------------------------

/// A 64-byte Curve25519 signature. Its base58 form is what goes into a
/// proof slot.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WavesSignature([u8; SIGNATURE_LENGTH]);

impl WavesSignature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_base58(text: &str) -> Result<Self, DecodeError> {
        base58::decode_fixed::<SIGNATURE_LENGTH>("proof", text).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }
}

impl fmt::Debug for WavesSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WavesSignature({})", self.to_base58())
    }
}

// ---------------------------------------------------------------------------
// WavesKeypair
// ---------------------------------------------------------------------------

/// An account key pair.
///
/// Not `Serialize`. Export the private key with
/// [`WavesKeypair::private_key_base58`].
#[derive(Clone, PartialEq, Eq)]
pub struct WavesKeypair {
    private_key: [u8; PRIVATE_KEY_LENGTH],
    public_key: PublicKey,
}

impl WavesKeypair {
    /// Derives the first account (nonce 0) of a seed phrase.
    pub fn from_seed(seed: &str) -> Self {
        Self::from_seed_with_nonce(seed, 0)
    }

    /// Derives account number `nonce` of a seed phrase.
    pub fn from_seed_with_nonce(seed: &str, nonce: u32) -> Self {
        let mut input = Vec::with_capacity(4 + seed.len());
        input.extend_from_slice(&nonce.to_be_bytes());
        input.extend_from_slice(seed.as_bytes());
        let account_seed = secure_hash(&input);
        Self::from_private_key(sha256(&account_seed))
    }

    /// Builds a key pair from raw private key bytes, clamping them first.
    pub fn from_private_key(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        let private_key = clamp(bytes);
        let public = EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(private_key))
            .to_montgomery()
            .to_bytes();
        Self {
            private_key,
            public_key: PublicKey(public),
        }
    }

    /// Parses a base58 private key. Malformed input is reported as a
    /// signing error without echoing the text back.
    pub fn from_private_key_base58(text: &str) -> Result<Self, SigningError> {
        let bytes = base58::decode_fixed::<PRIVATE_KEY_LENGTH>("privateKey", text)
            .map_err(|_| SigningError::InvalidPrivateKey)?;
        Ok(Self::from_private_key(bytes))
    }

    /// A fresh random key pair from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self::from_private_key(bytes)
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn address(&self, chain_id: u8) -> Address {
        self.public_key.address(chain_id)
    }

    /// **Handle with care.** The only secret standing between an attacker
    /// and the account.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.private_key
    }

    pub fn private_key_base58(&self) -> String {
        base58::encode(&self.private_key)
    }

    /// Deterministic signature: same key and message, same bytes.
    pub fn sign(&self, message: &[u8]) -> WavesSignature {
        WavesSignature(signatures::sign(&self.private_key, message, &[0u8; 64]))
    }

    /// Signature with 64 bytes of fresh entropy mixed into the nonce.
    pub fn sign_randomized<R: RngCore + CryptoRng>(&self, message: &[u8], rng: &mut R) -> WavesSignature {
        let mut entropy = [0u8; 64];
        rng.fill_bytes(&mut entropy);
        WavesSignature(signatures::sign(&self.private_key, message, &entropy))
    }

    pub fn verify(&self, message: &[u8], signature: &WavesSignature) -> bool {
        self.public_key.verify(message, signature)
    }
}

impl fmt::Debug for WavesKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WavesKeypair(pub={})", self.public_key)
    }
}

// ---------------------------------------------------------------------------
// KeyMaterial
// ---------------------------------------------------------------------------

/// What a caller hands the signer: a seed phrase or a base58 private key.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Seed(String),
    PrivateKey(String),
}

impl KeyMaterial {
    pub fn seed(seed: impl Into<String>) -> Self {
        Self::Seed(seed.into())
    }

    pub fn private_key(base58: impl Into<String>) -> Self {
        Self::PrivateKey(base58.into())
    }

    /// Resolves the material into a usable key pair.
    pub fn keypair(&self) -> Result<WavesKeypair, SigningError> {
        match self {
            Self::Seed(seed) => Ok(WavesKeypair::from_seed(seed)),
            Self::PrivateKey(text) => WavesKeypair::from_private_key_base58(text),
        }
    }

    /// The public key the material controls.
    pub fn public_key(&self) -> Result<PublicKey, SigningError> {
        self.keypair().map(|kp| kp.public_key())
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed(_) => f.write_str("KeyMaterial::Seed(<redacted>)"),
            Self::PrivateKey(_) => f.write_str("KeyMaterial::PrivateKey(<redacted>)"),
        }
    }
}
