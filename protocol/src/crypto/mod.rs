//! # Cryptographic Primitives
//!
//! Everything the signer needs from cryptography, and nothing more:
//!
//! - **hash**: Blake2b-256, Keccak-256, SHA-256 and their composition.
//! - **keys**: seed-phrase derivation and Curve25519 key pairs.
//! - **signatures**: Curve25519 signing in Ed25519 format.
//! - **address**: account addresses derived from public keys.
//!
//! Everything here wraps audited curve arithmetic from `curve25519-dalek`
//! and `ed25519-dalek`; no field math is reimplemented.

pub mod address;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use address::Address;
pub use hash::{blake2b256, keccak256, secure_hash, sha256};
pub use keys::{KeyMaterial, PublicKey, WavesKeypair, WavesSignature};
pub use signatures::SigningError;
