//! # Hashing Utilities
//!
//! The network hashes with three functions and combines two of them:
//!
//! - **Blake2b-256**: transaction and order ids.
//! - **Keccak-256**: the original Keccak padding, *not* NIST SHA3-256.
//! - **SHA-256**: turns an account seed into a private key.
//!
//! `secure_hash` is `keccak256(blake2b256(x))` and is what addresses and
//! account seeds are built from.

use blake2::{digest::consts::U32, Blake2b};
use sha2::{Digest, Sha256, Sha512};
use tiny_keccak::{Hasher, Keccak};

type Blake2b256 = Blake2b<U32>;

/// Blake2b with a 32-byte output.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Keccak-256 as used by Ethereum and by Waves addresses.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// SHA-256 returning a fixed-size array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA-512 over several parts without concatenating them first.
pub(crate) fn sha512_parts(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// `keccak256(blake2b256(data))`.
pub fn secure_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}
