// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Waves Protocol: Transaction Encoding & Signing
//!
//! Client-side construction of Waves transactions and matcher orders: the
//! exact canonical bytes consensus nodes re-derive, Curve25519 signatures
//! over them, and the proofs that carry those signatures.
//!
//! ## Architecture
//!
//! - **encoding**: base58 and the big-endian byte writer every layout uses.
//! - **crypto**: hashes, key derivation from seeds, signatures, addresses.
//! - **transaction**: the type registry, transaction variants, builder,
//!   signer and verification.
//! - **order**: matcher orders and their V2/V3 layouts.
//! - **config**: protocol constants and [`NetworkConfig`].
//! - **clock**: the injected time source used when signing.
//! - **error**: the crate-level [`TransactionError`].
//!
//! ## Example
//!
//! ```
//! use waves_protocol::{FixedClock, KeyMaterial, NetworkConfig, Signer, TransactionBuilder};
//!
//! let network = NetworkConfig::testnet();
//! let signer = Signer::new(network.clone(), FixedClock(1_600_000_000_000));
//! let tx = TransactionBuilder::alias("merchant").network(&network).build();
//!
//! let signed = signer.sign(&tx, &KeyMaterial::seed("my seed phrase")).unwrap();
//! assert_eq!(signed.proofs().len(), 1);
//! assert_eq!(signed.transaction().fee, 100_000);
//! ```
//!
//! Signing never mutates its input and never signs bytes it failed to
//! encode: every failure surfaces as a [`TransactionError`].

pub mod clock;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod order;
pub mod transaction;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NetworkConfig;
pub use crypto::{Address, KeyMaterial, PublicKey, SigningError, WavesKeypair, WavesSignature};
pub use encoding::DecodeError;
pub use error::TransactionError;
pub use order::{verify_order, AssetPair, Order, OrderLayout, OrderType, SignedOrder};
pub use transaction::{
    verify_proofs, verify_transaction, AssetId, Recipient, SignedTransaction, Signer, Transaction,
    TransactionBody, TransactionBuilder, TransactionType,
};
