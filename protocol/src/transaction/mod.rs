//! # Transaction Module
//!
//! Construction, canonical encoding, signing and verification of
//! transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        : TransactionType registry (numeric codes and names)
//! asset.rs        : AssetId, native vs issued
//! recipient.rs    : Recipient (address or alias) and alias validation
//! body.rs         : TransactionBody variants and their byte layouts
//! builder.rs      : Transaction header and TransactionBuilder
//! signing.rs      : Signer and SignedTransaction
//! verification.rs : proof checks against sender or co-signer keys
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** with [`TransactionBuilder`].
//! 2. **Sign** with [`Signer::sign`], which returns a [`SignedTransaction`]
//!    and leaves the input untouched.
//! 3. **Co-sign** with [`SignedTransaction::add_proof`] if the account is a
//!    multi-signature script account.
//! 4. **Verify** with [`verify_transaction`] or [`verify_proofs`].

pub mod asset;
pub mod body;
pub mod builder;
pub mod recipient;
pub mod signing;
pub mod types;
pub mod verification;

pub use asset::AssetId;
pub use body::{
    Burn, CreateAlias, Lease, LeaseCancel, MassTransfer, Reissue, Sponsorship, Transfer, TransactionBody,
    TransferEntry,
};
pub use builder::{Transaction, TransactionBuilder};
pub use recipient::{validate_alias, Recipient};
pub use signing::{SignedTransaction, Signer};
pub use types::{name_for_code, TransactionType};
pub use verification::{verify_proofs, verify_transaction};
