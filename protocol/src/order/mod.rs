//! # Order Module
//!
//! Exchange orders for the matcher. An [`Order`] is not a transaction: it
//! has its own two-version byte layout, chosen by the asset the matcher
//! fee is paid in, and is always signed with a single proof from a raw
//! private key.
//!
//! ```text
//! types.rs   : OrderType, AssetPair, OrderLayout
//! request.rs : Order and its canonical bytes
//! signing.rs : Signer::sign_order, SignedOrder, verify_order
//! ```

pub mod request;
pub mod signing;
pub mod types;

pub use request::Order;
pub use signing::{verify_order, SignedOrder};
pub use types::{AssetPair, OrderLayout, OrderType};
