//! # Byte-Encoding Primitives
//!
//! The building blocks every canonical layout is assembled from:
//!
//! ```text
//! long          8 bytes, big-endian, must fit a signed 64-bit integer
//! with_size     u16 big-endian length, then the raw bytes
//! opt_asset     0x00 for the native asset, else 0x01 + with_size(id)
//! base58 field  decoded in place, optionally length-checked
//! ```
//!
//! Encoders are pure. A failed field aborts the whole buffer; callers never
//! see a partially written layout.

pub mod base58;
pub mod writer;

pub use base58::DecodeError;
pub use writer::ByteWriter;
