//! Append-only builder for canonical byte layouts.

use super::base58;
use crate::error::TransactionError;
use crate::transaction::asset::AssetId;

/// Accumulates a canonical layout field by field.
///
/// Fallible `put_*` methods return `Result<&mut Self, _>` so a layout reads
/// top to bottom with `?`. The buffer is only released by
/// [`ByteWriter::into_bytes`], which callers reach after every field
/// succeeded.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    /// `0x01` for true, `0x00` for false.
    pub fn put_bool(&mut self, value: bool) -> &mut Self {
        self.put_u8(u8::from(value))
    }

    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Eight bytes, big-endian. The network reads these as signed longs, so
    /// anything above `i64::MAX` would flip sign on the other side.
    pub fn put_long(&mut self, field: &'static str, value: u64) -> Result<&mut Self, TransactionError> {
        let signed = i64::try_from(value).map_err(|_| {
            TransactionError::constraint(field, format!("{} exceeds i64::MAX", value))
        })?;
        self.buf.extend_from_slice(&signed.to_be_bytes());
        Ok(self)
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// u16 big-endian length prefix followed by the bytes.
    pub fn put_with_size(&mut self, field: &'static str, bytes: &[u8]) -> Result<&mut Self, TransactionError> {
        let len = u16::try_from(bytes.len()).map_err(|_| {
            TransactionError::constraint(field, format!("{} bytes do not fit a u16 length", bytes.len()))
        })?;
        self.put_u16(len);
        Ok(self.put_bytes(bytes))
    }

    /// Decodes a base58 field that must be exactly `N` bytes long.
    pub fn put_base58_fixed<const N: usize>(
        &mut self,
        field: &'static str,
        text: &str,
    ) -> Result<&mut Self, TransactionError> {
        let bytes = base58::decode_fixed::<N>(field, text)?;
        Ok(self.put_bytes(&bytes))
    }

    /// Optional asset id: a single zero byte for the native asset, otherwise
    /// `0x01` followed by the length-prefixed decoded id.
    pub fn put_asset_option(&mut self, field: &'static str, asset: &AssetId) -> Result<&mut Self, TransactionError> {
        match asset {
            AssetId::Waves => Ok(self.put_u8(0)),
            AssetId::Issued(id) => {
                let bytes = base58::decode(field, id)?;
                self.put_u8(1);
                self.put_with_size(field, &bytes)
            }
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
