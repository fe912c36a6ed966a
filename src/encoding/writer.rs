//! SSH wire-format writer
//!
//! The inverse of [`WireReader`](super::WireReader): appends `uint32` and
//! `string` fields to a growing buffer.

use thiserror::Error;

/// A field was longer than a `uint32` length prefix can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field of {0} bytes does not fit a uint32 length prefix")]
pub struct FieldTooLong(pub usize);

/// Append-only builder for SSH wire-format buffers.
#[derive(Clone, Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends bytes with no length prefix.
    pub fn put_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Appends a big-endian `uint32`.
    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Appends a length-prefixed `string`.
    pub fn put_string(&mut self, bytes: &[u8]) -> Result<&mut Self, FieldTooLong> {
        let len = u32::try_from(bytes.len()).map_err(|_| FieldTooLong(bytes.len()))?;

        self.put_u32(len);
        Ok(self.put_raw(bytes))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
