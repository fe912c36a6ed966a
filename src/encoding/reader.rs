//! SSH wire-format reader
//!
//! The SSH wire format (RFC 4251 §5) is built from two shapes:
//! - `uint32`: four bytes, big-endian
//! - `string`: a `uint32` length `N` followed by `N` bytes
//!
//! [`WireReader`] walks a buffer field by field. It never copies: strings
//! are returned as sub-slices of the input.

use crate::signatures::sshsig::DecodeError;

/// Borrowing cursor over an SSH wire-format buffer.
///
/// Each read names the logical field it is reading so that a
/// [`DecodeError::TruncatedField`] points at the offending field rather
/// than at a raw offset.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Takes exactly `len` raw bytes.
    pub fn read_raw(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::TruncatedField {
                field,
                declared: len,
                remaining: self.remaining(),
            });
        }

        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;

        Ok(out)
    }

    /// Reads a big-endian `uint32`.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let raw = self.read_raw(4, field)?;

        Ok(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    /// Reads a length-prefixed `string`.
    ///
    /// Fails with [`DecodeError::TruncatedField`] if the length prefix
    /// itself is cut short, or if the declared length exceeds the bytes
    /// left after it.
    pub fn read_string(&mut self, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let len = self.read_u32(field)? as usize;

        self.read_raw(len, field)
    }
}
