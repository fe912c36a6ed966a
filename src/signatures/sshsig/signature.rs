//! RSA signature blob
//!
//! ```text
//! string   algorithm     "rsa-sha2-512", "rsa-sha2-256", "ssh-rsa"
//! string   signature
//! ```
//!
//! Some encoders wrap the signature bytes in one more length prefix, as
//! if they were an `mpint` inside the `string`. That layer is detected by
//! a heuristic: when the first four bytes, read as a `uint32`, equal the
//! number of bytes after them, they are treated as a redundant prefix and
//! removed.
//!
//! The heuristic can misfire. A raw signature whose first four bytes
//! happen to encode `len - 4` is peeled by mistake, and a wrapper whose
//! prefix disagrees with the payload is left in place. [`RawSignature::peeled`]
//! reports which path was taken.

use tracing::trace;

use crate::encoding::{FieldTooLong, WireReader, WireWriter};

use super::DecodeError;

/// A decoded signature blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSignature {
    /// Signature algorithm name as carried in the blob.
    pub algorithm: String,
    /// Big-endian signature magnitude, redundant prefix removed.
    pub magnitude: Vec<u8>,
    /// Whether a self-describing length prefix was stripped.
    pub peeled: bool,
}

impl RawSignature {
    /// Decodes the algorithm name and signature magnitude.
    ///
    /// # Errors
    /// [`DecodeError::TruncatedField`] if either field runs past the end.
    pub fn from_blob(blob: &[u8]) -> Result<Self, DecodeError> {
        let mut r = WireReader::new(blob);

        let algorithm = r.read_string("signature_algorithm")?;
        let algorithm = String::from_utf8_lossy(algorithm).into_owned();
        let field = r.read_string("signature_value")?;

        let (magnitude, peeled) = match peel_length_prefix(field) {
            Some(inner) => (inner, true),
            None => (field, false),
        };

        trace!(
            algorithm = %algorithm,
            field_len = field.len(),
            peeled,
            "decoded signature blob"
        );

        Ok(Self {
            algorithm,
            magnitude: magnitude.to_vec(),
            peeled,
        })
    }

    /// Encodes the signature blob.
    ///
    /// When `peeled` is set, the redundant length prefix is written back
    /// so that decoding the result yields `self` again.
    pub fn to_blob(&self) -> Result<Vec<u8>, FieldTooLong> {
        let field = if self.peeled {
            let mut inner = WireWriter::new();
            inner.put_string(&self.magnitude)?;
            inner.into_bytes()
        } else {
            self.magnitude.clone()
        };

        let mut w = WireWriter::new();
        w.put_string(self.algorithm.as_bytes())?;
        w.put_string(&field)?;

        Ok(w.into_bytes())
    }
}

/// Returns the payload after a length prefix that exactly describes it.
///
/// A field of four bytes or fewer is never peeled.
pub fn peel_length_prefix(field: &[u8]) -> Option<&[u8]> {
    if field.len() <= 4 {
        return None;
    }

    let (prefix, rest) = field.split_at(4);
    let declared = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;

    (declared == rest.len()).then_some(rest)
}
