//! Outer SSHSIG envelope
//!
//! ```text
//! byte[6]  "SSHSIG"
//! uint32   version
//! string   public_key
//! string   namespace
//! string   reserved
//! string   hash_algorithm
//! string   signature
//! ```
//!
//! Fields are kept as borrowed, uninterpreted byte strings. The nested
//! `public_key` and `signature` blobs are decoded separately by
//! [`RsaPublicKey`](super::RsaPublicKey) and
//! [`RawSignature`](super::RawSignature).

use tracing::debug;

use crate::encoding::{FieldTooLong, WireReader, WireWriter};

use super::DecodeError;

/// Magic preamble of every SSHSIG envelope.
pub const MAGIC: &[u8] = b"SSHSIG";

/// A decoded SSHSIG envelope borrowing from the input buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureEnvelope<'a> {
    pub version: u32,
    pub public_key: &'a [u8],
    pub namespace: &'a [u8],
    pub reserved: &'a [u8],
    pub hash_algorithm: &'a [u8],
    pub signature: &'a [u8],
}

impl<'a> SignatureEnvelope<'a> {
    /// Decodes an envelope from raw bytes.
    ///
    /// The version is returned as read and not checked. Bytes after the
    /// signature field are ignored.
    ///
    /// # Errors
    /// - [`DecodeError::MalformedEnvelope`] if the buffer does not begin
    ///   with [`MAGIC`]
    /// - [`DecodeError::TruncatedField`] if any field runs past the end
    pub fn decode(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        if !bytes.starts_with(MAGIC) {
            return Err(DecodeError::MalformedEnvelope {
                found: bytes.iter().take(MAGIC.len()).copied().collect(),
            });
        }

        let mut r = WireReader::new(&bytes[MAGIC.len()..]);

        let envelope = Self {
            version: r.read_u32("version")?,
            public_key: r.read_string("public_key")?,
            namespace: r.read_string("namespace")?,
            reserved: r.read_string("reserved")?,
            hash_algorithm: r.read_string("hash_algorithm")?,
            signature: r.read_string("signature")?,
        };

        debug!(
            version = envelope.version,
            public_key_len = envelope.public_key.len(),
            signature_len = envelope.signature.len(),
            trailing = r.remaining(),
            "decoded SSHSIG envelope"
        );

        Ok(envelope)
    }

    /// Encodes the envelope back to its wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FieldTooLong> {
        let mut w = WireWriter::new();

        w.put_raw(MAGIC).put_u32(self.version);
        w.put_string(self.public_key)?;
        w.put_string(self.namespace)?;
        w.put_string(self.reserved)?;
        w.put_string(self.hash_algorithm)?;
        w.put_string(self.signature)?;

        Ok(w.into_bytes())
    }
}
