//! SSHSIG signed data
//!
//! An SSH signer never signs the message directly. It first hashes the
//! message with the envelope's hash algorithm, then signs this blob:
//!
//! ```text
//! byte[6]  "SSHSIG"
//! string   namespace
//! string   reserved
//! string   hash_algorithm
//! string   H(message)
//! ```
//!
//! The PKCS#1 block of a genuine RSA signature therefore carries the
//! digest of this blob, not of the message. [`signed_data_digest`]
//! computes it so the caller can compare it against the extracted digest.

use thiserror::Error;

use crate::{
    encoding::{FieldTooLong, WireWriter},
    hash::HashAlgorithm,
    signatures::sshsig::{MAGIC, SignatureEnvelope},
};

#[derive(Debug, Error)]
pub enum SignedDataError {
    /// The envelope names a hash algorithm outside the table.
    #[error("unsupported hash algorithm {0:?}")]
    UnsupportedHashAlgorithm(String),

    #[error(transparent)]
    FieldTooLong(#[from] FieldTooLong),
}

/// Builds the blob an SSH signer hashes and signs.
pub fn signed_data(
    envelope: &SignatureEnvelope<'_>,
    message: &[u8],
) -> Result<Vec<u8>, SignedDataError> {
    let inner = HashAlgorithm::from_name(envelope.hash_algorithm).ok_or_else(|| {
        SignedDataError::UnsupportedHashAlgorithm(
            String::from_utf8_lossy(envelope.hash_algorithm).into_owned(),
        )
    })?;

    let mut w = WireWriter::new();
    w.put_raw(MAGIC);
    w.put_string(envelope.namespace)?;
    w.put_string(envelope.reserved)?;
    w.put_string(envelope.hash_algorithm)?;
    w.put_string(&inner.digest(message))?;

    Ok(w.into_bytes())
}

/// Digest of the signed data under `outer`, the hash the signature
/// algorithm applies (SHA-512 for `rsa-sha2-512`).
pub fn signed_data_digest(
    envelope: &SignatureEnvelope<'_>,
    message: &[u8],
    outer: HashAlgorithm,
) -> Result<Vec<u8>, SignedDataError> {
    Ok(outer.digest(&signed_data(envelope, message)?))
}
