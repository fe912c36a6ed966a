//! Error types for SSHSIG decoding and verification.

use thiserror::Error;

use crate::{
    encoding::FieldTooLong,
    hash::SignedDataError,
    primitives::WidthError,
    signatures::rsa::{ModExpError, PaddingError},
};

/// Errors raised while decoding an envelope or one of its nested blobs.
///
/// All of them mean the input is malformed; none is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer does not start with the `SSHSIG` magic tag.
    #[error("malformed envelope: bad magic {found:02x?}")]
    MalformedEnvelope { found: Vec<u8> },

    /// A field runs past the end of the buffer.
    #[error("truncated field {field}: needs {declared} bytes, {remaining} remaining")]
    TruncatedField {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },

    /// The key type is not in the accepted list.
    #[error("unsupported key type {0:?}")]
    UnsupportedKeyType(String),

    /// The modulus field is empty or encodes zero.
    #[error("invalid modulus")]
    InvalidModulus,
}

/// Errors raised while encoding a public-key blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    FieldTooLong(#[from] FieldTooLong),

    /// The modulus does not fit its declared `modulus_len`.
    #[error("modulus does not fit its declared length: {0}")]
    ModulusWidth(#[from] WidthError),
}

/// Any failure of [`verify`](super::verify::verify) or [`verify_with`](super::verify_with).
///
/// A recomputation mismatch is not an error: it is reported through
/// [`VerificationResult::matches`](super::VerificationResult::matches).
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    ModExp(#[from] ModExpError),

    #[error("PKCS#1 padding: {0}")]
    Padding(#[from] PaddingError),

    #[error(transparent)]
    SignedData(#[from] SignedDataError),
}

impl VerifyError {
    /// True for errors caused by the structure of the input bytes, as
    /// opposed to the arithmetic or padding of the signature itself.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, VerifyError::Decode(_))
    }
}
