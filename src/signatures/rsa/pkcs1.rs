//! EMSA-PKCS1-v1_5 block validation
//!
//! Opening an RSA signature yields a block of the modulus width:
//!
//! ```text
//! 0x00 0x01 0xFF .. 0xFF 0x00 DigestInfo digest
//! ```
//!
//! [`extract_digest_with`] walks that structure and returns the digest
//! that follows the DigestInfo header of the requested algorithm.
//!
//! The walk is lenient in the same places the reference verifier is:
//! - any number of leading `0x00` bytes is accepted before `0x01`
//! - the `0xFF` run may be empty
//! - the DigestInfo header is searched for after the separator rather
//!   than required immediately after it
//!
//! It is strict everywhere else: every input either yields a digest of
//! exactly `digest_len` bytes or one of the four [`PaddingError`]
//! variants.

use thiserror::Error;

use crate::hash::HashAlgorithm;

const BLOCK_TYPE: u8 = 0x01;
const FILL: u8 = 0xFF;
const SEPARATOR: u8 = 0x00;

/// Structural failures of a PKCS#1 v1.5 signature block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// The first non-zero byte is not the block type `0x01`.
    #[error("missing 0x01")]
    MissingBlockType,

    /// The `0xFF` run is not terminated by a `0x00` byte.
    #[error("missing 0x00 separator")]
    MissingSeparator,

    /// The DigestInfo header does not occur after the separator.
    #[error("DigestInfo not found")]
    DigestInfoNotFound,

    /// Fewer bytes than the digest size follow the DigestInfo header.
    #[error("truncated digest: expected {expected} bytes, found {available}")]
    TruncatedDigest { expected: usize, available: usize },
}

/// Extracts the SHA-512 digest from a PKCS#1 v1.5 block.
pub fn extract_digest(block: &[u8]) -> Result<&[u8], PaddingError> {
    extract_digest_with(block, HashAlgorithm::Sha512)
}

/// Extracts the digest of `algorithm` from a PKCS#1 v1.5 block.
///
/// The returned slice borrows from `block` and is exactly
/// `algorithm.digest_len()` bytes long. Bytes after the digest are
/// ignored.
pub fn extract_digest_with(
    block: &[u8],
    algorithm: HashAlgorithm,
) -> Result<&[u8], PaddingError> {
    let mut i = skip_while(block, 0, 0x00);

    if block.get(i) != Some(&BLOCK_TYPE) {
        return Err(PaddingError::MissingBlockType);
    }

    i = skip_while(block, i + 1, FILL);

    if block.get(i) != Some(&SEPARATOR) {
        return Err(PaddingError::MissingSeparator);
    }

    let body = &block[i + 1..];
    let marker = algorithm.digest_info();

    let at = find(body, marker).ok_or(PaddingError::DigestInfoNotFound)?;
    let digest = &body[at + marker.len()..];

    let expected = algorithm.digest_len();
    if digest.len() < expected {
        return Err(PaddingError::TruncatedDigest {
            expected,
            available: digest.len(),
        });
    }

    Ok(&digest[..expected])
}

/// Index of the first byte at or after `from` that is not `value`.
fn skip_while(block: &[u8], from: usize, value: u8) -> usize {
    from + block[from..].iter().take_while(|&&b| b == value).count()
}

/// First occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
