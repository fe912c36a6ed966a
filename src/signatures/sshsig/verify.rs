//! SSHSIG verification oracle
//!
//! Runs the full decoding chain on an envelope and opens its signature:
//!
//! 1. decode the envelope
//! 2. decode the public key and apply the key-type policy
//! 3. decode the signature blob
//! 4. compute the padded block `s^e mod n` with the square-and-multiply
//!    engine
//! 5. validate the PKCS#1 v1.5 structure and extract the digest
//!
//! The block is then recomputed through `BigUint::modpow`, an independent
//! arithmetic path, and compared byte for byte. Disagreement is reported in
//! [`VerificationResult::matches`] and never raised as an error, so that a
//! caller can tell malformed input (an `Err`) from a well-formed envelope
//! whose arithmetic does not check out (`matches == false`).

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::{
    hash::signed_data_digest,
    primitives::{from_be_padded, to_fixed_be},
    signatures::rsa::{ModExpError, extract_digest_with, modexp_fixed},
};

use super::{RawSignature, RsaPublicKey, SignatureEnvelope, VerifyError, VerifyOptions};

/// Outcome of opening an SSHSIG signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub public_key: RsaPublicKey,
    pub signature: RawSignature,
    /// Signature magnitude as an integer.
    pub signature_value: BigUint,
    /// Padded block the digest was extracted from.
    pub block: Vec<u8>,
    /// Block recomputed through the independent path.
    pub recomputed: Vec<u8>,
    /// `block == recomputed`.
    pub matches: bool,
    /// Digest extracted from `block`.
    pub digest: Vec<u8>,
}

impl VerificationResult {
    /// Compares the extracted digest with `expected` in constant time.
    ///
    /// Only a consistent result can bind; a mismatching recomputation
    /// always returns `false`.
    pub fn binds(&self, expected: &[u8]) -> bool {
        self.matches && consttime_equal(&self.digest, expected)
    }
}

/// Result of [`verify_message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVerification {
    pub result: VerificationResult,
    /// Digest of the SSHSIG signed data built from the message.
    pub expected_digest: Vec<u8>,
    /// Whether the signature carries `expected_digest`.
    pub bound: bool,
}

/// Opens the signature of an envelope with the default options.
pub fn verify(bytes: &[u8]) -> Result<VerificationResult, VerifyError> {
    verify_with(bytes, &VerifyOptions::default())
}

/// Opens the signature of an envelope.
///
/// # Errors
/// Any decoding, arithmetic or padding error, surfaced unchanged. No
/// partial result is returned.
pub fn verify_with(
    bytes: &[u8],
    options: &VerifyOptions,
) -> Result<VerificationResult, VerifyError> {
    let envelope = SignatureEnvelope::decode(bytes)?;

    verify_envelope(&envelope, options)
}

/// Opens the signature of an already decoded envelope.
pub fn verify_envelope(
    envelope: &SignatureEnvelope<'_>,
    options: &VerifyOptions,
) -> Result<VerificationResult, VerifyError> {
    let public_key = RsaPublicKey::from_blob(envelope.public_key)?;
    public_key.ensure_key_type(options.accepted_key_types.as_slice())?;

    let signature = RawSignature::from_blob(envelope.signature)?;
    let width = public_key.modulus_len;

    let block = modexp_fixed(
        &signature.magnitude,
        &public_key.exponent,
        &public_key.modulus,
        width,
    )?;
    let digest = extract_digest_with(&block, options.digest)?.to_vec();

    let signature_value = from_be_padded(&signature.magnitude, width).map_err(ModExpError::from)?;
    let recomputed = to_fixed_be(
        &signature_value.modpow(&public_key.exponent, &public_key.modulus),
        width,
    )
    .map_err(ModExpError::from)?;

    let matches = recomputed == block;
    if matches {
        debug!(width, digest_len = digest.len(), "signature opened");
    } else {
        warn!(width, "recomputed block disagrees with the extracted block");
    }

    Ok(VerificationResult {
        public_key,
        signature,
        signature_value,
        block,
        recomputed,
        matches,
        digest,
    })
}

/// Opens the signature and checks that it signs `message`.
///
/// The expected digest is that of the SSHSIG signed data built from the
/// envelope's namespace, reserved and hash fields and `message`. A digest
/// that differs is reported through [`MessageVerification::bound`], not as
/// an error.
pub fn verify_message(
    bytes: &[u8],
    message: &[u8],
    options: &VerifyOptions,
) -> Result<MessageVerification, VerifyError> {
    let envelope = SignatureEnvelope::decode(bytes)?;
    let result = verify_envelope(&envelope, options)?;
    let expected_digest = signed_data_digest(&envelope, message, options.digest)?;
    let bound = result.binds(&expected_digest);

    if !bound {
        warn!("signature does not carry the digest of the given message");
    }

    Ok(MessageVerification {
        result,
        expected_digest,
        bound,
    })
}

#[inline(never)]
fn consttime_equal(x: &[u8], y: &[u8]) -> bool {
    if x.len() != y.len() {
        return false;
    }

    let mut r: u8 = 0;
    for (a, b) in x.iter().zip(y) {
        r |= a ^ b;
    }
    r == 0
}
