//! Text armor for SSH signatures
//!
//! Signatures usually travel as text: base64 wrapped at 70 columns between
//! `-----BEGIN SSH SIGNATURE-----` and `-----END SSH SIGNATURE-----`, or
//! pasted after a `Signature:` label with the padding lost on the way.
//!
//! [`decode_armored`] accepts all of these shapes and returns the raw
//! envelope bytes expected by
//! [`SignatureEnvelope::decode`](crate::signatures::sshsig::SignatureEnvelope::decode).

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

const BEGIN_MARKER: &str = "-----BEGIN SSH SIGNATURE-----";
const END_MARKER: &str = "-----END SSH SIGNATURE-----";
const LABEL: &str = "Signature:";

/// Errors produced while turning armored text into bytes.
#[derive(Debug, Error)]
pub enum ArmorError {
    /// Nothing remained after removing markers, labels and whitespace.
    #[error("no base64 payload found")]
    Empty,

    /// The cleaned payload is not valid standard base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Strips armor, whitespace and restores `=` padding.
///
/// Returns the cleaned base64 text without decoding it.
pub fn clean_base64(text: &str) -> String {
    let body = match text.find(LABEL) {
        Some(at) => &text[at + LABEL.len()..],
        None => text,
    };

    let mut cleaned: String = body
        .replace(BEGIN_MARKER, "")
        .replace(END_MARKER, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let missing = (4 - cleaned.len() % 4) % 4;
    cleaned.extend(std::iter::repeat_n('=', missing));

    cleaned
}

/// Decodes armored SSHSIG text into the raw envelope bytes.
pub fn decode_armored(text: &str) -> Result<Vec<u8>, ArmorError> {
    let cleaned = clean_base64(text);

    if cleaned.is_empty() {
        return Err(ArmorError::Empty);
    }

    Ok(STANDARD.decode(cleaned)?)
}
