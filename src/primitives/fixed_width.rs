//! Fixed-width big-endian conversions for `BigUint`
//!
//! RSA arithmetic happens on unbounded integers, but everything around it
//! is byte-oriented and fixed-width: a signature is as wide as the
//! modulus, and so is the padded block it opens to.
//!
//! These helpers are the only place where an integer crosses that
//! boundary. Both directions refuse to silently drop significant bytes.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// A value did not fit in the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value needs {needed} bytes but the width is {width}")]
pub struct WidthError {
    /// Significant bytes of the value.
    pub needed: usize,
    /// Width that was requested.
    pub width: usize,
}

/// Renders `value` as exactly `width` big-endian bytes.
///
/// The value is left-padded with zero bytes. Zero renders as `width`
/// zero bytes.
///
/// # Errors
/// Returns [`WidthError`] if the value has more than `width` significant
/// bytes.
pub fn to_fixed_be(value: &BigUint, width: usize) -> Result<Vec<u8>, WidthError> {
    // `to_bytes_be` renders zero as a single 0x00 byte
    let bytes = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };

    if bytes.len() > width {
        return Err(WidthError {
            needed: bytes.len(),
            width,
        });
    }

    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);

    Ok(out)
}

/// Interprets `bytes` as a big-endian magnitude no wider than `width`.
///
/// Leading zero bytes are not significant and may push the raw slice past
/// `width`; only the remaining magnitude is checked. This is the
/// "left-pad to the modulus width" step applied to a signature before
/// exponentiation.
///
/// # Errors
/// Returns [`WidthError`] if the significant magnitude is wider than
/// `width`.
pub fn from_be_padded(bytes: &[u8], width: usize) -> Result<BigUint, WidthError> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];

    if significant.len() > width {
        return Err(WidthError {
            needed: significant.len(),
            width,
        });
    }

    Ok(BigUint::from_bytes_be(significant))
}
