//! Modular exponentiation engine
//!
//! Computes `base^exponent mod modulus` by left-to-right binary
//! exponentiation: for each exponent bit, from the most significant down,
//! square the accumulator, and multiply by the base when the bit is set.
//! Every intermediate is reduced modulo `modulus`, so operands never grow
//! past twice the modulus width.
//!
//! Cost is one modular squaring per exponent bit plus one modular
//! multiplication per set bit. For the usual `e = 65537` that is 17
//! squarings and 2 multiplications, regardless of key size.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::primitives::{WidthError, from_be_padded, to_fixed_be};

/// Errors produced by the exponentiation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModExpError {
    /// Reduction modulo zero is undefined.
    #[error("modulus is zero")]
    ZeroModulus,

    /// The signature, or the result, is wider than the requested width.
    #[error("operand does not fit the fixed width: {0}")]
    OperandTooWide(#[from] WidthError),
}

/// Computes `base^exponent mod modulus`.
///
/// `base` does not need to be reduced beforehand. A modulus of one
/// yields zero; `exponent = 0` yields one (reduced).
///
/// # Errors
/// Returns [`ModExpError::ZeroModulus`] if `modulus` is zero.
pub fn modexp(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, ModExpError> {
    if modulus.is_zero() {
        return Err(ModExpError::ZeroModulus);
    }

    let base = base % modulus;
    let mut acc = BigUint::one() % modulus;

    for i in (0..exponent.bits()).rev() {
        acc = (&acc * &acc) % modulus;

        if exponent.bit(i) {
            acc = (&acc * &base) % modulus;
        }
    }

    Ok(acc)
}

/// Opens a signature: `s^e mod n` rendered as exactly `width` bytes.
///
/// `signature` is interpreted as a big-endian magnitude, conceptually
/// left-padded with zero bytes to `width`. `width` is the byte length of
/// the modulus field and fixes the size of the returned block.
///
/// # Errors
/// - [`ModExpError::ZeroModulus`] if `modulus` is zero
/// - [`ModExpError::OperandTooWide`] if the signature, or the modulus
///   itself, has more significant bytes than `width`
pub fn modexp_fixed(
    signature: &[u8],
    exponent: &BigUint,
    modulus: &BigUint,
    width: usize,
) -> Result<Vec<u8>, ModExpError> {
    let s = from_be_padded(signature, width)?;
    let m = modexp(&s, exponent, modulus)?;

    Ok(to_fixed_be(&m, width)?)
}
