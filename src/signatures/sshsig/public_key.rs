//! RSA public-key blob
//!
//! ```text
//! string   key_type      "ssh-rsa"
//! mpint    e
//! mpint    n
//! ```
//!
//! `mpint` values are big-endian two's complement; a positive value whose
//! top bit is set carries an extra leading `0x00`. Since both values are
//! positive, they are read here as unsigned magnitudes, which the leading
//! zero does not change.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::{
    encoding::{WireReader, WireWriter},
    primitives::to_fixed_be,
};

use super::{DecodeError, EncodeError};

/// Key type of RSA keys in SSH public-key blobs.
pub const SSH_RSA: &str = "ssh-rsa";

/// An RSA public key decoded from an SSH public-key blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Raw key-type string. Checked only by [`ensure_key_type`](Self::ensure_key_type).
    pub key_type: String,
    pub exponent: BigUint,
    pub modulus: BigUint,
    /// Declared byte length of the modulus field, including any leading
    /// zero bytes. Every signature and block derived from this key is
    /// rendered at this width.
    pub modulus_len: usize,
}

impl RsaPublicKey {
    /// Decodes the key-type string, exponent and modulus.
    ///
    /// The key type is not checked here.
    ///
    /// # Errors
    /// - [`DecodeError::TruncatedField`] if a field runs past the end
    /// - [`DecodeError::InvalidModulus`] if the modulus is zero
    pub fn from_blob(blob: &[u8]) -> Result<Self, DecodeError> {
        let mut r = WireReader::new(blob);

        let key_type = String::from_utf8_lossy(r.read_string("key_type")?).into_owned();
        let exponent = BigUint::from_bytes_be(r.read_string("exponent")?);
        let modulus_bytes = r.read_string("modulus")?;
        let modulus = BigUint::from_bytes_be(modulus_bytes);

        if modulus.is_zero() {
            return Err(DecodeError::InvalidModulus);
        }

        debug!(
            key_type = %key_type,
            modulus_bits = modulus.bits(),
            modulus_len = modulus_bytes.len(),
            "decoded public key"
        );

        Ok(Self {
            key_type,
            exponent,
            modulus,
            modulus_len: modulus_bytes.len(),
        })
    }

    /// Fails unless the key type is one of `accepted`.
    pub fn ensure_key_type<S: AsRef<str>>(&self, accepted: &[S]) -> Result<(), DecodeError> {
        if accepted.iter().any(|t| t.as_ref() == self.key_type) {
            Ok(())
        } else {
            Err(DecodeError::UnsupportedKeyType(self.key_type.clone()))
        }
    }

    /// Encodes the key as an SSH public-key blob.
    ///
    /// The exponent is written minimally and the modulus at
    /// `modulus_len` bytes, so a decoded key re-encodes to its source blob
    /// whenever that blob used the same conventions.
    ///
    /// # Errors
    /// [`EncodeError::ModulusWidth`] if the modulus has more significant
    /// bytes than `modulus_len`.
    pub fn to_blob(&self) -> Result<Vec<u8>, EncodeError> {
        let exponent = if self.exponent.is_zero() {
            Vec::new()
        } else {
            self.exponent.to_bytes_be()
        };
        let modulus = to_fixed_be(&self.modulus, self.modulus_len)?;

        let mut w = WireWriter::new();
        w.put_string(self.key_type.as_bytes())?;
        w.put_string(&exponent)?;
        w.put_string(&modulus)?;

        Ok(w.into_bytes())
    }
}
