//! Verification options.

use crate::hash::HashAlgorithm;

use super::public_key::SSH_RSA;

/// Caller policy applied by [`verify_with`](super::verify_with).
///
/// The defaults accept `ssh-rsa` keys and extract a SHA-512 digest, which
/// matches `rsa-sha2-512` signatures as produced by `ssh-keygen -Y sign`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Key-type strings accepted in the public-key blob.
    pub accepted_key_types: Vec<String>,
    /// Hash whose DigestInfo header is expected in the padded block.
    pub digest: HashAlgorithm,
}

impl VerifyOptions {
    /// Replaces the accepted key types.
    pub fn with_key_types<I, S>(mut self, key_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_key_types = key_types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the expected digest algorithm.
    pub fn with_digest(mut self, digest: HashAlgorithm) -> Self {
        self.digest = digest;
        self
    }
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            accepted_key_types: vec![SSH_RSA.to_owned()],
            digest: HashAlgorithm::Sha512,
        }
    }
}
