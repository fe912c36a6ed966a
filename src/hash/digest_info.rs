//! DigestInfo lookup table
//!
//! PKCS#1 v1.5 signatures do not carry a bare digest: the digest is
//! preceded by a DER-encoded `DigestInfo` header naming the hash
//! algorithm (RFC 8017 §9.2, note 1). For a given algorithm with no
//! parameters that header is a constant, so it is stored here as a fixed
//! byte string and used purely as a search pattern.
//!
//! Adding an algorithm means adding a variant and its three table rows;
//! the padding validator does not change.

use sha2::{Digest, Sha256, Sha512};

/// `SEQUENCE { SEQUENCE { OID sha256, NULL }, OCTET STRING (32) }`
const SHA256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];

/// `SEQUENCE { SEQUENCE { OID sha512, NULL }, OCTET STRING (64) }`
const SHA512_DIGEST_INFO: [u8; 19] = [
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03, 0x05,
    0x00, 0x04, 0x40,
];

/// Hash algorithms with a known DigestInfo prefix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    #[default]
    Sha512,
}

impl HashAlgorithm {
    /// Every algorithm in the table.
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha256, HashAlgorithm::Sha512];

    /// DER `DigestInfo` prefix that precedes the raw digest.
    pub const fn digest_info(self) -> &'static [u8] {
        match self {
            HashAlgorithm::Sha256 => &SHA256_DIGEST_INFO,
            HashAlgorithm::Sha512 => &SHA512_DIGEST_INFO,
        }
    }

    /// Digest size in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Name used in the `hash_algorithm` field of an SSHSIG envelope.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Reverse of [`name`](Self::name). Matching is exact.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().as_bytes() == name)
    }

    /// Hashes `data` with this algorithm.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}
