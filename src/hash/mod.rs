//! Hash algorithms known to the verifier.
//!
//! - `digest_info`: the per-algorithm DigestInfo prefixes used by PKCS#1
//!   v1.5, keyed by [`HashAlgorithm`]
//! - `signed_data`: the SSHSIG blob a signer actually hashes, and its digest

pub mod digest_info;
pub mod signed_data;

pub use digest_info::HashAlgorithm;
pub use signed_data::{SignedDataError, signed_data, signed_data_digest};
