//! Signature schemes.
//!
//! - `rsa`: the RSA public operation and PKCS#1 v1.5 block validation
//! - `sshsig`: the SSHSIG container and the verification oracle built on
//!   top of `rsa`

pub mod rsa;
pub mod sshsig;
