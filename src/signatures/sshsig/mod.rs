//! SSHSIG signatures carrying RSA keys.
//!
//! SSHSIG is the detached-signature container written by
//! `ssh-keygen -Y sign` (OpenSSH `PROTOCOL.sshsig`). This module decodes
//! it and opens RSA signatures inside it.
//!
//! - [`envelope`]: the outer container, fields kept as raw bytes
//! - [`public_key`]: the nested `ssh-rsa` public-key blob
//! - [`signature`]: the nested signature blob, including the redundant
//!   length-prefix heuristic
//! - [`options`]: caller policy (accepted key types, expected digest)
//! - [`verify`]: the oracle composing all of the above
//!
//! ## Scope
//!
//! Opening a signature answers "is this a well-formed PKCS#1 block, and
//! which digest does it carry?". Deciding whether the key is trusted or
//! the namespace is acceptable is left to the caller.

pub mod envelope;
pub mod error;
pub mod options;
pub mod public_key;
pub mod signature;
pub mod verify;

pub use envelope::{MAGIC, SignatureEnvelope};
pub use error::{DecodeError, EncodeError, VerifyError};
pub use options::VerifyOptions;
pub use public_key::{RsaPublicKey, SSH_RSA};
pub use signature::{RawSignature, peel_length_prefix};
pub use verify::{
    MessageVerification, VerificationResult, verify, verify_envelope, verify_message, verify_with,
};
