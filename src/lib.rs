//! Decoding and verification of RSA signatures in SSHSIG envelopes
//!
//! This crate opens SSH detached signatures (`ssh-keygen -Y sign`) made
//! with RSA keys: it decodes the envelope and its nested blobs, computes
//! `s^e mod n`, validates the PKCS#1 v1.5 structure of the result and
//! extracts the embedded digest.
//!
//! The focus is on **exact, auditable parsing**: every length prefix is
//! bounds-checked, every conversion between integers and bytes is
//! width-checked, and every failure has a named error.
//!
//! # Module overview
//!
//! - `encoding`  
//!   SSH wire-format reader and writer, and the base64 text armor that
//!   signatures travel in.
//!
//! - `primitives`  
//!   Fixed-width big-endian conversions for `BigUint`.
//!
//! - `hash`  
//!   The DigestInfo table keyed by hash algorithm, and the SSHSIG
//!   signed-data construction used to bind a signature to a message.
//!
//! - `signatures`  
//!   `rsa`: the modular exponentiation engine and the PKCS#1 v1.5
//!   validator.  
//!   `sshsig`: envelope, public-key and signature decoders, and the
//!   verification oracle that composes everything.
//!
//! # Example
//!
//! ```no_run
//! use sshsig_rsa::{encoding::decode_armored, signatures::sshsig::verify};
//!
//! let text = std::fs::read_to_string("file.sig")?;
//! let result = verify(&decode_armored(&text)?)?;
//!
//! assert!(result.matches);
//! println!("digest: {:02x?}", result.digest);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Non-goals
//!
//! - trust decisions (allowed signers, namespaces, certificates)
//! - RSA key generation or signing
//! - general ASN.1 parsing

pub mod encoding;
pub mod hash;
pub mod primitives;
pub mod signatures;
