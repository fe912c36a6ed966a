//! RSA public-key operations.
//!
//! Only the public half of RSA is implemented: opening a signature with
//! the public exponent and checking the PKCS#1 v1.5 structure of the
//! result. Key generation and private-key operations are out of scope.
//!
//! - [`modexp`]  
//!   `s^e mod n` by square-and-multiply, plus the fixed-width wrapper that
//!   turns signature bytes into a padded message block.
//!
//! - [`pkcs1`]  
//!   Structural validation of an EMSA-PKCS1-v1_5 block and extraction of
//!   the embedded digest, driven by the DigestInfo table in
//!   [`crate::hash::digest_info`].
//!
//! ## Side channels
//!
//! Neither module runs in constant time. They only ever process public
//! data (a public key and a published signature), which is the setting
//! they are written for.

pub mod modexp;
pub mod pkcs1;

pub use modexp::{ModExpError, modexp, modexp_fixed};
pub use pkcs1::{PaddingError, extract_digest, extract_digest_with};
