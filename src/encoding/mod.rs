//! Byte-level encodings used around SSH signatures.
//!
//! This module groups the non-cryptographic plumbing that turns text and
//! length-prefixed buffers into typed fields, and back:
//!
//! - [`reader`]  
//!   A borrowing cursor over the SSH wire format (`uint32` and `string`
//!   fields, RFC 4251 §5). Every decoder in the crate reads through it, so
//!   bounds checks live in exactly one place.
//!
//! - [`writer`]  
//!   The inverse of `reader`. Used by the encoders of envelopes and blobs.
//!
//! - [`armor`]  
//!   The text boundary: base64 text, possibly wrapped in PEM-style markers
//!   and whitespace, decoded into the raw envelope bytes.
//!
//! None of these modules interpret the bytes they carry.

pub mod armor;
pub mod reader;
pub mod writer;

pub use armor::{ArmorError, decode_armored};
pub use reader::WireReader;
pub use writer::{FieldTooLong, WireWriter};
