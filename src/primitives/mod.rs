//! Primitive conversions
//!
//! Arbitrary-precision arithmetic is delegated to `num_bigint::BigUint`.
//! This module only defines how those integers map to and from the
//! fixed-width big-endian byte strings that RSA operates on.
//!
//! - `fixed_width`: left-padded rendering and width-checked parsing

mod fixed_width;

pub use fixed_width::{WidthError, from_be_padded, to_fixed_be};
