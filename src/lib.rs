//! Packed vector formats: small tuples of floats stored compactly in a
//! single 16, 32 or 64-bit integer.
//!
//! Each format pairs a bit layout with an encoding policy (clamp, scale,
//! round) and a decoding formula.  The families are:
//!
//! - Raw integers (`Byte2`, `UShort4`, ...): floats are clamped to the
//!   integer range and rounded to nearest even.  Decoding is exact.
//! - Signed normalized (`Byte4Normalized`, ...): `[-1, 1]` maps onto the
//!   symmetric integer range.
//! - Unsigned normalized (`UByte4Normalized`, ...): `[0, 1]` maps onto the
//!   full unsigned range, rounding half-up.
//! - Half floats (`Half2`, `Half4`): IEEE 754 binary16 per component.
//!
//! Component 0 always occupies the lowest bits of the packed integer.
//!
//! ```
//! use packed_vector::{Byte4, Float4};
//!
//! let v = Byte4::from_floats(125.0, -125.0, 100.0, -5.0);
//! assert_eq!(v.packed_value(), 4217668477);
//! assert_eq!(v.to_string(), "FB64837D");
//! assert_eq!(v.to_vector(), Float4::new(125.0, -125.0, 100.0, -5.0));
//! ```

#[macro_use]
mod packed;

mod byte2;
mod byte4;
mod error;
pub mod format;
mod half2;
mod half4;
mod quantize;
mod short2;
mod short4;
mod ubyte2;
mod ubyte4;
mod ushort2;
mod ushort4;

pub use floatn::{Float2, Float4, FloatN};

pub use crate::{
    byte2::{Byte2, Byte2Normalized},
    byte4::{Byte4, Byte4Normalized},
    error::{Error, Result},
    format::Format,
    half2::Half2,
    half4::Half4,
    packed::PackedVector,
    short2::{Short2, Short2Normalized},
    short4::{Short4, Short4Normalized},
    ubyte2::{UByte2, UByte2Normalized},
    ubyte4::{UByte4, UByte4Normalized},
    ushort2::{UShort2, UShort2Normalized},
    ushort4::{UShort4, UShort4Normalized},
};
