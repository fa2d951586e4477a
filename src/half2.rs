//! Two IEEE 754 half-precision floats packed into a `u32`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31.

use floatn::Float2;
use half::f16;

/// Two 16-bit floats.
///
/// Encoding narrows each component to the nearest representable half
/// (ties to even).  There is no clamping: values beyond the half range
/// become infinity, and NaN stays NaN.  Decoding is exact.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Half2 {
    packed: u32,
}

impl Half2 {
    #[inline(always)]
    pub const fn new(x: f16, y: f16) -> Half2 {
        Half2 {
            packed: (x.to_bits() as u32) | ((y.to_bits() as u32) << 16),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> Half2 {
        Half2::new(f16::from_f32(x), f16::from_f32(y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> Half2 {
        Half2::from_floats(v.get_0(), v.get_1())
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        Float2::new(self.x().to_f32(), self.y().to_f32())
    }

    #[inline(always)]
    pub const fn x(&self) -> f16 {
        f16::from_bits(self.packed as u16)
    }

    #[inline(always)]
    pub const fn y(&self) -> f16 {
        f16::from_bits((self.packed >> 16) as u16)
    }
}

impl_packed_vector!(Half2, u32, Float2);
