//! Two unsigned 16-bit components packed into a `u32`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31.

use floatn::Float2;

use crate::quantize::{self, U16_MAX};

/// Two unsigned 16-bit integers.
///
/// Floats are clamped to `[0, 65535]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UShort2 {
    packed: u32,
}

impl UShort2 {
    #[inline(always)]
    pub const fn new(x: u16, y: u16) -> UShort2 {
        UShort2 {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> UShort2 {
        UShort2::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> UShort2 {
        let v = quantize::unsigned(v, U16_MAX);
        UShort2::new(v.get_0() as u16, v.get_1() as u16)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        Float2::new(f32::from(self.x()), f32::from(self.y()))
    }

    #[inline(always)]
    pub const fn x(&self) -> u16 {
        self.packed as u16
    }

    #[inline(always)]
    pub const fn y(&self) -> u16 {
        (self.packed >> 16) as u16
    }
}

impl_packed_vector!(UShort2, u32, Float2);

/// Two unsigned 16-bit integers normalized to `[0, 1]`.
///
/// Encoding rounds half-up (scale, add 0.5, truncate).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UShort2Normalized {
    packed: u32,
}

impl UShort2Normalized {
    #[inline(always)]
    pub const fn new(x: u16, y: u16) -> UShort2Normalized {
        UShort2Normalized {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> UShort2Normalized {
        UShort2Normalized::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> UShort2Normalized {
        let v = quantize::unorm(v, U16_MAX);
        UShort2Normalized::new(v.get_0() as u16, v.get_1() as u16)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        let v = Float2::new(f32::from(self.x()), f32::from(self.y()));
        quantize::from_unorm(v, U16_MAX)
    }

    #[inline(always)]
    pub const fn x(&self) -> u16 {
        self.packed as u16
    }

    #[inline(always)]
    pub const fn y(&self) -> u16 {
        (self.packed >> 16) as u16
    }
}

impl_packed_vector!(UShort2Normalized, u32, Float2);

#[inline(always)]
const fn pack(x: u16, y: u16) -> u32 {
    (x as u32) | ((y as u32) << 16)
}
