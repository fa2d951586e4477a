//! Two unsigned 8-bit components packed into a `u16`.
//!
//! Layout: `x` in bits 0-7, `y` in bits 8-15.

use floatn::Float2;

use crate::quantize::{self, U8_MAX};

/// Two unsigned 8-bit integers.
///
/// Floats are clamped to `[0, 255]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UByte2 {
    packed: u16,
}

impl UByte2 {
    #[inline(always)]
    pub const fn new(x: u8, y: u8) -> UByte2 {
        UByte2 {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> UByte2 {
        UByte2::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> UByte2 {
        let v = quantize::unsigned(v, U8_MAX);
        UByte2::new(v.get_0() as u8, v.get_1() as u8)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        Float2::new(f32::from(self.x()), f32::from(self.y()))
    }

    #[inline(always)]
    pub const fn x(&self) -> u8 {
        self.packed as u8
    }

    #[inline(always)]
    pub const fn y(&self) -> u8 {
        (self.packed >> 8) as u8
    }
}

impl_packed_vector!(UByte2, u16, Float2);

/// Two unsigned 8-bit integers normalized to `[0, 1]`.
///
/// Encoding rounds half-up (scale, add 0.5, truncate).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UByte2Normalized {
    packed: u16,
}

impl UByte2Normalized {
    #[inline(always)]
    pub const fn new(x: u8, y: u8) -> UByte2Normalized {
        UByte2Normalized {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> UByte2Normalized {
        UByte2Normalized::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> UByte2Normalized {
        let v = quantize::unorm(v, U8_MAX);
        UByte2Normalized::new(v.get_0() as u8, v.get_1() as u8)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        let v = Float2::new(f32::from(self.x()), f32::from(self.y()));
        quantize::from_unorm(v, U8_MAX)
    }

    #[inline(always)]
    pub const fn x(&self) -> u8 {
        self.packed as u8
    }

    #[inline(always)]
    pub const fn y(&self) -> u8 {
        (self.packed >> 8) as u8
    }
}

impl_packed_vector!(UByte2Normalized, u16, Float2);

#[inline(always)]
const fn pack(x: u8, y: u8) -> u16 {
    (x as u16) | ((y as u16) << 8)
}
