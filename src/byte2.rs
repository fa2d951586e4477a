//! Two signed 8-bit components packed into a `u16`.
//!
//! Layout: `x` in bits 0-7, `y` in bits 8-15.

use floatn::Float2;

use crate::quantize::{self, I8_MAX};

/// Two signed 8-bit integers.
///
/// Floats are clamped to `[-127, 127]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Byte2 {
    packed: u16,
}

impl Byte2 {
    #[inline(always)]
    pub const fn new(x: i8, y: i8) -> Byte2 {
        Byte2 {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> Byte2 {
        Byte2::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> Byte2 {
        let v = quantize::signed(v, I8_MAX);
        Byte2::new(v.get_0() as i8, v.get_1() as i8)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        Float2::new(f32::from(self.x()), f32::from(self.y()))
    }

    #[inline(always)]
    pub const fn x(&self) -> i8 {
        self.packed as u8 as i8
    }

    #[inline(always)]
    pub const fn y(&self) -> i8 {
        (self.packed >> 8) as u8 as i8
    }
}

impl_packed_vector!(Byte2, u16, Float2);

/// Two signed 8-bit integers normalized to `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Byte2Normalized {
    packed: u16,
}

impl Byte2Normalized {
    #[inline(always)]
    pub const fn new(x: i8, y: i8) -> Byte2Normalized {
        Byte2Normalized {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> Byte2Normalized {
        Byte2Normalized::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> Byte2Normalized {
        let v = quantize::snorm(v, I8_MAX);
        Byte2Normalized::new(v.get_0() as i8, v.get_1() as i8)
    }

    /// Decodes to `[-1, 1]`.  A component of -128 decodes to -1.0.
    #[inline]
    pub fn to_vector(&self) -> Float2 {
        let v = Float2::new(f32::from(self.x()), f32::from(self.y()));
        quantize::from_snorm(v, I8_MAX)
    }

    #[inline(always)]
    pub const fn x(&self) -> i8 {
        self.packed as u8 as i8
    }

    #[inline(always)]
    pub const fn y(&self) -> i8 {
        (self.packed >> 8) as u8 as i8
    }
}

impl_packed_vector!(Byte2Normalized, u16, Float2);

#[inline(always)]
const fn pack(x: i8, y: i8) -> u16 {
    (x as u8 as u16) | ((y as u8 as u16) << 8)
}
