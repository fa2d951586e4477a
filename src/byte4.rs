//! Four signed 8-bit components packed into a `u32`.
//!
//! Layout: `x` in bits 0-7, `y` in bits 8-15, `z` in bits 16-23, `w` in
//! bits 24-31.

use floatn::Float4;

use crate::quantize::{self, I8_MAX};

/// Four signed 8-bit integers.
///
/// Floats are clamped to `[-127, 127]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Byte4 {
    packed: u32,
}

impl Byte4 {
    #[inline(always)]
    pub const fn new(x: i8, y: i8, z: i8, w: i8) -> Byte4 {
        Byte4 {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> Byte4 {
        Byte4::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> Byte4 {
        let v = quantize::signed(v, I8_MAX);
        Byte4::new(
            v.get_0() as i8,
            v.get_1() as i8,
            v.get_2() as i8,
            v.get_3() as i8,
        )
    }

    #[inline]
    pub fn to_vector(&self) -> Float4 {
        Float4::new(
            f32::from(self.x()),
            f32::from(self.y()),
            f32::from(self.z()),
            f32::from(self.w()),
        )
    }

    #[inline(always)]
    pub const fn x(&self) -> i8 {
        self.packed as u8 as i8
    }

    #[inline(always)]
    pub const fn y(&self) -> i8 {
        (self.packed >> 8) as u8 as i8
    }

    #[inline(always)]
    pub const fn z(&self) -> i8 {
        (self.packed >> 16) as u8 as i8
    }

    #[inline(always)]
    pub const fn w(&self) -> i8 {
        (self.packed >> 24) as u8 as i8
    }
}

impl_packed_vector!(Byte4, u32, Float4);

/// Four signed 8-bit integers normalized to `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Byte4Normalized {
    packed: u32,
}

impl Byte4Normalized {
    #[inline(always)]
    pub const fn new(x: i8, y: i8, z: i8, w: i8) -> Byte4Normalized {
        Byte4Normalized {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> Byte4Normalized {
        Byte4Normalized::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> Byte4Normalized {
        let v = quantize::snorm(v, I8_MAX);
        Byte4Normalized::new(
            v.get_0() as i8,
            v.get_1() as i8,
            v.get_2() as i8,
            v.get_3() as i8,
        )
    }

    /// Decodes to `[-1, 1]`.  A component of -128 decodes to -1.0.
    #[inline]
    pub fn to_vector(&self) -> Float4 {
        let v = Float4::new(
            f32::from(self.x()),
            f32::from(self.y()),
            f32::from(self.z()),
            f32::from(self.w()),
        );
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

    #[inline(always)]
    pub const fn z(&self) -> i8 {
        (self.packed >> 16) as u8 as i8
    }

    #[inline(always)]
    pub const fn w(&self) -> i8 {
        (self.packed >> 24) as u8 as i8
    }
}

impl_packed_vector!(Byte4Normalized, u32, Float4);

#[inline(always)]
const fn pack(x: i8, y: i8, z: i8, w: i8) -> u32 {
    (x as u8 as u32) | ((y as u8 as u32) << 8) | ((z as u8 as u32) << 16) | ((w as u8 as u32) << 24)
}
