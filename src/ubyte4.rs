//! Four unsigned 8-bit components packed into a `u32`.
//!
//! Layout: `x` in bits 0-7, `y` in bits 8-15, `z` in bits 16-23, `w` in
//! bits 24-31.  `UByte4Normalized` is the usual 8-bit-per-channel RGBA
//! color layout.

use floatn::Float4;

use crate::quantize::{self, U8_MAX};

/// Four unsigned 8-bit integers.
///
/// Floats are clamped to `[0, 255]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UByte4 {
    packed: u32,
}

impl UByte4 {
    #[inline(always)]
    pub const fn new(x: u8, y: u8, z: u8, w: u8) -> UByte4 {
        UByte4 {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> UByte4 {
        UByte4::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> UByte4 {
        let v = quantize::unsigned(v, U8_MAX);
        UByte4::new(
            v.get_0() as u8,
            v.get_1() as u8,
            v.get_2() as u8,
            v.get_3() as u8,
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
    pub const fn x(&self) -> u8 {
        self.packed as u8
    }

    #[inline(always)]
    pub const fn y(&self) -> u8 {
        (self.packed >> 8) as u8
    }

    #[inline(always)]
    pub const fn z(&self) -> u8 {
        (self.packed >> 16) as u8
    }

    #[inline(always)]
    pub const fn w(&self) -> u8 {
        (self.packed >> 24) as u8
    }
}

impl_packed_vector!(UByte4, u32, Float4);

/// Four unsigned 8-bit integers normalized to `[0, 1]`.
///
/// Encoding rounds half-up (scale, add 0.5, truncate).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UByte4Normalized {
    packed: u32,
}

impl UByte4Normalized {
    #[inline(always)]
    pub const fn new(x: u8, y: u8, z: u8, w: u8) -> UByte4Normalized {
        UByte4Normalized {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> UByte4Normalized {
        UByte4Normalized::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> UByte4Normalized {
        let v = quantize::unorm(v, U8_MAX);
        UByte4Normalized::new(
            v.get_0() as u8,
            v.get_1() as u8,
            v.get_2() as u8,
            v.get_3() as u8,
        )
    }

    #[inline]
    pub fn to_vector(&self) -> Float4 {
        let v = Float4::new(
            f32::from(self.x()),
            f32::from(self.y()),
            f32::from(self.z()),
            f32::from(self.w()),
        );
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

    #[inline(always)]
    pub const fn z(&self) -> u8 {
        (self.packed >> 16) as u8
    }

    #[inline(always)]
    pub const fn w(&self) -> u8 {
        (self.packed >> 24) as u8
    }
}

impl_packed_vector!(UByte4Normalized, u32, Float4);

#[inline(always)]
const fn pack(x: u8, y: u8, z: u8, w: u8) -> u32 {
    (x as u32) | ((y as u32) << 8) | ((z as u32) << 16) | ((w as u32) << 24)
}
