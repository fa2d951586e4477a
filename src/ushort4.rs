//! Four unsigned 16-bit components packed into a `u64`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31, `z` in bits 32-47, `w` in
//! bits 48-63.

use floatn::Float4;

use crate::quantize::{self, U16_MAX};

/// Four unsigned 16-bit integers.
///
/// Floats are clamped to `[0, 65535]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UShort4 {
    packed: u64,
}

impl UShort4 {
    #[inline(always)]
    pub const fn new(x: u16, y: u16, z: u16, w: u16) -> UShort4 {
        UShort4 {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> UShort4 {
        UShort4::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> UShort4 {
        let v = quantize::unsigned(v, U16_MAX);
        UShort4::new(
            v.get_0() as u16,
            v.get_1() as u16,
            v.get_2() as u16,
            v.get_3() as u16,
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
    pub const fn x(&self) -> u16 {
        self.packed as u16
    }

    #[inline(always)]
    pub const fn y(&self) -> u16 {
        (self.packed >> 16) as u16
    }

    #[inline(always)]
    pub const fn z(&self) -> u16 {
        (self.packed >> 32) as u16
    }

    #[inline(always)]
    pub const fn w(&self) -> u16 {
        (self.packed >> 48) as u16
    }
}

impl_packed_vector!(UShort4, u64, Float4);

/// Four unsigned 16-bit integers normalized to `[0, 1]`.
///
/// Encoding rounds half-up (scale, add 0.5, truncate).  Useful for 16-bit
/// per channel colors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UShort4Normalized {
    packed: u64,
}

impl UShort4Normalized {
    #[inline(always)]
    pub const fn new(x: u16, y: u16, z: u16, w: u16) -> UShort4Normalized {
        UShort4Normalized {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> UShort4Normalized {
        UShort4Normalized::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> UShort4Normalized {
        let v = quantize::unorm(v, U16_MAX);
        UShort4Normalized::new(
            v.get_0() as u16,
            v.get_1() as u16,
            v.get_2() as u16,
            v.get_3() as u16,
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

    #[inline(always)]
    pub const fn z(&self) -> u16 {
        (self.packed >> 32) as u16
    }

    #[inline(always)]
    pub const fn w(&self) -> u16 {
        (self.packed >> 48) as u16
    }
}

impl_packed_vector!(UShort4Normalized, u64, Float4);

#[inline(always)]
const fn pack(x: u16, y: u16, z: u16, w: u16) -> u64 {
    (x as u64) | ((y as u64) << 16) | ((z as u64) << 32) | ((w as u64) << 48)
}
