//! Four signed 16-bit components packed into a `u64`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31, `z` in bits 32-47, `w` in
//! bits 48-63.

use floatn::Float4;

use crate::quantize::{self, I16_MAX};

/// Four signed 16-bit integers.
///
/// Floats are clamped to `[-32767, 32767]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Short4 {
    packed: u64,
}

impl Short4 {
    #[inline(always)]
    pub const fn new(x: i16, y: i16, z: i16, w: i16) -> Short4 {
        Short4 {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> Short4 {
        Short4::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> Short4 {
        let v = quantize::signed(v, I16_MAX);
        Short4::new(
            v.get_0() as i16,
            v.get_1() as i16,
            v.get_2() as i16,
            v.get_3() as i16,
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
    pub const fn x(&self) -> i16 {
        self.packed as u16 as i16
    }

    #[inline(always)]
    pub const fn y(&self) -> i16 {
        (self.packed >> 16) as u16 as i16
    }

    #[inline(always)]
    pub const fn z(&self) -> i16 {
        (self.packed >> 32) as u16 as i16
    }

    #[inline(always)]
    pub const fn w(&self) -> i16 {
        (self.packed >> 48) as u16 as i16
    }
}

impl_packed_vector!(Short4, u64, Float4);

/// Four signed 16-bit integers normalized to `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Short4Normalized {
    packed: u64,
}

impl Short4Normalized {
    #[inline(always)]
    pub const fn new(x: i16, y: i16, z: i16, w: i16) -> Short4Normalized {
        Short4Normalized {
            packed: pack(x, y, z, w),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> Short4Normalized {
        Short4Normalized::from_vector(Float4::new(x, y, z, w))
    }

    #[inline]
    pub fn from_vector(v: Float4) -> Short4Normalized {
        let v = quantize::snorm(v, I16_MAX);
        Short4Normalized::new(
            v.get_0() as i16,
            v.get_1() as i16,
            v.get_2() as i16,
            v.get_3() as i16,
        )
    }

    /// Decodes to `[-1, 1]`.  A component of -32768 decodes to -1.0.
    #[inline]
    pub fn to_vector(&self) -> Float4 {
        let v = Float4::new(
            f32::from(self.x()),
            f32::from(self.y()),
            f32::from(self.z()),
            f32::from(self.w()),
        );
        quantize::from_snorm(v, I16_MAX)
    }

    #[inline(always)]
    pub const fn x(&self) -> i16 {
        self.packed as u16 as i16
    }

    #[inline(always)]
    pub const fn y(&self) -> i16 {
        (self.packed >> 16) as u16 as i16
    }

    #[inline(always)]
    pub const fn z(&self) -> i16 {
        (self.packed >> 32) as u16 as i16
    }

    #[inline(always)]
    pub const fn w(&self) -> i16 {
        (self.packed >> 48) as u16 as i16
    }
}

impl_packed_vector!(Short4Normalized, u64, Float4);

#[inline(always)]
const fn pack(x: i16, y: i16, z: i16, w: i16) -> u64 {
    (x as u16 as u64)
        | ((y as u16 as u64) << 16)
        | ((z as u16 as u64) << 32)
        | ((w as u16 as u64) << 48)
}
