//! Two signed 16-bit components packed into a `u32`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31.

use floatn::Float2;

use crate::quantize::{self, I16_MAX};

/// Two signed 16-bit integers.
///
/// Floats are clamped to `[-32767, 32767]` and rounded to nearest even.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Short2 {
    packed: u32,
}

impl Short2 {
    #[inline(always)]
    pub const fn new(x: i16, y: i16) -> Short2 {
        Short2 {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> Short2 {
        Short2::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> Short2 {
        let v = quantize::signed(v, I16_MAX);
        Short2::new(v.get_0() as i16, v.get_1() as i16)
    }

    #[inline]
    pub fn to_vector(&self) -> Float2 {
        Float2::new(f32::from(self.x()), f32::from(self.y()))
    }

    #[inline(always)]
    pub const fn x(&self) -> i16 {
        self.packed as u16 as i16
    }

    #[inline(always)]
    pub const fn y(&self) -> i16 {
        (self.packed >> 16) as u16 as i16
    }
}

impl_packed_vector!(Short2, u32, Float2);

/// Two signed 16-bit integers normalized to `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Short2Normalized {
    packed: u32,
}

impl Short2Normalized {
    #[inline(always)]
    pub const fn new(x: i16, y: i16) -> Short2Normalized {
        Short2Normalized {
            packed: pack(x, y),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32) -> Short2Normalized {
        Short2Normalized::from_vector(Float2::new(x, y))
    }

    #[inline]
    pub fn from_vector(v: Float2) -> Short2Normalized {
        let v = quantize::snorm(v, I16_MAX);
        Short2Normalized::new(v.get_0() as i16, v.get_1() as i16)
    }

    /// Decodes to `[-1, 1]`.  A component of -32768 decodes to -1.0.
    #[inline]
    pub fn to_vector(&self) -> Float2 {
        let v = Float2::new(f32::from(self.x()), f32::from(self.y()));
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
}

impl_packed_vector!(Short2Normalized, u32, Float2);

#[inline(always)]
const fn pack(x: i16, y: i16) -> u32 {
    (x as u16 as u32) | ((y as u16 as u32) << 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let v = Short2::new(250, 450);

        assert_eq!(v.packed_value(), 29491450);
        assert_eq!(v.packed_value(), (450 << 16) | (250 & 0xFFFF));
        assert_eq!((v.x(), v.y()), (250, 450));
    }

    #[test]
    fn negative_components() {
        let v = Short2::new(-1, -32768);

        assert_eq!(v.packed_value(), 0x8000_FFFF);
        assert_eq!((v.x(), v.y()), (-1, -32768));
    }

    #[test]
    fn equality_is_bitwise() {
        assert_eq!(Short2::new(250, 450), Short2::from_packed(29491450));
        assert_eq!(Short2::from_floats(250.0, 450.0), Short2::from_packed(29491450));
        assert_ne!(Short2::new(250, 450), Short2::new(450, 250));
    }

    #[test]
    fn clamp_saturation() {
        let v = Short2::from_floats(40000.0, -40000.0);

        assert_eq!(v, Short2::new(32767, -32767));
        assert_eq!(v.to_vector(), Float2::new(32767.0, -32767.0));
    }

    #[test]
    fn round_trip() {
        for &n in &[-32768i16, -32767, -1, 0, 1, 12345, 32767] {
            let v = Short2::new(n, n);
            assert_eq!(v.to_vector(), Float2::new(f32::from(n), f32::from(n)));
        }
    }

    #[test]
    fn normalized_most_negative() {
        let v = Short2Normalized::new(-32768, 0);
        let d = v.to_vector();

        assert_eq!(d.get_0(), -1.0);
        assert_eq!(d.get_1(), 0.0);
    }

    #[test]
    fn normalized_round_trip() {
        let v = Short2Normalized::from_floats(1.0, -1.0);
        assert_eq!((v.x(), v.y()), (32767, -32767));
        assert_eq!(v.to_vector(), Float2::new(1.0, -1.0));

        let v = Short2Normalized::from_floats(0.5, -0.25).to_vector();
        assert!((v.get_0() - 0.5).abs() <= 1.0 / 32767.0);
        assert!((v.get_1() + 0.25).abs() <= 1.0 / 32767.0);
    }

    #[test]
    fn display() {
        assert_eq!(Short2::default().to_string(), "00000000");
        assert_eq!(Short2::new(250, 450).to_string(), "01C200FA");
    }
}
