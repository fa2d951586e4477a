//! Four IEEE 754 half-precision floats packed into a `u64`.
//!
//! Layout: `x` in bits 0-15, `y` in bits 16-31, `z` in bits 32-47, `w` in
//! bits 48-63.

use floatn::Float4;
use half::f16;

/// Four 16-bit floats.
///
/// Same conversion rules as `Half2`: round to nearest even, no clamping,
/// exact decoding.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Half4 {
    packed: u64,
}

impl Half4 {
    #[inline(always)]
    pub const fn new(x: f16, y: f16, z: f16, w: f16) -> Half4 {
        Half4 {
            packed: (x.to_bits() as u64)
                | ((y.to_bits() as u64) << 16)
                | ((z.to_bits() as u64) << 32)
                | ((w.to_bits() as u64) << 48),
        }
    }

    #[inline]
    pub fn from_floats(x: f32, y: f32, z: f32, w: f32) -> Half4 {
        Half4::new(
            f16::from_f32(x),
            f16::from_f32(y),
            f16::from_f32(z),
            f16::from_f32(w),
        )
    }

    #[inline]
    pub fn from_vector(v: Float4) -> Half4 {
        Half4::from_floats(v.get_0(), v.get_1(), v.get_2(), v.get_3())
    }

    #[inline]
    pub fn to_vector(&self) -> Float4 {
        Float4::new(
            self.x().to_f32(),
            self.y().to_f32(),
            self.z().to_f32(),
            self.w().to_f32(),
        )
    }

    #[inline(always)]
    pub const fn x(&self) -> f16 {
        f16::from_bits(self.packed as u16)
    }

    #[inline(always)]
    pub const fn y(&self) -> f16 {
        f16::from_bits((self.packed >> 16) as u16)
    }

    #[inline(always)]
    pub const fn z(&self) -> f16 {
        f16::from_bits((self.packed >> 32) as u16)
    }

    #[inline(always)]
    pub const fn w(&self) -> f16 {
        f16::from_bits((self.packed >> 48) as u16)
    }
}

impl_packed_vector!(Half4, u64, Float4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackedVector;

    #[test]
    fn layout() {
        let v = Half4::from_floats(1.0, -2.0, 0.0, 0.5);

        assert_eq!(v.packed_value(), 0x3800_0000_C000_3C00);
        assert_eq!(v.to_string(), "38000000C0003C00");
        assert_eq!(v.z(), f16::ZERO);
        assert_eq!(v.w(), f16::from_f32(0.5));
    }

    #[test]
    fn lossy_encode() {
        let v = Half4::from_floats(0.1, 0.0, 0.0, 0.0).to_vector();

        assert_ne!(v.get_0(), 0.1);
        assert!((v.get_0() - 0.1).abs() < 0.0001);
    }

    #[test]
    fn decode_is_exact() {
        let mut bits = 0u16;
        loop {
            let h = f16::from_bits(bits);
            if h.is_finite() {
                let v = Half4::new(h, h, h, h).to_vector();
                assert_eq!(v.get_0(), h.to_f32());
                assert_eq!(Half4::from_vector(v), Half4::new(h, h, h, h));
            }
            if bits == u16::MAX {
                break;
            }
            bits += 1;
        }
    }

    #[test]
    fn equality_is_bitwise() {
        // Positive and negative zero compare equal as floats, but not here.
        assert_ne!(
            Half4::from_floats(0.0, 0.0, 0.0, 0.0),
            Half4::from_floats(-0.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(Half4::from_packed(0), Half4::default());
    }

    #[test]
    fn from_slice() {
        assert_eq!(
            Half4::from_slice(&[1.0, 1.0, 1.0, 1.0]).map(|v| v.packed_value()),
            Ok(0x3C00_3C00_3C00_3C00)
        );
        assert!(Half4::from_slice(&[1.0, 1.0, 1.0]).is_err());
    }
}
