//! The clamp/scale/round policies shared by the integer formats.
//!
//! Every function here is written once over `FloatN`, so 2- and 4-component
//! formats of the same family quantize identically.  Clamping always happens
//! before rounding, so the results always fit the target integer type.

use floatn::FloatN;

pub(crate) const I8_MAX: f32 = i8::MAX as f32;
pub(crate) const U8_MAX: f32 = u8::MAX as f32;
pub(crate) const I16_MAX: f32 = i16::MAX as f32;
pub(crate) const U16_MAX: f32 = u16::MAX as f32;

/// Raw signed: clamp to `[-max, max]`, round to nearest even.
///
/// Note the range is symmetric, so e.g. -128 is never produced for 8 bits.
#[inline(always)]
pub(crate) fn signed<V: FloatN>(v: V, max: f32) -> V {
    v.clamp(V::splat(-max), V::splat(max)).round()
}

/// Raw unsigned: clamp to `[0, max]`, round to nearest even.
#[inline(always)]
pub(crate) fn unsigned<V: FloatN>(v: V, max: f32) -> V {
    v.clamp(V::splat(0.0), V::splat(max)).round()
}

/// Signed normalized: clamp to `[-1, 1]`, scale by `max`, round to nearest
/// even.
#[inline(always)]
pub(crate) fn snorm<V: FloatN>(v: V, max: f32) -> V {
    v.clamp(V::splat(-1.0), V::splat(1.0))
        .map(|n| n * max)
        .round()
}

/// Unsigned normalized: saturate, scale by `max`, add one half, truncate.
///
/// This rounds half-up rather than half-to-even, unlike every other format.
#[inline(always)]
pub(crate) fn unorm<V: FloatN>(v: V, max: f32) -> V {
    v.saturate()
        .mul_add(V::splat(max), V::splat(0.5))
        .trunc()
}

/// Inverse of `snorm()`.
///
/// The most negative integer (e.g. -128 for 8 bits) lies one step outside
/// the encoded range and decodes to exactly -1.0.
#[inline(always)]
pub(crate) fn from_snorm<V: FloatN>(v: V, max: f32) -> V {
    v.map(|n| (n / max).max(-1.0))
}

/// Inverse of `unorm()`.
#[inline(always)]
pub(crate) fn from_unorm<V: FloatN>(v: V, max: f32) -> V {
    v.map(|n| n / max)
}
