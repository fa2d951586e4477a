//! Small fixed-width float tuples and the lane-wise operations used to
//! quantize them.
//!
//! `Float2` and `Float4` are plain tuples of two and four `f32`s.  The
//! `FloatN` trait provides the handful of elementwise operations (clamp,
//! round, truncate, saturate, multiply-add) that packed formats need, written
//! once in terms of `map()` and `zip_map()` so that both widths share exactly
//! the same arithmetic.

mod float2;
mod float4;

pub use crate::float2::Float2;
pub use crate::float4::Float4;

/// A tuple of `LANES` floats with elementwise operations.
///
/// All operations are pure and lane-independent.
pub trait FloatN: Copy + PartialEq + std::fmt::Debug {
    /// Number of lanes.
    const LANES: usize;

    /// Creates a tuple with every lane set to `n`.
    fn splat(n: f32) -> Self;

    /// Creates a tuple from the first `LANES` values of a slice.
    ///
    /// Returns `None` if the slice is too short.  Extra values are ignored.
    fn from_slice(values: &[f32]) -> Option<Self>;

    /// Returns the value of the nth lane.
    fn get_n(&self, n: usize) -> f32;

    /// Applies `f` to each lane.
    fn map<F: Fn(f32) -> f32>(self, f: F) -> Self;

    /// Applies `f` to each pair of corresponding lanes.
    fn zip_map<F: Fn(f32, f32) -> f32>(self, other: Self, f: F) -> Self;

    #[inline(always)]
    fn v_min(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a < b { a } else { b })
    }

    #[inline(always)]
    fn v_max(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a > b { a } else { b })
    }

    /// Per-lane `min(max(v, lo), hi)`.
    ///
    /// A NaN lane comes out as the matching lane of `lo`.
    #[inline(always)]
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.zip_map(lo, f32::max).zip_map(hi, f32::min)
    }

    /// Per-lane round to nearest, ties to even.
    #[inline(always)]
    fn round(self) -> Self {
        self.map(f32::round_ties_even)
    }

    /// Per-lane round toward zero.
    #[inline(always)]
    fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    /// Clamps every lane to `[0, 1]`.
    #[inline(always)]
    fn saturate(self) -> Self {
        self.clamp(Self::splat(0.0), Self::splat(1.0))
    }

    /// Per-lane `self * scale + bias`.
    ///
    /// This is a separate multiply and add, not a fused one, so the result
    /// is rounded twice.
    #[inline(always)]
    fn mul_add(self, scale: Self, bias: Self) -> Self {
        self.zip_map(scale, |a, b| a * b)
            .zip_map(bias, |a, b| a + b)
    }
}
