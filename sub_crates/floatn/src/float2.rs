use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::FloatN;

/// Essentially a tuple of two floats.
#[derive(Debug, Copy, Clone, Default)]
pub struct Float2 {
    data: [f32; 2],
}

impl Float2 {
    #[inline(always)]
    pub const fn new(a: f32, b: f32) -> Float2 {
        Float2 { data: [a, b] }
    }

    #[inline(always)]
    pub const fn splat(n: f32) -> Float2 {
        Float2 { data: [n, n] }
    }

    /// Returns the value of the nth element.
    #[inline(always)]
    pub fn get_n(&self, n: usize) -> f32 {
        assert!(
            n <= 1,
            "Attempted to access element of Float2 outside of bounds."
        );
        self.data[n]
    }

    /// Returns the value of the 0th element.
    #[inline(always)]
    pub fn get_0(&self) -> f32 {
        self.data[0]
    }

    /// Returns the value of the 1th element.
    #[inline(always)]
    pub fn get_1(&self) -> f32 {
        self.data[1]
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f32; 2] {
        self.data
    }
}

impl FloatN for Float2 {
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(n: f32) -> Float2 {
        Float2::splat(n)
    }

    #[inline]
    fn from_slice(values: &[f32]) -> Option<Float2> {
        match values {
            [a, b, ..] => Some(Float2::new(*a, *b)),
            _ => None,
        }
    }

    #[inline(always)]
    fn get_n(&self, n: usize) -> f32 {
        Float2::get_n(self, n)
    }

    #[inline(always)]
    fn map<F: Fn(f32) -> f32>(self, f: F) -> Float2 {
        Float2 {
            data: [f(self.data[0]), f(self.data[1])],
        }
    }

    #[inline(always)]
    fn zip_map<F: Fn(f32, f32) -> f32>(self, other: Float2, f: F) -> Float2 {
        Float2 {
            data: [
                f(self.data[0], other.data[0]),
                f(self.data[1], other.data[1]),
            ],
        }
    }
}

impl PartialEq for Float2 {
    #[inline]
    fn eq(&self, other: &Float2) -> bool {
        self.get_0() == other.get_0() && self.get_1() == other.get_1()
    }
}

impl From<(f32, f32)> for Float2 {
    #[inline(always)]
    fn from(t: (f32, f32)) -> Float2 {
        Float2::new(t.0, t.1)
    }
}

impl From<[f32; 2]> for Float2 {
    #[inline(always)]
    fn from(data: [f32; 2]) -> Float2 {
        Float2 { data }
    }
}

impl From<Float2> for (f32, f32) {
    #[inline(always)]
    fn from(f: Float2) -> (f32, f32) {
        (f.get_0(), f.get_1())
    }
}

impl From<Float2> for [f32; 2] {
    #[inline(always)]
    fn from(f: Float2) -> [f32; 2] {
        f.data
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec2> for Float2 {
    #[inline(always)]
    fn from(v: glam::Vec2) -> Float2 {
        Float2::new(v.x, v.y)
    }
}

#[cfg(feature = "glam")]
impl From<Float2> for glam::Vec2 {
    #[inline(always)]
    fn from(f: Float2) -> glam::Vec2 {
        glam::Vec2::new(f.get_0(), f.get_1())
    }
}

impl Add for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn add(self, other: Float2) -> Float2 {
        self.zip_map(other, |a, b| a + b)
    }
}

impl Sub for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn sub(self, other: Float2) -> Float2 {
        self.zip_map(other, |a, b| a - b)
    }
}

impl Mul for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn mul(self, other: Float2) -> Float2 {
        self.zip_map(other, |a, b| a * b)
    }
}

impl Mul<f32> for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn mul(self, other: f32) -> Float2 {
        self.map(|a| a * other)
    }
}

impl Div for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn div(self, other: Float2) -> Float2 {
        self.zip_map(other, |a, b| a / b)
    }
}

impl Div<f32> for Float2 {
    type Output = Float2;

    #[inline(always)]
    fn div(self, other: f32) -> Float2 {
        self.map(|a| a / other)
    }
}

impl AddAssign for Float2 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Float2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Float2 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Float2) {
        *self = *self - rhs;
    }
}

impl MulAssign for Float2 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Float2) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Float2 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Float2 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Float2) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Float2 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
