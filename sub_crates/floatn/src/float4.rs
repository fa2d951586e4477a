use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::FloatN;

/// Essentially a tuple of four floats.
#[derive(Debug, Copy, Clone, Default)]
pub struct Float4 {
    data: [f32; 4],
}

impl Float4 {
    #[inline(always)]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Float4 {
        Float4 { data: [a, b, c, d] }
    }

    #[inline(always)]
    pub const fn splat(n: f32) -> Float4 {
        Float4 { data: [n, n, n, n] }
    }

    /// Returns the value of the nth element.
    #[inline(always)]
    pub fn get_n(&self, n: usize) -> f32 {
        assert!(
            n <= 3,
            "Attempted to access element of Float4 outside of bounds."
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

    /// Returns the value of the 2th element.
    #[inline(always)]
    pub fn get_2(&self) -> f32 {
        self.data[2]
    }

    /// Returns the value of the 3th element.
    #[inline(always)]
    pub fn get_3(&self) -> f32 {
        self.data[3]
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f32; 4] {
        self.data
    }
}

impl FloatN for Float4 {
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(n: f32) -> Float4 {
        Float4::splat(n)
    }

    #[inline]
    fn from_slice(values: &[f32]) -> Option<Float4> {
        match values {
            [a, b, c, d, ..] => Some(Float4::new(*a, *b, *c, *d)),
            _ => None,
        }
    }

    #[inline(always)]
    fn get_n(&self, n: usize) -> f32 {
        Float4::get_n(self, n)
    }

    #[inline(always)]
    fn map<F: Fn(f32) -> f32>(self, f: F) -> Float4 {
        Float4 {
            data: [
                f(self.data[0]),
                f(self.data[1]),
                f(self.data[2]),
                f(self.data[3]),
            ],
        }
    }

    #[inline(always)]
    fn zip_map<F: Fn(f32, f32) -> f32>(self, other: Float4, f: F) -> Float4 {
        Float4 {
            data: [
                f(self.data[0], other.data[0]),
                f(self.data[1], other.data[1]),
                f(self.data[2], other.data[2]),
                f(self.data[3], other.data[3]),
            ],
        }
    }
}

impl PartialEq for Float4 {
    #[inline]
    fn eq(&self, other: &Float4) -> bool {
        self.get_0() == other.get_0()
            && self.get_1() == other.get_1()
            && self.get_2() == other.get_2()
            && self.get_3() == other.get_3()
    }
}

impl From<(f32, f32, f32, f32)> for Float4 {
    #[inline(always)]
    fn from(t: (f32, f32, f32, f32)) -> Float4 {
        Float4::new(t.0, t.1, t.2, t.3)
    }
}

impl From<[f32; 4]> for Float4 {
    #[inline(always)]
    fn from(data: [f32; 4]) -> Float4 {
        Float4 { data }
    }
}

impl From<Float4> for (f32, f32, f32, f32) {
    #[inline(always)]
    fn from(f: Float4) -> (f32, f32, f32, f32) {
        (f.get_0(), f.get_1(), f.get_2(), f.get_3())
    }
}

impl From<Float4> for [f32; 4] {
    #[inline(always)]
    fn from(f: Float4) -> [f32; 4] {
        f.data
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec4> for Float4 {
    #[inline(always)]
    fn from(v: glam::Vec4) -> Float4 {
        Float4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(feature = "glam")]
impl From<Float4> for glam::Vec4 {
    #[inline(always)]
    fn from(f: Float4) -> glam::Vec4 {
        glam::Vec4::new(f.get_0(), f.get_1(), f.get_2(), f.get_3())
    }
}

impl Add for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn add(self, other: Float4) -> Float4 {
        self.zip_map(other, |a, b| a + b)
    }
}

impl Sub for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn sub(self, other: Float4) -> Float4 {
        self.zip_map(other, |a, b| a - b)
    }
}

impl Mul for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn mul(self, other: Float4) -> Float4 {
        self.zip_map(other, |a, b| a * b)
    }
}

impl Mul<f32> for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn mul(self, other: f32) -> Float4 {
        self.map(|a| a * other)
    }
}

impl Div for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn div(self, other: Float4) -> Float4 {
        self.zip_map(other, |a, b| a / b)
    }
}

impl Div<f32> for Float4 {
    type Output = Float4;

    #[inline(always)]
    fn div(self, other: f32) -> Float4 {
        self.map(|a| a / other)
    }
}

impl AddAssign for Float4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Float4) {
        *self = *self + rhs;
    }
}

impl SubAssign for Float4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Float4) {
        *self = *self - rhs;
    }
}

impl MulAssign for Float4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Float4) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Float4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Float4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Float4) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Float4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
