//! Four-component float vector, used for homogeneous points and matrix basis slots.

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Vector3;
use crate::error::{MathError, array_from_slice};

/// Four contiguous floats with no padding.
///
/// `r g b a` and `s t p u` read the same fields as `x y z w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Shorthand for [`Vector4::new`]. Use [`Vector4::point`] for the `w = 1` case.
#[inline]
#[must_use]
pub const fn vector4(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
    Vector4::new(x, y, z, w)
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point with `w = 1`.
    #[inline]
    #[must_use]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    #[inline]
    #[must_use]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Scales `self` to unit length in place. Zero-length input becomes NaN.
    #[inline]
    pub fn normalize(&mut self) {
        let factor = 1.0 / self.length();
        *self *= factor;
    }

    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Drop `w`.
    #[inline]
    #[must_use]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    #[must_use]
    pub const fn r(&self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn g(&self) -> f32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn b(&self) -> f32 {
        self.z
    }

    #[inline]
    #[must_use]
    pub const fn a(&self) -> f32 {
        self.w
    }

    #[inline]
    #[must_use]
    pub const fn s(&self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn t(&self) -> f32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn p(&self) -> f32 {
        self.z
    }

    #[inline]
    #[must_use]
    pub const fn u(&self) -> f32 {
        self.w
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of range: {index}"),
        }
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self.w *= factor;
    }
}

// Componentwise.
impl MulAssign for Vector4 {
    #[inline]
    fn mul_assign(&mut self, factor: Self) {
        self.x *= factor.x;
        self.y *= factor.y;
        self.z *= factor.z;
        self.w *= factor.w;
    }
}

impl Add for Vector4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vector4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor, self.w * factor)
    }
}

// Componentwise.
impl Mul for Vector4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Neg for Vector4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl TryFrom<&[f32]> for Vector4 {
    type Error = MathError;

    fn try_from(data: &[f32]) -> Result<Self, MathError> {
        array_from_slice(data).map(Self::from_array)
    }
}

impl From<glam::Vec4> for Vector4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    #[inline]
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl AbsDiffEq for Vector4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Vector4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl core::fmt::Display for Vector4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
