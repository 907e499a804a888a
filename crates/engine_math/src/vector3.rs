//! Three-component float vector.
//!
//! [`Vector3`] is used for positions, directions, scale factors and colours.
//! The colour (`r g b`) and texture (`s t p`) accessors are naming
//! conveniences over the same `x y z` fields, not separate storage.

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, array_from_slice};

/// Three contiguous floats with no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Shorthand for [`Vector3::new`].
#[inline]
#[must_use]
pub const fn vector3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3::new(x, y, z)
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const AXIS_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const AXIS_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const AXIS_Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    #[must_use]
    pub const fn axis_x() -> Self {
        Self::AXIS_X
    }

    #[inline]
    #[must_use]
    pub const fn axis_y() -> Self {
        Self::AXIS_Y
    }

    #[inline]
    #[must_use]
    pub const fn axis_z() -> Self {
        Self::AXIS_Z
    }

    /// All three components set to `value`.
    #[inline]
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    #[inline]
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

    /// Scales `self` to unit length in place.
    ///
    /// A zero-length vector becomes NaN; callers must guarantee a non-zero
    /// length.
    #[inline]
    pub fn normalize(&mut self) {
        let factor = 1.0 / self.length();
        *self *= factor;
    }

    /// Unit-length copy of `self`. Same zero-length caveat as [`normalize`](Self::normalize).
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
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
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Borrow the components as a float array without copying.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl TryFrom<&[f32]> for Vector3 {
    type Error = MathError;

    fn try_from(data: &[f32]) -> Result<Self, MathError> {
        array_from_slice(data).map(Self::from_array)
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl core::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
