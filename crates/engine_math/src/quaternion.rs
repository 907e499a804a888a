//! Rotation quaternion.
//!
//! Kept as a plain `{x, y, z, w}` value for storage and interchange. The
//! matrix produced by [`Quaternion::to_matrix3x3`] matches
//! [`Matrix3x3::rotated`] for the same axis and angle, so quaternion-driven
//! rotations compose with the rest of the crate's row-vector convention.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Matrix3x3, Vector3};

/// Rotation stored as `xyz` vector part and `w` scalar part.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Quaternion {
    /// Vector part, `axis * sin(angle / 2)`.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Scalar part, `cos(angle / 2)`.
    pub w: f32,
}

impl Quaternion {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized and
    /// must not be zero.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        let v = axis.normalized() * s;
        Self::new(v.x, v.y, v.z, c)
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        let f = 1.0 / self.length();
        Self::new(self.x * f, self.y * f, self.z * f, self.w * f)
    }

    #[inline]
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotation matrix for a unit quaternion.
    #[must_use]
    pub fn to_matrix3x3(&self) -> Matrix3x3 {
        let Self { x, y, z, w } = *self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Matrix3x3::from_columns([
            Vector3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vector3::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            Vector3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        ])
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl AbsDiffEq for Quaternion {
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

impl RelativeEq for Quaternion {
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
