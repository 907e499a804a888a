//! Transform builders and the 3D transform value.
//!
//! All builders target the row-vector convention: points transform as
//! `p * m`, and chained matrices apply left to right, so `p * a * b` applies
//! `a` first.

use serde::{Deserialize, Serialize};

use crate::{Matrix3x3, Matrix4x4, Vector3};

/// Rotation of `angle` radians about `axis` (Rodrigues' formula).
#[inline]
#[must_use]
pub fn rotation(angle: f32, axis: Vector3) -> Matrix3x3 {
    Matrix3x3::identity().rotated(angle, axis)
}

/// Affine transform from a rotation, per-axis scale and translation.
///
/// See [`Matrix4x4::from_rotation_scale_translation`] for the exact layout;
/// the translation ends up in row 3, not column 3.
#[inline]
#[must_use]
pub fn affine(rotation: &Matrix3x3, scale: Vector3, translate: Vector3) -> Matrix4x4 {
    Matrix4x4::from_rotation_scale_translation(rotation, scale, translate)
}

/// A 3D transform representing rotation, per-axis scale and position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform3D {
    /// Rotation basis.
    pub rotation: Matrix3x3,
    /// Scale applied along each rotated axis.
    pub scale: Vector3,
    /// World-space position.
    pub translation: Vector3,
}

impl Transform3D {
    /// No rotation, unit scale, at the origin.
    pub const IDENTITY: Self = Self {
        rotation: Matrix3x3::IDENTITY,
        scale: Vector3::new(1.0, 1.0, 1.0),
        translation: Vector3::ZERO,
    };

    #[must_use]
    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn from_rotation_translation(rotation: Matrix3x3, translation: Vector3) -> Self {
        Self {
            rotation,
            translation,
            ..Self::IDENTITY
        }
    }

    /// The 4×4 matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4x4 {
        affine(&self.rotation, self.scale, self.translation)
    }

    /// Transforms a point, dropping the homogeneous coordinate.
    #[must_use]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (point * self.to_matrix()).truncate()
    }

    /// Moves the transform by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Vector3) -> Self {
        self.translation += offset;
        self
    }

    /// Post-multiplies the rotation by `angle` radians about `axis`.
    #[must_use]
    pub fn rotated(mut self, angle: f32, axis: Vector3) -> Self {
        self.rotation = self.rotation.rotated(angle, axis);
        self
    }

    /// Multiplies the scale componentwise by `factors`.
    #[must_use]
    pub fn scaled(mut self, factors: Vector3) -> Self {
        self.scale = Vector3::new(
            self.scale.x * factors.x,
            self.scale.y * factors.y,
            self.scale.z * factors.z,
        );
        self
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
