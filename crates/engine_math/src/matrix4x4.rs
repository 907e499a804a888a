//! 4×4 matrix stored as four [`Vector4`] basis slots.
//!
//! Same storage rules as [`Matrix3x3`]: slot `i` is column `i`, so
//! `entry(row, col) == m[col][row]`. Under the row-vector convention a point
//! `v` is transformed as `v * m`, which puts an affine transform's
//! translation in row 3.

use core::array;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, array_from_slice};
use crate::{Matrix3x3, Vector3, Vector4};

/// Homogeneous 4×4 transform. Defaults to all zeros.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix4x4 {
    /// Basis slots; slot `i` is column `i`.
    pub cols: [Vector4; 4],
}

/// Builds a matrix from its four basis slots.
#[inline]
#[must_use]
pub const fn matrix4x4(col0: Vector4, col1: Vector4, col2: Vector4, col3: Vector4) -> Matrix4x4 {
    Matrix4x4::from_columns([col0, col1, col2, col3])
}

impl Matrix4x4 {
    /// All entries zero.
    pub const ZERO: Self = Self::from_columns([Vector4::ZERO; 4]);
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self::from_columns([
        Vector4::new(1.0, 0.0, 0.0, 0.0),
        Vector4::new(0.0, 1.0, 0.0, 0.0),
        Vector4::new(0.0, 0.0, 1.0, 0.0),
        Vector4::new(0.0, 0.0, 0.0, 1.0),
    ]);

    #[inline]
    #[must_use]
    pub const fn from_columns(cols: [Vector4; 4]) -> Self {
        Self { cols }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Affine transform for row vectors: rotate, then scale each rotated
    /// axis, then translate.
    ///
    /// Slot `c < 3` holds `rotation[c] * scale[c]` in its upper three
    /// components and `translate[c]` in the fourth; slot 3 is `(0, 0, 0, 1)`.
    /// Row 3 therefore reads `(tx, ty, tz, 1)`.
    #[must_use]
    pub fn from_rotation_scale_translation(rotation: &Matrix3x3, scale: Vector3, translate: Vector3) -> Self {
        let rot_x = rotation[0] * scale.x;
        let rot_y = rotation[1] * scale.y;
        let rot_z = rotation[2] * scale.z;
        Self::from_columns([
            Vector4::from_vector3(rot_x, translate.x),
            Vector4::from_vector3(rot_y, translate.y),
            Vector4::from_vector3(rot_z, translate.z),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    #[inline]
    #[must_use]
    pub fn column(&self, index: usize) -> Vector4 {
        self.cols[index]
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Vector4 {
        Vector4::new(
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
            self.cols[3][index],
        )
    }

    #[inline]
    #[must_use]
    pub fn entry(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        Self::from_columns([self.row(0), self.row(1), self.row(2), self.row(3)])
    }

    /// Signed cofactors laid out as the (unscaled) inverse.
    fn adjugate(&self) -> Self {
        let m = &self.cols;

        // 2×2 minors of the lower row pairs.
        let coef00 = m[2].z * m[3].w - m[3].z * m[2].w;
        let coef02 = m[1].z * m[3].w - m[3].z * m[1].w;
        let coef03 = m[1].z * m[2].w - m[2].z * m[1].w;

        let coef04 = m[2].y * m[3].w - m[3].y * m[2].w;
        let coef06 = m[1].y * m[3].w - m[3].y * m[1].w;
        let coef07 = m[1].y * m[2].w - m[2].y * m[1].w;

        let coef08 = m[2].y * m[3].z - m[3].y * m[2].z;
        let coef10 = m[1].y * m[3].z - m[3].y * m[1].z;
        let coef11 = m[1].y * m[2].z - m[2].y * m[1].z;

        let coef12 = m[2].x * m[3].w - m[3].x * m[2].w;
        let coef14 = m[1].x * m[3].w - m[3].x * m[1].w;
        let coef15 = m[1].x * m[2].w - m[2].x * m[1].w;

        let coef16 = m[2].x * m[3].z - m[3].x * m[2].z;
        let coef18 = m[1].x * m[3].z - m[3].x * m[1].z;
        let coef19 = m[1].x * m[2].z - m[2].x * m[1].z;

        let coef20 = m[2].x * m[3].y - m[3].x * m[2].y;
        let coef22 = m[1].x * m[3].y - m[3].x * m[1].y;
        let coef23 = m[1].x * m[2].y - m[2].x * m[1].y;

        let fac0 = Vector4::new(coef00, coef00, coef02, coef03);
        let fac1 = Vector4::new(coef04, coef04, coef06, coef07);
        let fac2 = Vector4::new(coef08, coef08, coef10, coef11);
        let fac3 = Vector4::new(coef12, coef12, coef14, coef15);
        let fac4 = Vector4::new(coef16, coef16, coef18, coef19);
        let fac5 = Vector4::new(coef20, coef20, coef22, coef23);

        let vec0 = Vector4::new(m[1][0], m[0][0], m[0][0], m[0][0]);
        let vec1 = Vector4::new(m[1][1], m[0][1], m[0][1], m[0][1]);
        let vec2 = Vector4::new(m[1][2], m[0][2], m[0][2], m[0][2]);
        let vec3 = Vector4::new(m[1][3], m[0][3], m[0][3], m[0][3]);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let sign_a = Vector4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = Vector4::new(-1.0, 1.0, -1.0, 1.0);
        Self::from_columns([inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b])
    }

    /// Determinant from slot 0 and the matching cofactors.
    fn determinant_with(&self, adjugate: &Self) -> f32 {
        let dot0 = self.cols[0] * adjugate.row(0);
        (dot0.x + dot0.y) + (dot0.z + dot0.w)
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.determinant_with(&self.adjugate())
    }

    /// Inverse by block-wise Laplace expansion.
    ///
    /// A singular matrix produces infinities and NaNs; nothing is reported.
    #[must_use]
    pub fn inversed(&self) -> Self {
        let mut inverse = self.adjugate();
        let inv_det = 1.0 / self.determinant_with(&inverse);
        for col in &mut inverse.cols {
            *col *= inv_det;
        }
        inverse
    }

    #[inline]
    fn combine(&self, weights: Vector4) -> Vector4 {
        self.cols[0] * weights.x + self.cols[1] * weights.y + self.cols[2] * weights.z + self.cols[3] * weights.w
    }

    #[inline]
    #[must_use]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cols)
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = Vector4;

    #[inline]
    fn index(&self, index: usize) -> &Vector4 {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.cols[index]
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, rhs: Self) {
        for (col, other) in self.cols.iter_mut().zip(rhs.cols) {
            *col += other;
        }
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_columns(array::from_fn(|i| self.cols[i] - rhs.cols[i]))
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_columns(array::from_fn(|j| self.combine(rhs.cols[j])))
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Point times matrix, with an implied `w = 1`.
impl Mul<Matrix4x4> for Vector3 {
    type Output = Vector4;

    #[inline]
    fn mul(self, m: Matrix4x4) -> Vector4 {
        let project = |c: Vector4| c.x * self.x + c.y * self.y + c.z * self.z + c.w;
        Vector4::new(
            project(m.cols[0]),
            project(m.cols[1]),
            project(m.cols[2]),
            project(m.cols[3]),
        )
    }
}

impl Mul<Matrix4x4> for Vector4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, m: Matrix4x4) -> Vector4 {
        Vector4::new(
            self.dot(&m.cols[0]),
            self.dot(&m.cols[1]),
            self.dot(&m.cols[2]),
            self.dot(&m.cols[3]),
        )
    }
}

impl TryFrom<&[f32]> for Matrix4x4 {
    type Error = MathError;

    fn try_from(data: &[f32]) -> Result<Self, MathError> {
        array_from_slice::<16>(data).map(bytemuck::cast)
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_columns([m.x_axis.into(), m.y_axis.into(), m.z_axis.into(), m.w_axis.into()])
    }
}

impl From<Matrix4x4> for glam::Mat4 {
    fn from(m: Matrix4x4) -> Self {
        glam::Mat4::from_cols(
            m.cols[0].into(),
            m.cols[1].into(),
            m.cols[2].into(),
            m.cols[3].into(),
        )
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .zip(&other.cols)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.cols
            .iter()
            .zip(&other.cols)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample() -> Matrix4x4 {
        matrix4x4(
            Vector4::new(2.0, 0.0, 1.0, 0.0),
            Vector4::new(1.0, 3.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 4.0, 0.0),
            Vector4::new(1.0, 0.0, 2.0, 5.0),
        )
    }

    #[test]
    fn test_identity_layout() {
        let m = Matrix4x4::identity();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.entry(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(Matrix4x4::zero().to_cols_array(), [0.0; 16]);
    }

    #[test]
    fn test_product_is_standard() {
        let a = sample();
        let b = sample().transposed();
        let p = a * b;
        for row in 0..4 {
            for col in 0..4 {
                let expected = a.row(row).dot(&b.column(col));
                assert_eq!(p.entry(row, col), expected);
            }
        }
        let mut q = a;
        q *= b;
        assert_eq!(q, p);
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = sample();
        assert_eq!(a * Matrix4x4::identity(), a);
        assert_eq!(Matrix4x4::identity() * a, a);
        let v = Vector4::new(1.5, -2.0, 0.25, 3.0);
        assert_eq!(v * Matrix4x4::identity(), v);
    }

    #[test]
    fn test_add_sub() {
        let mut a = sample();
        a += Matrix4x4::identity();
        assert_eq!(a, sample() + Matrix4x4::identity());
        assert_eq!(a - Matrix4x4::identity(), sample());
        assert_eq!(a.entry(3, 3), 6.0);
    }

    #[test]
    fn test_transpose_involution() {
        let a = sample() * sample();
        assert_eq!(a.transposed().transposed(), a);
        assert_eq!(a.transposed().row(1), a.column(1));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = sample();
        let inv = m.inversed();
        assert_abs_diff_eq!(m * inv, Matrix4x4::identity(), epsilon = 1e-3);
        assert_abs_diff_eq!(inv * m, Matrix4x4::identity(), epsilon = 1e-3);
    }

    #[test]
    fn test_determinant_of_diagonal() {
        let m = Matrix4x4::from_rotation_scale_translation(
            &Matrix3x3::identity(),
            Vector3::new(2.0, 3.0, 4.0),
            Vector3::zero(),
        );
        assert_eq!(m.determinant(), 24.0);
        assert_abs_diff_eq!(
            m.inversed().row(1),
            Vector4::new(0.0, 1.0 / 3.0, 0.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let mut m = sample();
        m[3] = m[0];
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inversed().as_slice().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_affine_builder_scale() {
        let m = Matrix4x4::from_rotation_scale_translation(
            &Matrix3x3::identity(),
            Vector3::new(2.0, 3.0, 4.0),
            Vector3::zero(),
        );
        assert_eq!(Vector3::new(-1.0, 5.0, 7.0) * m, Vector4::new(-2.0, 15.0, 28.0, 1.0));
    }

    #[test]
    fn test_affine_builder_translation_in_last_row() {
        let m = Matrix4x4::from_rotation_scale_translation(
            &Matrix3x3::identity(),
            Vector3::uniform(1.0),
            Vector3::new(2.0, 3.0, 4.0),
        );
        assert_eq!(m.row(3), Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(m.column(3), Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector3::zero() * m, Vector4::new(2.0, 3.0, 4.0, 1.0));
        // Directions (w = 0) ignore translation.
        assert_eq!(
            Vector4::new(1.0, 0.0, 0.0, 0.0) * m,
            Vector4::new(1.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_point_and_homogeneous_agree() {
        let m = sample();
        let v = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(v * m, Vector4::point(0.5, -1.0, 2.0) * m);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_slot_out_of_range_panics() {
        let m = Matrix4x4::identity();
        let _ = m[4];
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_row_out_of_range_panics() {
        let _ = Matrix4x4::identity().row(4);
    }

    #[test]
    fn test_relative_eq() {
        let m = sample();
        assert_relative_eq!(m.inversed().inversed(), m, epsilon = 1e-5, max_relative = 1e-5);
        let mut n = m;
        n[3].w += 0.01;
        assert!(m.relative_ne(&n, f32::EPSILON, 1e-4));
    }

    #[test]
    fn test_glam_round_trip() {
        let m = sample();
        let g: glam::Mat4 = m.into();
        assert_eq!(g.col(3), glam::Vec4::new(1.0, 0.0, 2.0, 5.0));
        assert_eq!(Matrix4x4::from(g), m);
        let floats = m.to_cols_array();
        assert_eq!(Matrix4x4::try_from(&floats[..]), Ok(m));
    }
}
