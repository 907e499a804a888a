//! 3×3 matrix stored as three [`Vector3`] basis slots.
//!
//! Slot `i` is the `i`-th column in standard notation; rows are synthesized
//! on demand by [`Matrix3x3::row`]. Products follow the standard
//! mathematical definition, and vectors multiply from the left.

use core::array;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Vector3;
use crate::error::{MathError, array_from_slice};

/// Linear 3×3 transform. Defaults to all zeros.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix3x3 {
    /// Basis slots; slot `i` is column `i`.
    pub cols: [Vector3; 3],
}

/// Builds a matrix from its three basis slots.
#[inline]
#[must_use]
pub const fn matrix3x3(col0: Vector3, col1: Vector3, col2: Vector3) -> Matrix3x3 {
    Matrix3x3::from_columns([col0, col1, col2])
}

impl Matrix3x3 {
    /// All entries zero.
    pub const ZERO: Self = Self::from_columns([Vector3::ZERO; 3]);
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self::from_columns([Vector3::AXIS_X, Vector3::AXIS_Y, Vector3::AXIS_Z]);

    #[inline]
    #[must_use]
    pub const fn from_columns(cols: [Vector3; 3]) -> Self {
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

    /// Basis slot `index`, i.e. a column.
    #[inline]
    #[must_use]
    pub fn column(&self, index: usize) -> Vector3 {
        self.cols[index]
    }

    /// Row `index`, assembled from the basis slots.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Vector3 {
        Vector3::new(self.cols[0][index], self.cols[1][index], self.cols[2][index])
    }

    /// Element at `row`, `col` in standard notation.
    #[inline]
    #[must_use]
    pub fn entry(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        Self::from_columns([self.row(0), self.row(1), self.row(2)])
    }

    /// Determinant by cofactor expansion.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// A singular matrix produces infinities and NaNs; nothing is reported.
    #[must_use]
    pub fn inversed(&self) -> Self {
        let m = &self.cols;
        let inv_det = 1.0 / self.determinant();

        let mut r = Self::ZERO;
        r[0][0] = (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * inv_det;
        r[1][0] = -(m[1][0] * m[2][2] - m[2][0] * m[1][2]) * inv_det;
        r[2][0] = (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * inv_det;
        r[0][1] = -(m[0][1] * m[2][2] - m[2][1] * m[0][2]) * inv_det;
        r[1][1] = (m[0][0] * m[2][2] - m[2][0] * m[0][2]) * inv_det;
        r[2][1] = -(m[0][0] * m[2][1] - m[2][0] * m[0][1]) * inv_det;
        r[0][2] = (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * inv_det;
        r[1][2] = -(m[0][0] * m[1][2] - m[1][0] * m[0][2]) * inv_det;
        r[2][2] = (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * inv_det;
        r
    }

    /// Post-multiplies `self` by a rotation of `angle` radians about `axis`
    /// (Rodrigues' formula). `axis` need not be unit length but must not be zero.
    #[must_use]
    pub fn rotated(&self, angle: f32, axis: Vector3) -> Self {
        let (s, c) = angle.sin_cos();
        let axis = axis.normalized();
        let temp = axis * (1.0 - c);

        // The leading `0.0 +` keeps off-diagonal zeros positive.
        let mut rot = Self::ZERO;
        rot[0][0] = c + temp[0] * axis[0];
        rot[0][1] = 0.0 + temp[0] * axis[1] + s * axis[2];
        rot[0][2] = 0.0 + temp[0] * axis[2] - s * axis[1];

        rot[1][0] = 0.0 + temp[1] * axis[0] - s * axis[2];
        rot[1][1] = c + temp[1] * axis[1];
        rot[1][2] = 0.0 + temp[1] * axis[2] + s * axis[0];

        rot[2][0] = 0.0 + temp[2] * axis[0] + s * axis[1];
        rot[2][1] = 0.0 + temp[2] * axis[1] - s * axis[0];
        rot[2][2] = c + temp[2] * axis[2];

        *self * rot
    }

    /// Multiplies column `i` by `factors[i]`.
    #[must_use]
    pub fn scaled(&self, factors: Vector3) -> Self {
        Self::from_columns([
            self.cols[0] * factors.x,
            self.cols[1] * factors.y,
            self.cols[2] * factors.z,
        ])
    }

    /// `self`'s columns weighted by `weights` and summed.
    #[inline]
    fn combine(&self, weights: Vector3) -> Vector3 {
        self.cols[0] * weights.x + self.cols[1] * weights.y + self.cols[2] * weights.z
    }

    #[inline]
    #[must_use]
    pub fn to_cols_array(&self) -> [f32; 9] {
        bytemuck::cast(*self)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cols)
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = Vector3;

    #[inline]
    fn index(&self, index: usize) -> &Vector3 {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        &mut self.cols[index]
    }
}

impl AddAssign for Matrix3x3 {
    fn add_assign(&mut self, rhs: Self) {
        for (col, other) in self.cols.iter_mut().zip(rhs.cols) {
            *col += other;
        }
    }
}

impl Add for Matrix3x3 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Matrix3x3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_columns(array::from_fn(|i| self.cols[i] - rhs.cols[i]))
    }
}

// Output slot j is `self`'s columns weighted by `rhs`'s column j.
impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_columns(array::from_fn(|j| self.combine(rhs.cols[j])))
    }
}

impl MulAssign for Matrix3x3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Row vector times matrix: `out[c] = dot(v, m[c])`.
impl Mul<Matrix3x3> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, m: Matrix3x3) -> Vector3 {
        Vector3::new(self.dot(&m.cols[0]), self.dot(&m.cols[1]), self.dot(&m.cols[2]))
    }
}

impl TryFrom<&[f32]> for Matrix3x3 {
    type Error = MathError;

    /// Reads nine floats, basis slot by basis slot.
    fn try_from(data: &[f32]) -> Result<Self, MathError> {
        array_from_slice::<9>(data).map(bytemuck::cast)
    }
}

impl From<glam::Mat3> for Matrix3x3 {
    fn from(m: glam::Mat3) -> Self {
        Self::from_columns([m.x_axis.into(), m.y_axis.into(), m.z_axis.into()])
    }
}

impl From<Matrix3x3> for glam::Mat3 {
    fn from(m: Matrix3x3) -> Self {
        glam::Mat3::from_cols(m.cols[0].into(), m.cols[1].into(), m.cols[2].into())
    }
}

impl AbsDiffEq for Matrix3x3 {
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

impl RelativeEq for Matrix3x3 {
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
