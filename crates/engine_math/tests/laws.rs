//! Algebraic laws across the vector and matrix types, cross-checked against glam.

use approx::assert_abs_diff_eq;
use engine_math::{Matrix3x3, Matrix4x4, Vector3, Vector4, transform};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    }

    fn vector3(&mut self) -> Vector3 {
        Vector3::new(self.next(), self.next(), self.next())
    }

    fn vector4(&mut self) -> Vector4 {
        Vector4::new(self.next(), self.next(), self.next(), self.next())
    }

    /// Diagonally dominant, so comfortably invertible.
    fn matrix3x3(&mut self) -> Matrix3x3 {
        let mut m = Matrix3x3::from_columns([self.vector3(), self.vector3(), self.vector3()]);
        m += Matrix3x3::identity().scaled(Vector3::uniform(4.0));
        m
    }

    fn matrix4x4(&mut self) -> Matrix4x4 {
        let mut m = Matrix4x4::from_columns([self.vector4(), self.vector4(), self.vector4(), self.vector4()]);
        for i in 0..4 {
            m[i][i] += 4.0;
        }
        m
    }
}

const SAMPLES: usize = 64;

#[test]
fn test_identity_laws() {
    let mut rng = Lcg(1);
    for _ in 0..SAMPLES {
        let v = rng.vector3();
        let a = rng.matrix3x3();
        assert_eq!(v * Matrix3x3::identity(), v);
        assert_eq!(a * Matrix3x3::identity(), a);

        let w = rng.vector4();
        let b = rng.matrix4x4();
        assert_eq!(w * Matrix4x4::identity(), w);
        assert_eq!(b * Matrix4x4::identity(), b);
    }
}

#[test]
fn test_inverse_law() {
    let mut rng = Lcg(2);
    for _ in 0..SAMPLES {
        let a = rng.matrix3x3();
        assert_abs_diff_eq!(a * a.inversed(), Matrix3x3::identity(), epsilon = 1e-3);

        let b = rng.matrix4x4();
        assert_abs_diff_eq!(b * b.inversed(), Matrix4x4::identity(), epsilon = 1e-3);
    }
}

#[test]
fn test_inverse_matches_glam() {
    let mut rng = Lcg(3);
    for _ in 0..SAMPLES {
        let a = rng.matrix3x3();
        let expected: Matrix3x3 = glam::Mat3::from(a).inverse().into();
        assert_abs_diff_eq!(a.inversed(), expected, epsilon = 1e-4);

        let b = rng.matrix4x4();
        let expected: Matrix4x4 = glam::Mat4::from(b).inverse().into();
        assert_abs_diff_eq!(b.inversed(), expected, epsilon = 1e-4);
        assert_abs_diff_eq!(b.determinant(), glam::Mat4::from(b).determinant(), epsilon = 1e-2);
    }
}

#[test]
fn test_transpose_involution() {
    let mut rng = Lcg(4);
    for _ in 0..SAMPLES {
        let a = rng.matrix3x3();
        assert_eq!(a.transposed().transposed(), a);
        let b = rng.matrix4x4();
        assert_eq!(b.transposed().transposed(), b);
    }
}

#[test]
fn test_products_match_glam() {
    let mut rng = Lcg(5);
    for _ in 0..SAMPLES {
        let (a, b) = (rng.matrix3x3(), rng.matrix3x3());
        let expected: Matrix3x3 = (glam::Mat3::from(a) * glam::Mat3::from(b)).into();
        assert_abs_diff_eq!(a * b, expected, epsilon = 1e-4);

        let (c, d) = (rng.matrix4x4(), rng.matrix4x4());
        let expected: Matrix4x4 = (glam::Mat4::from(c) * glam::Mat4::from(d)).into();
        assert_abs_diff_eq!(c * d, expected, epsilon = 1e-4);
    }
}

#[test]
fn test_row_vector_is_transposed_column_product() {
    let mut rng = Lcg(6);
    for _ in 0..SAMPLES {
        let v = rng.vector3();
        let a = rng.matrix3x3();
        let expected: Vector3 = (glam::Mat3::from(a).transpose() * glam::Vec3::from(v)).into();
        assert_abs_diff_eq!(v * a, expected, epsilon = 1e-4);

        let b = rng.matrix4x4();
        let expected: Vector4 = (glam::Mat4::from(b).transpose() * glam::Vec3::from(v).extend(1.0)).into();
        assert_abs_diff_eq!(v * b, expected, epsilon = 1e-4);
    }
}

#[test]
fn test_row_vector_chaining_is_associative() {
    let mut rng = Lcg(7);
    for _ in 0..SAMPLES {
        let v = rng.vector3();
        let (a, b, c) = (rng.matrix3x3(), rng.matrix3x3(), rng.matrix3x3());
        assert_abs_diff_eq!(((v * a) * b) * c, v * (a * b * c), epsilon = 1e-2);

        let w = rng.vector4();
        let (d, e) = (rng.matrix4x4(), rng.matrix4x4());
        assert_abs_diff_eq!((w * d) * e, w * (d * e), epsilon = 1e-2);
    }
}

#[test]
fn test_rotation_preserves_length() {
    let mut rng = Lcg(8);
    for _ in 0..SAMPLES {
        let v = rng.vector3() * 10.0;
        let axis = rng.vector3() + Vector3::uniform(2.0);
        let angle = rng.next() * 6.0;
        let base = transform::rotation(rng.next(), Vector3::axis_y());
        let rotated = v * base.rotated(angle, axis);
        assert_abs_diff_eq!(v.length(), rotated.length(), epsilon = 1e-3);
    }
}

#[test]
fn test_rotation_is_orthonormal() {
    let mut rng = Lcg(9);
    for _ in 0..SAMPLES {
        let axis = rng.vector3() + Vector3::new(0.0, 0.0, 2.0);
        let r = transform::rotation(rng.next() * 3.0, axis);
        assert_abs_diff_eq!(r * r.transposed(), Matrix3x3::identity(), epsilon = 1e-4);
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-4);
        // The axis is left fixed.
        assert_abs_diff_eq!(axis * r, axis, epsilon = 1e-4);
    }
}

#[test]
fn test_affine_inverse_undoes_transform() {
    let mut rng = Lcg(10);
    for _ in 0..SAMPLES {
        let rotation = transform::rotation(rng.next() * 3.0, rng.vector3() + Vector3::uniform(2.0));
        let scale = Vector3::uniform(1.5) + rng.vector3() * 0.5;
        let translate = rng.vector3() * 5.0;
        let m = transform::affine(&rotation, scale, translate);
        assert_eq!(m.row(3), Vector4::from_vector3(translate, 1.0));

        let p = rng.vector3();
        let back = (p * m) * m.inversed();
        assert_abs_diff_eq!(back, Vector4::from_vector3(p, 1.0), epsilon = 1e-3);
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(Vector3::new(1.0, 2.0, 2.0).length(), 3.0);
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0).cross_product(&Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );

    let m = transform::affine(&Matrix3x3::identity(), Vector3::new(2.0, 3.0, 4.0), Vector3::zero());
    assert_eq!(Vector3::new(-1.0, 5.0, 7.0) * m, Vector4::new(-2.0, 15.0, 28.0, 1.0));

    let t = transform::affine(&Matrix3x3::identity(), Vector3::uniform(1.0), Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(Vector3::zero() * t, Vector4::new(2.0, 3.0, 4.0, 1.0));

    let s = Matrix3x3::from_columns([
        Vector3::new(0.6, 0.2, 0.3),
        Vector3::new(0.2, 0.7, 0.5),
        Vector3::new(0.3, 0.5, 0.7),
    ]);
    let expected = Matrix3x3::from_columns([
        Vector3::new(2.1239, 0.0885, -0.9735),
        Vector3::new(0.0885, 2.9204, -2.1239),
        Vector3::new(-0.9735, -2.1239, 3.3628),
    ]);
    assert_abs_diff_eq!(s.inversed(), expected, epsilon = 1e-3);
    assert_abs_diff_eq!(s * s.inversed(), Matrix3x3::identity(), epsilon = 1e-3);
}

#[test]
fn test_layout_is_packed_floats() {
    use core::mem::size_of;
    assert_eq!(size_of::<Vector3>(), 12);
    assert_eq!(size_of::<Vector4>(), 16);
    assert_eq!(size_of::<Matrix3x3>(), 36);
    assert_eq!(size_of::<Matrix4x4>(), 64);

    let points = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&points);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
