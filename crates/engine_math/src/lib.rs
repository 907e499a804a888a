//! # engine_math
//!
//! Fixed-size vector and matrix value types for the engine: positions,
//! directions and rigid/affine transforms.
//!
//! ## Conventions
//!
//! Matrices store their **basis slots** (columns in standard notation) and
//! compute rows on demand, so `m.entry(row, col) == m[col][row]`.
//!
//! Vectors are **row vectors** multiplied from the left: `v' = v * M`, with
//! `v'[c] = dot(v, M[c])`. A [`Vector3`] multiplied by a [`Matrix4x4`] is
//! extended with `w = 1`, which is how points pick up translation. The
//! translation of an affine transform built by [`transform::affine`]
//! therefore lives in the last *row*.
//!
//! ```rust
//! use engine_math::{transform, Matrix3x3, Vector3, Vector4};
//!
//! let m = transform::affine(&Matrix3x3::identity(), Vector3::uniform(1.0), Vector3::new(2.0, 3.0, 4.0));
//! assert_eq!(Vector3::zero() * m, Vector4::new(2.0, 3.0, 4.0, 1.0));
//! ```
//!
//! ## Degenerate input
//!
//! Nothing here reports numeric failure. Normalizing a zero vector or
//! inverting a singular matrix yields IEEE-754 infinities and NaNs. Indexing
//! out of range panics.
//!
//! Every type is `#[repr(C)]` and [`bytemuck::Pod`], with no padding, so
//! slices of them can be handed to graphics and physics APIs directly.

pub mod bounds;
pub mod error;
pub mod matrix3x3;
pub mod matrix4x4;
pub mod quaternion;
pub mod transform;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use bounds::{Aabb, Oobb};
pub use error::MathError;
pub use matrix3x3::{Matrix3x3, matrix3x3};
pub use matrix4x4::{Matrix4x4, matrix4x4};
pub use quaternion::Quaternion;
pub use transform::Transform3D;
pub use vector2::Vector2;
pub use vector3::{Vector3, vector3};
pub use vector4::{Vector4, vector4};

const _: () = {
    use core::mem::size_of;
    assert!(size_of::<Vector2>() == 2 * size_of::<f32>());
    assert!(size_of::<Vector3>() == 3 * size_of::<f32>());
    assert!(size_of::<Vector4>() == 4 * size_of::<f32>());
    assert!(size_of::<Quaternion>() == 4 * size_of::<f32>());
    assert!(size_of::<Matrix3x3>() == 9 * size_of::<f32>());
    assert!(size_of::<Matrix4x4>() == 16 * size_of::<f32>());
};
