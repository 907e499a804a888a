//! Bounding volumes.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Matrix4x4, Vector3};

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Aabb {
    #[inline]
    #[must_use]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size along each axis.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.size() * 0.5
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Inclusive on every face.
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Smallest box enclosing both.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    /// The eight corners, `x` varying fastest.
    #[must_use]
    pub fn corners(&self) -> [Vector3; 8] {
        core::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

/// Oriented bounding box: a local-space [`Aabb`] placed by `tm`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Oobb {
    pub tm: Matrix4x4,
    pub aabb: Aabb,
}

impl Oobb {
    #[inline]
    #[must_use]
    pub const fn new(tm: Matrix4x4, aabb: Aabb) -> Self {
        Self { tm, aabb }
    }

    /// Maps a box-local point to world space as `local * tm`.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, local: Vector3) -> Vector3 {
        (local * self.tm).truncate()
    }

    #[must_use]
    pub fn world_corners(&self) -> [Vector3; 8] {
        self.aabb.corners().map(|c| self.transform_point(c))
    }
}
