//! # Plane Frame
//!
//! One-shot rotation+translation mapping an arbitrary plane onto Z=0.
//! The planar hull builds a frame once from the discovered plane and
//! keeps it so perimeter points can be lifted back to 3D and arbitrary
//! 3D query points can be tested later.

use glam::{DQuat, DVec2, DVec3};

/// Rigid mapping of a plane in 3D onto the Z=0 plane.
///
/// The rotation carries the plane normal onto +Z; `z_offset` is the
/// height at which the rotated plane sits, so subtracting it lands the
/// plane exactly on Z=0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    rotation: DQuat,
    z_offset: f64,
}

impl PlaneFrame {
    /// Builds a frame from a point on the plane and the plane normal.
    ///
    /// The normal does not need to be unit length, only non-zero. The
    /// anti-parallel case (normal pointing along -Z) is resolved by
    /// `DQuat::from_rotation_arc`, which picks an orthogonal rotation
    /// axis for 180-degree arcs.
    pub fn from_normal(origin: DVec3, normal: DVec3) -> Self {
        let rotation = DQuat::from_rotation_arc(normal.normalize(), DVec3::Z);
        let z_offset = (rotation * origin).z;
        Self { rotation, z_offset }
    }

    /// Identity frame: the Z=0 plane maps onto itself.
    pub fn identity() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            z_offset: 0.0,
        }
    }

    /// Projects a 3D point into the plane's 2D coordinates.
    pub fn project(&self, point: DVec3) -> DVec2 {
        let rotated = self.rotation * point;
        DVec2::new(rotated.x, rotated.y)
    }

    /// Lifts a 2D point in plane coordinates back into 3D.
    pub fn lift(&self, point: DVec2) -> DVec3 {
        self.rotation
            .inverse()
            .mul_vec3(DVec3::new(point.x, point.y, self.z_offset))
    }

    /// Signed distance of a 3D point from the plane.
    pub fn distance_from_plane(&self, point: DVec3) -> f64 {
        (self.rotation * point).z - self.z_offset
    }
}
