//! Signed distance fields for simple rigid colliders.
//!
//! Distances are negative inside the shape and positive outside. Normals
//! point away from the surface.

use bevy::prelude::*;

use super::inertia::{inertia_ball, inertia_torus};

/// Signed distance from `p` to the sphere of center `c` and radius `r`, with
/// the outward normal.
///
/// The normal is NaN when `p == c`.
#[inline]
pub fn get_sphere_sdf_normal(c: Vec3, r: f32, p: Vec3) -> (f32, Vec3) {
    let dp = p - c;
    let distance_to_center = dp.length();
    let signed_distance_to_surface = distance_to_center - r;
    let normal = dp / distance_to_center;
    (signed_distance_to_surface, normal)
}

/// Signed distance from `pos` to a torus centered at the origin around the
/// z axis, with major radius `big_r` and tube radius `r`, plus its normal.
///
/// The normal comes from the gradient of the implicit surface and is NaN on
/// the z axis, where `sqrt(x² + y²) = 0`.
pub fn get_torus_sdf_normal(big_r: f32, r: f32, pos: Vec3) -> (f32, Vec3) {
    let rho = (pos.x * pos.x + pos.y * pos.y).sqrt();
    let d = rho - big_r;
    let signed_distance_to_surface = (d * d + pos.z * pos.z).sqrt() - r;
    let normal = Vec3::new(d * pos.x / rho, d * pos.y / rho, pos.z).normalize();
    (signed_distance_to_surface, normal)
}

/// A rigid collider shape with an analytic SDF.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub enum SdfCollider {
    /// Solid sphere.
    Sphere { center: Vec3, radius: f32 },
    /// Torus around the z axis through the origin of its local frame.
    Torus { major_radius: f32, minor_radius: f32 },
}

impl SdfCollider {
    /// Signed distance and outward normal at `p`.
    pub fn sdf_normal(&self, p: Vec3) -> (f32, Vec3) {
        match *self {
            SdfCollider::Sphere { center, radius } => get_sphere_sdf_normal(center, radius, p),
            SdfCollider::Torus {
                major_radius,
                minor_radius,
            } => get_torus_sdf_normal(major_radius, minor_radius, p),
        }
    }

    /// Check if a point is inside the collider.
    pub fn contains(&self, p: Vec3) -> bool {
        self.sdf_normal(p).0 < 0.0
    }

    /// Inertia tensor of the solid shape with mass `mass`, about its center.
    pub fn inertia(&self, mass: f32) -> Mat3 {
        match *self {
            SdfCollider::Sphere { radius, .. } => inertia_ball(mass, radius),
            SdfCollider::Torus {
                major_radius,
                minor_radius,
            } => inertia_torus(mass, major_radius, minor_radius),
        }
    }
}
