//! Post-collision velocity response.
//!
//! `eps` is the restitution coefficient throughout: 1 keeps the normal
//! velocity (elastic), 0 removes it (inelastic along the normal).

use bevy::prelude::*;

use super::params::KernelParams;

/// Damping curve applied to the normal speed of a boundary bounce.
///
/// Intended to curve small normal speeds down to zero (`clamp(|x| / c, 0, 1) * x`)
/// to stop endless micro-bounces from discrete time stepping. Currently the
/// identity, so `c` has no effect.
#[inline]
pub fn smoothen(x: f32, _c: f32) -> f32 {
    x
}

/// Velocity of a particle after hitting a boundary moving with `v_boundary`.
///
/// The relative velocity is split along `normal` (unit length); the normal
/// part is reversed and scaled by `eps`, the tangential part is kept.
pub fn velocity_after_colliding_boundary(
    params: &KernelParams,
    v_before: Vec3,
    v_boundary: Vec3,
    normal: Vec3,
    eps: f32,
) -> Vec3 {
    let vrel_before = v_before - v_boundary;
    let vrel_before_orth_magnitude = vrel_before.dot(normal);
    let vrel_before_orth = vrel_before_orth_magnitude * normal;
    let vrel_before_para = vrel_before - vrel_before_orth;

    let vrel_after = vrel_before_para
        - eps * smoothen(vrel_before_orth_magnitude, params.smoothen_controller) * normal;
    vrel_after + v_boundary
}

/// Velocities of two spheres after colliding along `normal` (unit length).
///
/// The 1-D restitution formula is applied to each body's normal speed; the
/// tangential components pass through unchanged. Returns `(v1_after, v2_after)`.
pub fn sphere_collide_sphere(
    m1: f32,
    m2: f32,
    v1: Vec3,
    v2: Vec3,
    normal: Vec3,
    eps: f32,
) -> (Vec3, Vec3) {
    let v1_before_orth = v1.dot(normal);
    let v2_before_orth = v2.dot(normal);

    let total_mass = m1 + m2;
    let v1_after_orth =
        ((m1 - eps * m2) * v1_before_orth + (1.0 + eps) * m2 * v2_before_orth) / total_mass;
    let v2_after_orth =
        ((m2 - eps * m1) * v2_before_orth + (1.0 + eps) * m1 * v1_before_orth) / total_mass;

    let v1_after = (v1_after_orth - v1_before_orth) * normal + v1;
    let v2_after = (v2_after_orth - v2_before_orth) * normal + v2;
    (v1_after, v2_after)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_smoothen_is_identity() {
        assert_eq!(smoothen(0.01, 1.0), 0.01);
        assert_eq!(smoothen(-3.0, 0.5), -3.0);
    }

    #[test]
    fn test_boundary_elastic_reflection() {
        let params = KernelParams::default();

        let v = velocity_after_colliding_boundary(
            &params,
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
        );
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_boundary_inelastic_stick() {
        let params = KernelParams::default();

        let v = velocity_after_colliding_boundary(
            &params,
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            0.0,
        );
        assert_eq!(v, Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_boundary_oblique_normal() {
        let params = KernelParams::default();
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let v_before = Vec3::new(-1.0, -1.0, 0.5);

        let v = velocity_after_colliding_boundary(&params, v_before, Vec3::ZERO, normal, 0.5);

        // Tangential part kept, normal part reversed and halved
        let tangent_before = v_before - v_before.dot(normal) * normal;
        let tangent_after = v - v.dot(normal) * normal;
        assert!(tangent_after.abs_diff_eq(tangent_before, EPS));
        assert!((v.dot(normal) + 0.5 * v_before.dot(normal)).abs() < EPS);
    }

    #[test]
    fn test_boundary_moving_wall() {
        let params = KernelParams::default();

        let v = velocity_after_colliding_boundary(
            &params,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
            1.0,
        );
        assert_eq!(v, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_equal_mass_elastic_exchange() {
        let (v1, v2) = sphere_collide_sphere(
            2.0,
            2.0,
            Vec3::new(1.0, 5.0, 0.0),
            Vec3::new(-1.0, -2.0, 0.0),
            Vec3::X,
            1.0,
        );

        assert_eq!(v1, Vec3::new(-1.0, 5.0, 0.0));
        assert_eq!(v2, Vec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn test_elastic_conserves_momentum_and_energy() {
        let (m1, m2) = (1.0, 3.0);
        let normal = Vec3::new(1.0, -2.0, 2.0).normalize();
        let v1 = Vec3::new(2.0, 0.5, -1.0);
        let v2 = Vec3::new(-0.5, 1.0, 0.0);

        let (v1_after, v2_after) = sphere_collide_sphere(m1, m2, v1, v2, normal, 1.0);

        let momentum_before = m1 * v1 + m2 * v2;
        let momentum_after = m1 * v1_after + m2 * v2_after;
        assert!(momentum_after.abs_diff_eq(momentum_before, EPS));

        let energy_before = m1 * v1.length_squared() + m2 * v2.length_squared();
        let energy_after = m1 * v1_after.length_squared() + m2 * v2_after.length_squared();
        assert!((energy_after - energy_before).abs() < 1e-4);
    }

    #[test]
    fn test_inelastic_shares_normal_velocity() {
        let (m1, m2) = (1.0, 3.0);
        let (v1_after, v2_after) = sphere_collide_sphere(
            m1,
            m2,
            Vec3::new(4.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::X,
            0.0,
        );

        // Both move with the centre of mass speed along the normal
        assert!((v1_after.x - 1.0).abs() < EPS);
        assert!((v2_after.x - 1.0).abs() < EPS);
        assert_eq!(v1_after.y, 1.0);
        assert_eq!(v2_after.z, -1.0);
    }
}
