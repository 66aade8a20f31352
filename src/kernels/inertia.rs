//! Analytic inertia tensors for rigid colliders.

use bevy::prelude::*;

/// The 3x3 identity matrix.
#[inline]
pub fn identity_mat() -> Mat3 {
    Mat3::IDENTITY
}

/// Solid ball of mass `m` and radius `r`: `(2/5) m r² I`.
#[inline]
pub fn inertia_ball(m: f32, r: f32) -> Mat3 {
    identity_mat() * (2.0 / 5.0 * m * r * r)
}

/// Solid torus of mass `m`, major radius `big_r` and tube radius `r`,
/// symmetric about the z axis.
///
/// The torus is `z² + (sqrt(x² + y²) - R)² <= r²`, giving
/// `Ixx = Iyy = m (5r² + 4R²) / 8` and `Izz = m (3r² + 4R²) / 4`.
pub fn inertia_torus(m: f32, big_r: f32, r: f32) -> Mat3 {
    let i_xy = 1.0 / 8.0 * m * (5.0 * r * r + 4.0 * big_r * big_r);
    let i_z = 1.0 / 4.0 * m * (3.0 * r * r + 4.0 * big_r * big_r);
    Mat3::from_diagonal(Vec3::new(i_xy, i_xy, i_z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mat() {
        assert_eq!(identity_mat() * Vec3::new(1.0, -2.0, 3.0), Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_inertia_ball() {
        let inertia = inertia_ball(5.0, 2.0);

        assert_eq!(inertia, Mat3::from_diagonal(Vec3::splat(8.0)));
    }

    #[test]
    fn test_inertia_torus() {
        let inertia = inertia_torus(8.0, 2.0, 1.0);

        // Ixy = 8/8 * (5 + 16), Iz = 8/4 * (3 + 16)
        assert_eq!(inertia.col(0), Vec3::new(21.0, 0.0, 0.0));
        assert_eq!(inertia.col(1), Vec3::new(0.0, 21.0, 0.0));
        assert_eq!(inertia.col(2), Vec3::new(0.0, 0.0, 38.0));
    }

    #[test]
    fn test_thin_ring_limit() {
        // r -> 0 approaches a hoop: Iz = m R², Ixy = m R² / 2
        let inertia = inertia_torus(3.0, 2.0, 0.0);

        assert!((inertia.z_axis.z - 12.0).abs() < 1e-5);
        assert!((inertia.x_axis.x - 6.0).abs() < 1e-5);
    }
}
