//! Quaternion algebra for rigid-body orientation.
//!
//! Quaternions use the `(x, y, z, w)` layout of [`Quat`] and stand for
//! `w + xi + yj + zk`; the identity rotation is `(0, 0, 0, 1)`. All formulas
//! are spelled out component-wise because a flipped sign silently inverts
//! the rotation direction. None of these functions renormalize: after
//! repeated products call [`quaternion_normalize`].

use bevy::prelude::*;

/// Embeds a vector as a pure quaternion `(v.x, v.y, v.z, 0)`.
#[inline]
pub fn vector_to_quat(v: Vec3) -> Quat {
    Quat::from_xyzw(v.x, v.y, v.z, 0.0)
}

/// Hamilton product `p * q`: the rotation `q` followed by `p`.
#[inline]
pub fn quaternion_multiply(p: Quat, q: Quat) -> Quat {
    Quat::from_xyzw(
        p.x * q.w + p.w * q.x + p.y * q.z - p.z * q.y,
        p.y * q.w + p.w * q.y + p.z * q.x - p.x * q.z,
        p.z * q.w + p.w * q.z + p.x * q.y - p.y * q.x,
        p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
    )
}

/// Rotation matrix of a unit quaternion.
///
/// `q` must be normalized; the result is not orthonormal otherwise.
pub fn quaternion_to_matrix(q: Quat) -> Mat3 {
    let r00 = 2.0 * (q.w * q.w + q.x * q.x) - 1.0;
    let r01 = 2.0 * (q.x * q.y - q.w * q.z);
    let r02 = 2.0 * (q.x * q.z + q.w * q.y);

    let r10 = 2.0 * (q.x * q.y + q.w * q.z);
    let r11 = 2.0 * (q.w * q.w + q.y * q.y) - 1.0;
    let r12 = 2.0 * (q.y * q.z - q.w * q.x);

    let r20 = 2.0 * (q.x * q.z - q.w * q.y);
    let r21 = 2.0 * (q.y * q.z + q.w * q.x);
    let r22 = 2.0 * (q.w * q.w + q.z * q.z) - 1.0;

    // Mat3 is column-major
    Mat3::from_cols(
        Vec3::new(r00, r10, r20),
        Vec3::new(r01, r11, r21),
        Vec3::new(r02, r12, r22),
    )
}

/// Quaternion of a rotation matrix, by the trace formula.
///
/// `qw = 0.5 * sqrt(1 + trace)` and the vector part divides off-diagonal
/// differences by `4 * qw`. This blows up for rotations near 180°, where
/// `qw` approaches zero, and yields NaN when `1 + trace < 0`.
pub fn matrix_to_quaternion(m: Mat3) -> Quat {
    let at = |row: usize, col: usize| m.col(col)[row];

    let qw = 0.5 * (1.0 + at(0, 0) + at(1, 1) + at(2, 2)).sqrt();
    let qx = (at(2, 1) - at(1, 2)) / (4.0 * qw);
    let qy = (at(0, 2) - at(2, 0)) / (4.0 * qw);
    let qz = (at(1, 0) - at(0, 1)) / (4.0 * qw);

    Quat::from_xyzw(qx, qy, qz, qw)
}

/// Conjugate of `q` divided by its norm.
///
/// This is the inverse only for unit quaternions; a general inverse divides
/// by the squared norm.
#[inline]
pub fn quaternion_inverse(q: Quat) -> Quat {
    Quat::from_xyzw(-q.x, -q.y, -q.z, q.w) / q.length()
}

/// Rescales `q` to unit length to remove drift.
#[inline]
pub fn quaternion_normalize(q: Quat) -> Quat {
    q / q.length()
}
