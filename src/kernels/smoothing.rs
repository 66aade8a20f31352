//! SPH smoothing kernels for PBF.
//!
//! Implements the kernels used by "Position Based Fluids" (Macklin & Müller, 2013):
//! Poly6 for density estimation, the Spiky gradient for constraint gradients
//! and the artificial pressure term `s_corr` (Eq. 13) against particle clumping.

use bevy::prelude::*;

use super::params::KernelParams;

/// Poly6 kernel for density estimation.
///
/// W(s, h) = poly6_factor * ((h² - s²) / h³)³ for 0 ≤ s < h, 0 otherwise.
/// Non-zero at `s = 0` and continuous at `s = h`.
#[inline]
pub fn poly6_value(params: &KernelParams, s: f32, h: f32) -> f32 {
    if !(0.0 <= s && s < h) {
        return 0.0;
    }
    let x = (h * h - s * s) / (h * h * h);
    params.poly6_factor * x * x * x
}

/// Gradient of the Spiky kernel.
///
/// ∇W(r, h) = spiky_grad_factor * ((h - |r|) / h³)² * (r / |r|) for 0 < |r| < h.
/// `r` points from the neighbor to the particle. Returns zero at `|r| = 0`,
/// where the direction is undefined.
#[inline]
pub fn spiky_gradient(params: &KernelParams, r: Vec3, h: f32) -> Vec3 {
    let r_len = r.length();
    if !(0.0 < r_len && r_len < h) {
        return Vec3::ZERO;
    }
    let x = (h - r_len) / (h * h * h);
    let g_factor = params.spiky_grad_factor * x * x;
    r * g_factor / r_len
}

/// Artificial pressure term for the tensile instability (PBF Eq. 13).
///
/// s_corr = -k * (W(|p_ji|) / W(Δq))⁴ with Δq = `corr_delta_q_coeff * h`.
/// Equals `-corr_k` at `|p_ji| = Δq` and grows in magnitude as particles
/// approach. Undefined (division by zero) if `corr_delta_q_coeff >= 1`.
#[inline]
pub fn compute_scorr(params: &KernelParams, pos_ji: Vec3) -> f32 {
    let h = params.h;
    let mut x = poly6_value(params, pos_ji.length(), h)
        / poly6_value(params, params.corr_delta_q_coeff * h, h);
    // x⁴
    x = x * x;
    x = x * x;
    -params.corr_k * x
}
