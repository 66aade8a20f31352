//! Parallel per-element dispatch.
//!
//! Kernels are independent per particle, pair or body, so a batch is a plain
//! parallel map. Output `i` always corresponds to input `i`; any reduction
//! over neighbors stays with the caller.

use bevy::log::debug;
use bevy::math::{IVec3, Vec3};
use rayon::prelude::*;

use super::grid::get_cell;
use super::params::KernelParams;
use super::smoothing::{compute_scorr, poly6_value, spiky_gradient};

/// Applies `f` to every element in parallel, preserving order.
pub fn par_map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    debug!("dispatching kernel batch of {} elements", items.len());
    items.par_iter().map(f).collect()
}

/// Poly6 value for each pair distance.
pub fn batch_density(params: &KernelParams, distances: &[f32]) -> Vec<f32> {
    par_map(distances, |&s| poly6_value(params, s, params.h))
}

/// Spiky gradient for each pair displacement.
pub fn batch_spiky_gradient(params: &KernelParams, displacements: &[Vec3]) -> Vec<Vec3> {
    par_map(displacements, |&r| spiky_gradient(params, r, params.h))
}

/// Tensile correction for each pair displacement.
pub fn batch_scorr(params: &KernelParams, displacements: &[Vec3]) -> Vec<f32> {
    par_map(displacements, |&pos_ji| compute_scorr(params, pos_ji))
}

/// Grid cell for each particle position.
pub fn batch_cells(params: &KernelParams, positions: &[Vec3]) -> Vec<IVec3> {
    par_map(positions, |&pos| get_cell(params, pos))
}
