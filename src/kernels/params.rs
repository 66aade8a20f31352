//! Kernel configuration.
//!
//! These constants are fixed when the simulation is set up and read by every
//! kernel call. They replace the process-wide globals a scripting version of
//! these kernels would use, so each kernel can be tested with its own values.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::error::ParamsError;

/// Default kernel support radius.
pub const DEFAULT_SMOOTHING_RADIUS: f32 = 1.1;

/// Default grid cell width. Slightly larger than `2 * h` so a 3x3x3 cell
/// block always covers the kernel support.
pub const DEFAULT_CELL_SIZE: f32 = 2.51;

/// Default simulation domain edge length.
pub const DEFAULT_DOMAIN_EXTENT: f32 = 40.0;

/// Constants shared by all kernels.
///
/// The normalization factors do not depend on `h`:
/// [`poly6_value`](super::smoothing::poly6_value) evaluates
/// `poly6_factor * ((h² - s²) / h³)³`, so `poly6_factor` does not carry any
/// power of `h`.
#[derive(Resource, Clone, Debug, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct KernelParams {
    /// Smoothing kernel support radius.
    pub h: f32,

    /// Poly6 normalization, `315 / 64π` for the reference setup.
    pub poly6_factor: f32,

    /// Spiky gradient normalization, `-45 / π` for the reference setup.
    /// Negative so the gradient points from particle to neighbor.
    pub spiky_grad_factor: f32,

    /// Reference distance of the scorr term as a fraction of `h`.
    /// Typical range: 0.1 - 0.3
    pub corr_delta_q_coeff: f32,

    /// Strength of the scorr term.
    pub corr_k: f32,

    /// Reciprocal of the grid cell width.
    pub cell_recpr: f32,

    /// Number of grid cells per axis.
    pub grid_size: UVec3,

    /// Tuning for the boundary bounce damping curve.
    pub smoothen_controller: f32,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self::for_domain(Vec3::splat(DEFAULT_DOMAIN_EXTENT), DEFAULT_CELL_SIZE)
    }
}

impl KernelParams {
    /// Creates parameters whose grid covers `[0, domain_extent)` with cells
    /// of width `cell_size`.
    pub fn for_domain(domain_extent: Vec3, cell_size: f32) -> Self {
        let cell_recpr = 1.0 / cell_size;
        let grid_size = (domain_extent * cell_recpr).ceil().as_uvec3();

        Self {
            h: DEFAULT_SMOOTHING_RADIUS,
            poly6_factor: 315.0 / (64.0 * PI),
            spiky_grad_factor: -45.0 / PI,
            corr_delta_q_coeff: 0.3,
            corr_k: 0.001,
            cell_recpr,
            grid_size,
            smoothen_controller: 1.0,
        }
    }

    /// Set the support radius.
    pub fn with_smoothing_radius(mut self, h: f32) -> Self {
        self.h = h;
        self
    }

    /// Set the tensile-instability correction tuning.
    pub fn with_scorr(mut self, delta_q_coeff: f32, k: f32) -> Self {
        self.corr_delta_q_coeff = delta_q_coeff;
        self.corr_k = k;
        self
    }

    /// Set the boundary damping controller.
    pub fn with_smoothen_controller(mut self, controller: f32) -> Self {
        self.smoothen_controller = controller;
        self
    }

    /// Width of one grid cell.
    pub fn cell_size(&self) -> f32 {
        1.0 / self.cell_recpr
    }

    /// Extent of the region covered by the grid, starting at the origin.
    pub fn domain_extent(&self) -> Vec3 {
        self.grid_size.as_vec3() * self.cell_size()
    }

    /// Checks that the constants describe a usable configuration.
    ///
    /// Kernels never call this; run it once at setup.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.h.is_finite() && self.h > 0.0) {
            return Err(ParamsError::InvalidSmoothingRadius(self.h));
        }
        if !(self.cell_recpr.is_finite() && self.cell_recpr > 0.0) {
            return Err(ParamsError::InvalidCellReciprocal(self.cell_recpr));
        }
        if self.grid_size.cmpeq(UVec3::ZERO).any() {
            return Err(ParamsError::EmptyGrid(self.grid_size.to_array()));
        }
        if !(0.0..1.0).contains(&self.corr_delta_q_coeff) {
            return Err(ParamsError::InvalidDeltaQ(self.corr_delta_q_coeff));
        }
        if !(self.smoothen_controller.is_finite() && self.smoothen_controller >= 0.0) {
            return Err(ParamsError::InvalidSmoothenController(
                self.smoothen_controller,
            ));
        }
        Ok(())
    }
}

/// GPU-compatible uniform buffer carrying the kernel constants.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuKernelParams {
    // Kernel parameters
    pub h: f32,
    pub poly6_factor: f32,
    pub spiky_grad_factor: f32,
    pub corr_delta_q_coeff: f32,

    pub corr_k: f32,
    pub cell_recpr: f32,
    pub smoothen_controller: f32,
    pub _padding0: f32,

    // Grid parameters
    pub grid_size: [u32; 3],
    pub _padding1: u32,
}

impl From<&KernelParams> for GpuKernelParams {
    fn from(params: &KernelParams) -> Self {
        Self {
            h: params.h,
            poly6_factor: params.poly6_factor,
            spiky_grad_factor: params.spiky_grad_factor,
            corr_delta_q_coeff: params.corr_delta_q_coeff,

            corr_k: params.corr_k,
            cell_recpr: params.cell_recpr,
            smoothen_controller: params.smoothen_controller,
            _padding0: 0.0,

            grid_size: params.grid_size.to_array(),
            _padding1: 0,
        }
    }
}
