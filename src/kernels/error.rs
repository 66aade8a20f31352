//! Configuration errors.

use thiserror::Error;

/// Reasons a [`KernelParams`](super::params::KernelParams) is rejected by
/// [`validate`](super::params::KernelParams::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// Kernel support radius is zero, negative or not finite.
    #[error("smoothing radius must be positive and finite, got {0}")]
    InvalidSmoothingRadius(f32),

    /// Reciprocal cell width is zero, negative or not finite.
    #[error("cell reciprocal must be positive and finite, got {0}")]
    InvalidCellReciprocal(f32),

    /// One of the grid axes has no cells.
    #[error("grid size must be non-zero on every axis, got {0:?}")]
    EmptyGrid([u32; 3]),

    /// The scorr reference distance falls outside the kernel support, which
    /// makes the reference kernel value zero.
    #[error("scorr delta q coefficient must lie in [0, 1), got {0}")]
    InvalidDeltaQ(f32),

    /// Damping controller is negative or not finite.
    #[error("smoothen controller must be non-negative and finite, got {0}")]
    InvalidSmoothenController(f32),
}
