//! Numeric kernels for Position Based Fluids coupled with rigid bodies.
//!
//! Every function in this module is a pure transformation of its arguments:
//! no retained state, no allocation of shared data, no locking. The owning
//! simulation calls them once per particle, per neighbor pair, or per rigid
//! body, and is responsible for any aggregation over neighbors.
//!
//! # Architecture
//!
//! - [`params`]: Kernel configuration (support radius, normalization factors, grid)
//! - [`error`]: Configuration validation errors
//! - [`math`]: `lerp` and `clamp`
//! - [`smoothing`]: Poly6, Spiky gradient and the scorr correction term
//! - [`grid`]: Cell lookup and bounds checks
//! - [`rotation`]: Quaternion algebra in `(x, y, z, w)` layout
//! - [`inertia`]: Analytic inertia tensors
//! - [`collision`]: Post-collision velocities
//! - [`sdf`]: Signed distance and normals for simple colliders
//! - [`batch`]: Parallel per-element dispatch
//! - [`plugin`]: Bevy plugin that installs [`params::KernelParams`]
//!
//! # Degenerate input
//!
//! Kernels do not detect degenerate geometry. Coincident points, points on a
//! torus axis, rotations near 180° passed through matrix form and a zero
//! scorr reference value all yield NaN or infinity instead of an error.
//! Screen configuration up front with [`params::KernelParams::validate`].

pub mod params;
pub mod error;
pub mod math;
pub mod smoothing;
pub mod grid;
pub mod rotation;
pub mod inertia;
pub mod collision;
pub mod sdf;
pub mod batch;
pub mod plugin;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::params::*;
    pub use super::error::*;
    pub use super::math::*;
    pub use super::smoothing::*;
    pub use super::grid::*;
    pub use super::rotation::*;
    pub use super::inertia::*;
    pub use super::collision::*;
    pub use super::sdf::*;
    pub use super::batch::*;
    pub use super::plugin::*;
}
