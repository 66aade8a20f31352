//! PBF Kernels - numeric building blocks for Position Based Fluids in Bevy
//!
//! This library provides the per-element math a particle fluid simulation
//! coupled with rigid bodies needs, written as pure functions so they can be
//! called from any system, any thread, or a parallel batch.
//!
//! # Features
//!
//! - **Smoothing Kernels**: Poly6 density kernel, Spiky gradient, tensile-instability correction
//! - **Spatial Grid**: Position to cell mapping and bounds checks for neighbor search
//! - **Rotation Algebra**: Quaternion product, inverse and matrix conversions
//! - **Rigid Bodies**: Analytic inertia tensors for balls and tori
//! - **Collision Response**: Boundary bounce and sphere-sphere restitution
//! - **SDF Queries**: Signed distance and normal for sphere and torus colliders
//! - **Batch Dispatch**: Order-preserving parallel map over particle batches
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use pbf_kernels::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(MinimalPlugins)
//!         .add_plugins(KernelsPlugin::with_params(KernelParams::default().with_smoothing_radius(1.1)))
//!         .add_systems(Update, density_probe)
//!         .run();
//! }
//!
//! fn density_probe(params: Res<KernelParams>) {
//!     let w = poly6_value(&params, 0.5, params.h);
//!     let correction = compute_scorr(&params, Vec3::new(0.5, 0.0, 0.0));
//!     info!("W(0.5) = {w}, scorr = {correction}");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`kernels`]: Kernel library
//!   - [`kernels::params`]: Kernel configuration
//!   - [`kernels::math`]: Scalar helpers
//!   - [`kernels::smoothing`]: SPH smoothing kernels
//!   - [`kernels::grid`]: Spatial grid indexing
//!   - [`kernels::rotation`]: Quaternion algebra
//!   - [`kernels::inertia`]: Inertia tensors
//!   - [`kernels::collision`]: Collision response
//!   - [`kernels::sdf`]: Signed distance fields
//!   - [`kernels::batch`]: Parallel batch dispatch
//!   - [`kernels::plugin`]: Bevy plugin

pub mod kernels;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::kernels::prelude::*;
}
