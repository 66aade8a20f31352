//! Bevy plugin for the kernel library.

use bevy::prelude::*;

use super::params::KernelParams;

/// Plugin that installs [`KernelParams`] as a resource for simulation systems.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use pbf_kernels::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(KernelsPlugin::default())
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct KernelsPlugin {
    /// Parameters inserted into the app.
    pub params: KernelParams,
}

impl KernelsPlugin {
    /// Create the plugin with custom parameters.
    pub fn with_params(params: KernelParams) -> Self {
        Self { params }
    }
}

impl Plugin for KernelsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<KernelParams>();

        match self.params.validate() {
            Ok(()) => debug!("kernel params: {:?}", self.params),
            Err(err) => error!("invalid kernel params, kernels may return NaN: {err}"),
        }

        app.insert_resource(self.params.clone());
    }
}
