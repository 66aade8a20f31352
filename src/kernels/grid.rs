//! Spatial grid indexing for neighbor search.
//!
//! A uniform grid with its origin at the world origin, cells of width
//! `1 / cell_recpr` and `grid_size` cells per axis. Only addressing lives
//! here; building and querying neighbor lists is the simulation's job.

use bevy::prelude::*;

use super::params::KernelParams;

/// Cell coordinate of a position.
///
/// Truncates `pos * cell_recpr` toward zero per component, so positions in
/// `(-cell_size, 0)` share cell 0 with `[0, cell_size)`. Keep the simulation
/// domain non-negative.
#[inline]
pub fn get_cell(params: &KernelParams, pos: Vec3) -> IVec3 {
    (pos * params.cell_recpr).as_ivec3()
}

/// Check if a cell coordinate is within the grid bounds.
#[inline]
pub fn is_in_grid(params: &KernelParams, c: IVec3) -> bool {
    c.x >= 0
        && c.y >= 0
        && c.z >= 0
        && (c.x as u32) < params.grid_size.x
        && (c.y as u32) < params.grid_size.y
        && (c.z as u32) < params.grid_size.z
}

/// Linear index of an in-grid cell, x varying fastest.
///
/// Returns `None` for cells outside the grid.
#[inline]
pub fn cell_to_index(params: &KernelParams, c: IVec3) -> Option<usize> {
    if !is_in_grid(params, c) {
        return None;
    }
    let size = params.grid_size;
    Some(
        (c.z as usize * size.y as usize + c.y as usize) * size.x as usize + c.x as usize,
    )
}

/// Get neighboring cell offsets for 3x3x3 neighborhood.
pub fn neighbor_offsets() -> &'static [IVec3; 27] {
    static OFFSETS: [IVec3; 27] = {
        let mut offsets = [IVec3::ZERO; 27];
        let mut i = 0;
        while i < 27 {
            offsets[i] = IVec3::new(i as i32 / 9 - 1, (i as i32 / 3) % 3 - 1, i as i32 % 3 - 1);
            i += 1;
        }
        offsets
    };
    &OFFSETS
}

/// The in-grid cells of the 3x3x3 block around `c`, including `c` itself.
pub fn neighbor_cells(params: &KernelParams, c: IVec3) -> impl Iterator<Item = IVec3> + '_ {
    neighbor_offsets()
        .iter()
        .map(move |offset| c + *offset)
        .filter(move |cell| is_in_grid(params, *cell))
}
