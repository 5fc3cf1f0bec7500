//! Semi-Lagrangian advection on the cell-centred grid.

use crate::boundary::{enforce_boundary, BoundaryKind};
use crate::grid::{GridDims, VelocityField};

/// Transport `d0` along `flow` for one timestep, writing the result into `d`.
///
/// Each interior cell is traced backwards by `dt * (N - 2)` grid units and the
/// source value is trilinearly interpolated there. Unconditionally stable, at
/// the cost of some numerical smoothing.
///
/// Traced positions are clamped to `[0.5, N - 1.5]` so all 8 samples stay
/// inside the array.
pub fn advect(
    dims: GridDims,
    kind: BoundaryKind,
    d: &mut [f32],
    d0: &[f32],
    flow: &VelocityField,
    dt: f32,
) {
    debug_assert_eq!(d.len(), dims.cell_count());
    debug_assert_eq!(d0.len(), dims.cell_count());
    debug_assert_eq!(flow.len(), dims.cell_count());

    let dt0 = dt * dims.interior_size() as f32;
    let lo = 0.5;
    let hi = dims.size() as f32 - 1.5;

    for z in dims.interior() {
        for y in dims.interior() {
            for x in dims.interior() {
                let idx = dims.index(x, y, z);

                // Backtrace
                let px = (x as f32 - dt0 * flow.x[idx]).clamp(lo, hi);
                let py = (y as f32 - dt0 * flow.y[idx]).clamp(lo, hi);
                let pz = (z as f32 - dt0 * flow.z[idx]).clamp(lo, hi);

                d[idx] = sample_trilinear(dims, d0, px, py, pz);
            }
        }
    }

    enforce_boundary(dims, kind, d);
}

/// Trilinear interpolation of `field` at a fractional grid position.
///
/// Positions are clamped to `[0, N - 2]` on every axis so the upper
/// neighbour of each sample stays inside the grid.
#[inline]
pub fn sample_trilinear(dims: GridDims, field: &[f32], px: f32, py: f32, pz: f32) -> f32 {
    let hi = (dims.size() - 2) as f32;
    let (px, py, pz) = (px.clamp(0.0, hi), py.clamp(0.0, hi), pz.clamp(0.0, hi));

    let i0 = px.floor() as usize;
    let j0 = py.floor() as usize;
    let k0 = pz.floor() as usize;

    let s1 = px - i0 as f32;
    let s0 = 1.0 - s1;
    let t1 = py - j0 as f32;
    let t0 = 1.0 - t1;
    let u1 = pz - k0 as f32;
    let u0 = 1.0 - u1;

    let at = |i: usize, j: usize, k: usize| field[dims.index(i, j, k)];

    s0 * (t0 * (u0 * at(i0, j0, k0) + u1 * at(i0, j0, k0 + 1))
        + t1 * (u0 * at(i0, j0 + 1, k0) + u1 * at(i0, j0 + 1, k0 + 1)))
        + s1 * (t0 * (u0 * at(i0 + 1, j0, k0) + u1 * at(i0 + 1, j0, k0 + 1))
            + t1 * (u0 * at(i0 + 1, j0 + 1, k0) + u1 * at(i0 + 1, j0 + 1, k0 + 1)))
}
