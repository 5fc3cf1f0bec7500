//! Gauss-Seidel relaxation and implicit diffusion.
//!
//! Solves `c * x - a * (sum of 6 neighbours) = x0` on the interior with a fixed
//! number of in-place sweeps.

use crate::boundary::{enforce_boundary, BoundaryKind};
use crate::grid::GridDims;

/// Relax `x` towards the solution of `c * x - a * Σneighbours(x) = x0`.
///
/// Each sweep updates interior cells in storage order and reads neighbours
/// from `x` itself, so cells later in the sweep already see this sweep's
/// values (Gauss-Seidel, not Jacobi). Running sweeps concurrently would need a
/// second buffer or a red-black ordering and converges differently.
///
/// Boundary values are rewritten after every sweep. `x` doubles as the initial
/// guess.
pub fn relax(
    dims: GridDims,
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iterations: usize,
) {
    assert!(c > 0.0, "relaxation denominator must be positive, got {}", c);
    debug_assert_eq!(x.len(), dims.cell_count());
    debug_assert_eq!(x0.len(), dims.cell_count());

    let c_recip = 1.0 / c;
    let sy = dims.stride_y();
    let sz = dims.stride_z();

    for _ in 0..iterations {
        for z in dims.interior() {
            for y in dims.interior() {
                for xi in dims.interior() {
                    let idx = dims.index(xi, y, z);
                    let neighbours = x[idx + 1]
                        + x[idx - 1]
                        + x[idx + sy]
                        + x[idx - sy]
                        + x[idx + sz]
                        + x[idx - sz];
                    x[idx] = (x0[idx] + a * neighbours) * c_recip;
                }
            }
        }
        enforce_boundary(dims, kind, x);
    }
}

/// Implicit diffusion of `x0` into `x` at `rate` over one timestep.
///
/// The `(N - 2)²` factor keeps the physical rate independent of resolution.
pub fn diffuse(
    dims: GridDims,
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    rate: f32,
    dt: f32,
    iterations: usize,
) {
    let n = dims.interior_size() as f32;
    let a = dt * rate * n * n;
    relax(dims, kind, x, x0, a, 1.0 + 6.0 * a, iterations);
}
