//! Pressure projection for the collocated velocity grid.
//!
//! Removes the divergent part of a velocity field: compute divergence, solve
//! `Laplacian(p) = div` by relaxation, subtract `grad(p)`.

use crate::boundary::{enforce_boundary, BoundaryKind};
use crate::grid::{Axis, GridDims, VelocityField};
use crate::solver::relax;

/// Central-difference divergence at an interior cell, in grid units.
///
/// `0.5 * (du/dx + dv/dy + dw/dz)` with unit spacing.
#[inline]
pub fn central_divergence(dims: GridDims, velocity: &VelocityField, idx: usize) -> f32 {
    let sy = dims.stride_y();
    let sz = dims.stride_z();
    0.5 * (velocity.x[idx + 1] - velocity.x[idx - 1] + velocity.y[idx + sy]
        - velocity.y[idx - sy]
        + velocity.z[idx + sz]
        - velocity.z[idx - sz])
}

/// Compute the divergence source term and reset pressure.
///
/// `divergence = -div(v) / N` on interior cells; `pressure` is zeroed there.
pub fn compute_divergence(
    dims: GridDims,
    velocity: &VelocityField,
    pressure: &mut [f32],
    divergence: &mut [f32],
) {
    let n = dims.size() as f32;

    for (_, _, _, idx) in dims.interior_cells() {
        divergence[idx] = -central_divergence(dims, velocity, idx) / n;
        pressure[idx] = 0.0;
    }

    enforce_boundary(dims, BoundaryKind::None, divergence);
    enforce_boundary(dims, BoundaryKind::None, pressure);
}

/// Solve `Laplacian(p) = divergence` with a fixed number of sweeps.
pub fn solve_pressure(dims: GridDims, pressure: &mut [f32], divergence: &[f32], iterations: usize) {
    relax(
        dims,
        BoundaryKind::None,
        pressure,
        divergence,
        1.0,
        6.0,
        iterations,
    );
}

/// Subtract the pressure gradient from every interior velocity sample, then
/// re-apply wall conditions per component.
pub fn apply_pressure_gradient(dims: GridDims, velocity: &mut VelocityField, pressure: &[f32]) {
    let scale = 0.5 * dims.size() as f32;
    let sy = dims.stride_y();
    let sz = dims.stride_z();

    for (_, _, _, idx) in dims.interior_cells() {
        velocity.x[idx] -= scale * (pressure[idx + 1] - pressure[idx - 1]);
        velocity.y[idx] -= scale * (pressure[idx + sy] - pressure[idx - sy]);
        velocity.z[idx] -= scale * (pressure[idx + sz] - pressure[idx - sz]);
    }

    for axis in Axis::ALL {
        enforce_boundary(dims, BoundaryKind::for_axis(axis), velocity.component_mut(axis));
    }
}

/// Project `velocity` towards divergence-free.
///
/// `pressure` and `divergence` are scratch buffers of `N³` samples; their
/// previous contents are discarded.
pub fn project(
    dims: GridDims,
    velocity: &mut VelocityField,
    pressure: &mut [f32],
    divergence: &mut [f32],
    iterations: usize,
) {
    compute_divergence(dims, velocity, pressure, divergence);
    solve_pressure(dims, pressure, divergence, iterations);
    apply_pressure_gradient(dims, velocity, pressure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::max_divergence;

    #[test]
    fn test_divergence_zero_velocity() {
        let dims = GridDims::new(6);
        let velocity = VelocityField::zeros(dims.cell_count());
        let mut pressure = vec![1.0; dims.cell_count()];
        let mut divergence = vec![1.0; dims.cell_count()];

        compute_divergence(dims, &velocity, &mut pressure, &mut divergence);

        for &div in &divergence {
            assert!(div.abs() < 1e-6);
        }
        for &p in &pressure {
            assert!(p.abs() < 1e-6);
        }
    }

    #[test]
    fn test_divergence_sign_and_scale() {
        let dims = GridDims::new(10);
        let mut velocity = VelocityField::zeros(dims.cell_count());
        velocity.x[dims.index(5, 5, 5)] = 1.0;
        let mut pressure = vec![0.0; dims.cell_count()];
        let mut divergence = vec![0.0; dims.cell_count()];

        compute_divergence(dims, &velocity, &mut pressure, &mut divergence);

        // Stored negated: outflow at (4,5,5), inflow at (6,5,5)
        assert!((divergence[dims.index(4, 5, 5)] + 0.05).abs() < 1e-6);
        assert!((divergence[dims.index(6, 5, 5)] - 0.05).abs() < 1e-6);
        assert!(divergence[dims.index(5, 5, 5)].abs() < 1e-6);
    }

    #[test]
    fn test_projection_reduces_divergence() {
        let dims = GridDims::new(10);
        let mut velocity = VelocityField::zeros(dims.cell_count());
        for z in 4..7 {
            for y in 4..7 {
                velocity.x[dims.index(5, y, z)] = 1.0;
            }
        }
        let before = max_divergence(dims, &velocity);

        let mut pressure = vec![0.0; dims.cell_count()];
        let mut divergence = vec![0.0; dims.cell_count()];
        project(dims, &mut velocity, &mut pressure, &mut divergence, 20);

        let after = max_divergence(dims, &velocity);
        assert!(
            after < before,
            "Projection should reduce divergence: {} -> {}",
            before,
            after
        );
    }

    #[test]
    fn test_projection_enforces_walls() {
        let dims = GridDims::new(6);
        let mut velocity = VelocityField::zeros(dims.cell_count());
        velocity.x[dims.index(1, 2, 2)] = 2.0;
        velocity.z[dims.index(3, 3, 4)] = -1.0;
        let mut pressure = vec![0.0; dims.cell_count()];
        let mut divergence = vec![0.0; dims.cell_count()];

        project(dims, &mut velocity, &mut pressure, &mut divergence, 4);

        for b in dims.interior() {
            for a in dims.interior() {
                assert_eq!(velocity.x[dims.index(0, a, b)], -velocity.x[dims.index(1, a, b)]);
                assert_eq!(velocity.z[dims.index(a, b, 5)], -velocity.z[dims.index(a, b, 4)]);
                assert_eq!(velocity.y[dims.index(a, b, 0)], velocity.y[dims.index(a, b, 1)]);
            }
        }
    }
}
