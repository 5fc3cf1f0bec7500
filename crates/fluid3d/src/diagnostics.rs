//! Read-only field summaries for logging and tests.

use std::fmt;

use crate::grid::{GridDims, VelocityField};
use crate::pressure::central_divergence;

/// Sum of `field` over interior cells.
///
/// Boundary cells only mirror the interior, so they are left out.
pub fn interior_sum(dims: GridDims, field: &[f32]) -> f32 {
    // f64 accumulator keeps large grids from drifting
    dims.interior_cells()
        .map(|(_, _, _, idx)| field[idx] as f64)
        .sum::<f64>() as f32
}

/// Largest absolute central-difference divergence over interior cells.
pub fn max_divergence(dims: GridDims, velocity: &VelocityField) -> f32 {
    dims.interior_cells()
        .map(|(_, _, _, idx)| central_divergence(dims, velocity, idx).abs())
        .fold(0.0f32, f32::max)
}

/// Largest velocity magnitude over interior cells.
pub fn max_speed(dims: GridDims, velocity: &VelocityField) -> f32 {
    dims.interior_cells()
        .map(|(_, _, _, idx)| velocity.at(idx).length())
        .fold(0.0f32, f32::max)
}

/// Snapshot of a grid's state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldStats {
    pub frame: u64,
    pub total_density: f32,
    pub max_density: f32,
    pub max_speed: f32,
    pub max_divergence: f32,
}

impl FieldStats {
    pub fn collect(dims: GridDims, density: &[f32], velocity: &VelocityField, frame: u64) -> Self {
        let max_density = dims
            .interior_cells()
            .map(|(_, _, _, idx)| density[idx])
            .fold(0.0f32, f32::max);

        Self {
            frame,
            total_density: interior_sum(dims, density),
            max_density,
            max_speed: max_speed(dims, velocity),
            max_divergence: max_divergence(dims, velocity),
        }
    }

    /// True if no summary value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.total_density.is_finite()
            && self.max_density.is_finite()
            && self.max_speed.is_finite()
            && self.max_divergence.is_finite()
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F{:5}: mass={:.3}, peak={:.3}, |v|max={:.4}, |div|max={:.5}",
            self.frame, self.total_density, self.max_density, self.max_speed, self.max_divergence
        )
    }
}
