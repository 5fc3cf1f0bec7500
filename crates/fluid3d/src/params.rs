//! Solver configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FluidError;
use crate::grid::GridDims;

/// Construction parameters for a [`crate::FluidGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidParams {
    /// Cells along each edge, boundary layer included.
    pub size: usize,
    /// Timestep per `step()` call.
    pub dt: f32,
    /// Relaxation sweeps per diffusion and pressure solve.
    pub iterations: usize,
    /// Density diffusion rate.
    pub diffusion: f32,
    /// Kinematic viscosity applied to velocity.
    pub viscosity: f32,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            size: 32,
            dt: 0.1,
            iterations: 4,
            diffusion: 0.0,
            viscosity: 0.0,
        }
    }
}

impl FluidParams {
    /// Default parameters for an `size³` grid.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check every invariant the solver relies on.
    pub fn validate(&self) -> Result<(), FluidError> {
        if self.size < GridDims::MIN_SIZE {
            return Err(FluidError::GridTooSmall { size: self.size });
        }
        if self.size.checked_pow(3).is_none() {
            return Err(FluidError::GridTooLarge { size: self.size });
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(FluidError::InvalidTimestep { dt: self.dt });
        }
        if self.iterations == 0 {
            return Err(FluidError::ZeroIterations);
        }
        for (name, value) in [("diffusion", self.diffusion), ("viscosity", self.viscosity)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(FluidError::NegativeRate { name, value });
            }
        }
        Ok(())
    }

    /// Save parameters to a JSON file.
    pub fn save_json(&self, path: &Path) -> Result<(), FluidError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate parameters from a JSON file.
    ///
    /// Missing keys fall back to [`FluidParams::default`].
    pub fn load_json(path: &Path) -> Result<Self, FluidError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        log::info!("Loaded fluid config from {}: {:?}", path.display(), params);
        Ok(params)
    }
}
