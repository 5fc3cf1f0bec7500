//! 3D Stable Fluids
//!
//! A cubic, sealed-box implementation of Stam's "Stable Fluids": implicit
//! diffusion, semi-Lagrangian advection and pressure projection on a
//! cell-centred `N × N × N` grid.
//!
//! The crate only simulates. Rendering code reads [`FluidGrid::density`] and
//! [`FluidGrid::velocity`] once per tick and turns them into whatever it draws.
//!
//! # Example
//!
//! ```
//! use fluid3d::{FluidGrid, FluidParams, Vec3};
//!
//! let mut fluid = FluidGrid::new(FluidParams {
//!     size: 16,
//!     dt: 0.1,
//!     iterations: 4,
//!     diffusion: 0.0,
//!     viscosity: 0.0,
//! })
//! .expect("valid parameters");
//!
//! fluid.add_density(8, 8, 8, 100.0);
//! fluid.add_velocity(8, 8, 8, Vec3::new(1.0, 0.0, 0.0));
//! fluid.step();
//!
//! assert!(fluid.density_at(8, 8, 8) < 100.0);
//! ```

pub mod advection;
pub mod boundary;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod params;
pub mod pressure;
pub mod solver;

pub use boundary::BoundaryKind;
pub use diagnostics::FieldStats;
pub use error::FluidError;
pub use glam::Vec3;
pub use grid::{Axis, GridDims, VelocityField};
pub use params::FluidParams;

/// Owns every buffer of one simulation.
///
/// Eight `N³` arrays are allocated once, zeroed, and reused every tick:
///
/// | buffer             | between ticks          | inside [`FluidGrid::step`]                  |
/// |--------------------|------------------------|---------------------------------------------|
/// | `density`          | current density        | advection destination                       |
/// | `density_scratch`  | stale                  | diffusion destination, advection source     |
/// | `velocity`         | current velocity       | pressure/divergence scratch, then advected  |
/// | `velocity_scratch` | stale                  | diffused velocity, then scratch for project |
#[derive(Clone, Debug)]
pub struct FluidGrid {
    params: FluidParams,
    dims: GridDims,

    density: Vec<f32>,
    density_scratch: Vec<f32>,

    velocity: VelocityField,
    velocity_scratch: VelocityField,

    frame: u64,
}

impl FluidGrid {
    /// Validate `params` and allocate a zeroed grid.
    pub fn new(params: FluidParams) -> Result<Self, FluidError> {
        params.validate()?;

        let dims = GridDims::new(params.size);
        let cells = dims.cell_count();

        log::info!(
            "Fluid grid {}³ ({} cells), dt={}, iterations={}, diffusion={}, viscosity={}",
            params.size,
            cells,
            params.dt,
            params.iterations,
            params.diffusion,
            params.viscosity
        );

        Ok(Self {
            params,
            dims,
            density: vec![0.0; cells],
            density_scratch: vec![0.0; cells],
            velocity: VelocityField::zeros(cells),
            velocity_scratch: VelocityField::zeros(cells),
            frame: 0,
        })
    }

    /// Add `amount` of density at cell `(x, y, z)`.
    ///
    /// Coordinates are not range-checked in release builds.
    pub fn add_density(&mut self, x: usize, y: usize, z: usize, amount: f32) {
        debug_assert!(self.dims.contains(x, y, z), "cell ({x}, {y}, {z}) out of range");
        let idx = self.dims.index(x, y, z);
        self.density[idx] += amount;
    }

    /// Add `delta` to the velocity at cell `(x, y, z)`.
    ///
    /// Coordinates are not range-checked in release builds.
    pub fn add_velocity(&mut self, x: usize, y: usize, z: usize, delta: Vec3) {
        debug_assert!(self.dims.contains(x, y, z), "cell ({x}, {y}, {z}) out of range");
        let idx = self.dims.index(x, y, z);
        self.velocity.add_at(idx, delta);
    }

    /// Advance the simulation by one timestep.
    pub fn step(&mut self) {
        let dims = self.dims;
        let FluidParams {
            dt,
            iterations,
            diffusion,
            viscosity,
            ..
        } = self.params;
        let Self {
            density,
            density_scratch,
            velocity,
            velocity_scratch,
            ..
        } = self;

        // 1. Viscosity: velocity -> velocity_scratch
        for axis in Axis::ALL {
            solver::diffuse(
                dims,
                BoundaryKind::for_axis(axis),
                velocity_scratch.component_mut(axis),
                velocity.component(axis),
                viscosity,
                dt,
                iterations,
            );
        }

        // 2. Project the diffused field; velocity.x / velocity.y are free until step 3
        pressure::project(
            dims,
            velocity_scratch,
            &mut velocity.x,
            &mut velocity.y,
            iterations,
        );

        // 3. Self-advection: velocity_scratch carried along itself into velocity
        for axis in Axis::ALL {
            advection::advect(
                dims,
                BoundaryKind::for_axis(axis),
                velocity.component_mut(axis),
                velocity_scratch.component(axis),
                velocity_scratch,
                dt,
            );
        }

        // 4. Project again; velocity_scratch is no longer needed
        pressure::project(
            dims,
            velocity,
            &mut velocity_scratch.x,
            &mut velocity_scratch.y,
            iterations,
        );

        // 5. Density diffusion: density -> density_scratch
        solver::diffuse(
            dims,
            BoundaryKind::None,
            density_scratch,
            density,
            diffusion,
            dt,
            iterations,
        );

        // 6. Density advection along the final velocity
        advection::advect(
            dims,
            BoundaryKind::None,
            density,
            density_scratch,
            velocity,
            dt,
        );

        self.frame += 1;
        log::trace!("fluid step {} done", self.frame);
    }

    /// Scale all density by `1 - amount`, with `amount` clamped to `[0, 1]`.
    ///
    /// A non-finite `amount` fades nothing.
    pub fn fade_density(&mut self, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        for d in &mut self.density {
            *d *= keep;
        }
    }

    /// Zero every buffer and reset the frame counter.
    pub fn clear(&mut self) {
        self.density.fill(0.0);
        self.density_scratch.fill(0.0);
        self.velocity.fill_zero();
        self.velocity_scratch.fill_zero();
        self.frame = 0;
    }

    // ========== Read access ==========

    /// Current density, `N³` samples in [`GridDims::index`] order.
    pub fn density(&self) -> &[f32] {
        &self.density
    }

    /// Current velocity, `N³` samples per component.
    pub fn velocity(&self) -> &VelocityField {
        &self.velocity
    }

    /// Density at cell `(x, y, z)`.
    pub fn density_at(&self, x: usize, y: usize, z: usize) -> f32 {
        self.density[self.dims.index(x, y, z)]
    }

    /// Velocity at cell `(x, y, z)`.
    pub fn velocity_at(&self, x: usize, y: usize, z: usize) -> Vec3 {
        self.velocity.at(self.dims.index(x, y, z))
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn params(&self) -> &FluidParams {
        &self.params
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Summarise the current fields.
    pub fn stats(&self) -> FieldStats {
        FieldStats::collect(self.dims, &self.density, &self.velocity, self.frame)
    }
}
