//! Cell-centred cubic grid: flat indexing and the velocity field layout.
//!
//! Every field lives in a flat `Vec<f32>` of `N³` samples, indexed as
//! `x + y * N + z * N²`. The outermost layer (any coordinate equal to `0` or
//! `N - 1`) holds boundary values written by [`crate::boundary`]; the solver
//! only ever updates interior cells.

use std::ops::Range;

use glam::Vec3;

/// Velocity component / coordinate axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[x, y, z]` tuples.
    #[inline]
    pub const fn ordinal(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Dimensions of an `N × N × N` grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridDims {
    size: usize,
}

impl GridDims {
    /// Smallest size with at least one interior cell.
    pub const MIN_SIZE: usize = 3;

    /// Create dimensions for an `size³` grid.
    ///
    /// Callers validate `size` first (see [`crate::FluidParams::validate`]).
    pub fn new(size: usize) -> Self {
        assert!(
            size >= Self::MIN_SIZE,
            "grid size must be at least {}, got {}",
            Self::MIN_SIZE,
            size
        );
        assert!(
            size.checked_pow(3).is_some(),
            "grid size {} overflows the cell count",
            size
        );
        Self { size }
    }

    /// Cells along one edge (`N`).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N³`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Interior cells along one edge (`N - 2`).
    #[inline]
    pub fn interior_size(&self) -> usize {
        self.size - 2
    }

    /// Index range covering interior coordinates on any axis.
    #[inline]
    pub fn interior(&self) -> Range<usize> {
        1..self.size - 1
    }

    /// Stride between neighbours along `y`.
    #[inline]
    pub fn stride_y(&self) -> usize {
        self.size
    }

    /// Stride between neighbours along `z`.
    #[inline]
    pub fn stride_z(&self) -> usize {
        self.size * self.size
    }

    /// Linear index of `(x, y, z)`. No bounds checking.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size + z * self.size * self.size
    }

    /// Check if coordinates are within the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size && y < self.size && z < self.size
    }

    /// True for cells on the outer layer.
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize, z: usize) -> bool {
        let last = self.size - 1;
        x == 0 || y == 0 || z == 0 || x == last || y == last || z == last
    }

    /// Iterate interior cells in storage order, yielding `(x, y, z, index)`.
    pub fn interior_cells(&self) -> impl Iterator<Item = (usize, usize, usize, usize)> + '_ {
        self.interior().flat_map(move |z| {
            self.interior().flat_map(move |y| {
                self.interior()
                    .map(move |x| (x, y, z, self.index(x, y, z)))
            })
        })
    }
}

/// Three cell-centred velocity components of identical shape.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
}

impl VelocityField {
    /// Zero-initialised field with `len` samples per component.
    pub fn zeros(len: usize) -> Self {
        Self {
            x: vec![0.0; len],
            y: vec![0.0; len],
            z: vec![0.0; len],
        }
    }

    /// Samples per component.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn component(&self, axis: Axis) -> &[f32] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    #[inline]
    pub fn component_mut(&mut self, axis: Axis) -> &mut [f32] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Velocity vector stored at a linear index.
    #[inline]
    pub fn at(&self, idx: usize) -> Vec3 {
        Vec3::new(self.x[idx], self.y[idx], self.z[idx])
    }

    /// Add `delta` to the vector at a linear index.
    #[inline]
    pub fn add_at(&mut self, idx: usize, delta: Vec3) {
        self.x[idx] += delta.x;
        self.y[idx] += delta.y;
        self.z[idx] += delta.z;
    }

    /// Set every component to zero.
    pub fn fill_zero(&mut self) {
        self.x.fill(0.0);
        self.y.fill(0.0);
        self.z.fill(0.0);
    }
}
