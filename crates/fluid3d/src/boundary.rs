//! Sealed-box boundary conditions.
//!
//! Boundary cells mirror the adjacent interior layer. A velocity component is
//! negated on the faces normal to its own axis (no flow through the wall);
//! everything else is copied unchanged (zero gradient).

use crate::grid::{Axis, GridDims};

/// How a field behaves at the walls.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BoundaryKind {
    /// Scalars (density, pressure, divergence): copy on every face.
    #[default]
    None,
    /// X velocity: negate on the x = 0 and x = N-1 faces.
    XFace,
    /// Y velocity: negate on the y = 0 and y = N-1 faces.
    YFace,
    /// Z velocity: negate on the z = 0 and z = N-1 faces.
    ZFace,
}

impl BoundaryKind {
    /// Kind for the velocity component along `axis`.
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => BoundaryKind::XFace,
            Axis::Y => BoundaryKind::YFace,
            Axis::Z => BoundaryKind::ZFace,
        }
    }

    /// Multiplier applied when mirroring onto the faces normal to x, y and z.
    pub const fn face_signs(self) -> [f32; 3] {
        match self {
            BoundaryKind::None => [1.0, 1.0, 1.0],
            BoundaryKind::XFace => [-1.0, 1.0, 1.0],
            BoundaryKind::YFace => [1.0, -1.0, 1.0],
            BoundaryKind::ZFace => [1.0, 1.0, -1.0],
        }
    }
}

/// Write boundary values for `field`.
///
/// Order matters: faces first, then the 12 edges (mean of the two face cells
/// beside them), then the 8 corners (mean of the three edge cells beside them).
pub fn enforce_boundary(dims: GridDims, kind: BoundaryKind, field: &mut [f32]) {
    debug_assert_eq!(field.len(), dims.cell_count());

    let last = dims.size() - 1;
    let [sign_x, sign_y, sign_z] = kind.face_signs();
    let idx = |x: usize, y: usize, z: usize| dims.index(x, y, z);

    // Faces
    for b in dims.interior() {
        for a in dims.interior() {
            // Z faces (XY planes)
            field[idx(a, b, 0)] = sign_z * field[idx(a, b, 1)];
            field[idx(a, b, last)] = sign_z * field[idx(a, b, last - 1)];

            // Y faces (XZ planes)
            field[idx(a, 0, b)] = sign_y * field[idx(a, 1, b)];
            field[idx(a, last, b)] = sign_y * field[idx(a, last - 1, b)];

            // X faces (YZ planes)
            field[idx(0, a, b)] = sign_x * field[idx(1, a, b)];
            field[idx(last, a, b)] = sign_x * field[idx(last - 1, a, b)];
        }
    }

    // (wall coordinate, neighbour one step inward)
    let walls = [(0, 1), (last, last - 1)];

    // Edges
    for t in dims.interior() {
        for &(p, p_in) in &walls {
            for &(q, q_in) in &walls {
                field[idx(t, p, q)] = 0.5 * (field[idx(t, p_in, q)] + field[idx(t, p, q_in)]);
                field[idx(p, t, q)] = 0.5 * (field[idx(p_in, t, q)] + field[idx(p, t, q_in)]);
                field[idx(p, q, t)] = 0.5 * (field[idx(p_in, q, t)] + field[idx(p, q_in, t)]);
            }
        }
    }

    // Corners
    for &(x, x_in) in &walls {
        for &(y, y_in) in &walls {
            for &(z, z_in) in &walls {
                field[idx(x, y, z)] =
                    (field[idx(x_in, y, z)] + field[idx(x, y_in, z)] + field[idx(x, y, z_in)])
                        / 3.0;
            }
        }
    }
}
