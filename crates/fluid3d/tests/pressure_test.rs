//! Pressure projection tests
//!
//! Divergence reduction and near-idempotence of repeated projection.

use fluid3d::boundary::enforce_boundary;
use fluid3d::diagnostics::max_divergence;
use fluid3d::pressure::project;
use fluid3d::{Axis, BoundaryKind, GridDims, VelocityField};

/// Gaussian blob of +x velocity centred in the box, walls enforced.
fn blob(dims: GridDims) -> VelocityField {
    let mut velocity = VelocityField::zeros(dims.cell_count());
    let c = dims.size() as f32 / 2.0;
    for (x, y, z, idx) in dims.interior_cells() {
        let r2 = (x as f32 - c).powi(2) + (y as f32 - c).powi(2) + (z as f32 - c).powi(2);
        velocity.x[idx] = (-r2 / 4.0).exp();
    }
    for axis in Axis::ALL {
        enforce_boundary(dims, BoundaryKind::for_axis(axis), velocity.component_mut(axis));
    }
    velocity
}

fn max_change(a: &VelocityField, b: &VelocityField) -> f32 {
    Axis::ALL
        .iter()
        .flat_map(|&axis| {
            a.component(axis)
                .iter()
                .zip(b.component(axis))
                .map(|(x, y)| (x - y).abs())
        })
        .fold(0.0f32, f32::max)
}

/// Test that projection removes most of the divergence
#[test]
fn test_projection_reduces_divergence() {
    let dims = GridDims::new(10);
    let mut velocity = blob(dims);
    let mut pressure = vec![0.0; dims.cell_count()];
    let mut divergence = vec![0.0; dims.cell_count()];

    let before = max_divergence(dims, &velocity);
    project(dims, &mut velocity, &mut pressure, &mut divergence, 20);
    let after = max_divergence(dims, &velocity);

    println!("Divergence: {:.5} -> {:.5}", before, after);
    assert!(
        after < 0.5 * before,
        "Projection should at least halve divergence: {} -> {}",
        before,
        after
    );
}

/// Test that a second projection changes much less than the first
#[test]
fn test_projection_near_idempotent() {
    let dims = GridDims::new(10);
    let mut velocity = blob(dims);
    let mut pressure = vec![0.0; dims.cell_count()];
    let mut divergence = vec![0.0; dims.cell_count()];

    let original = velocity.clone();
    project(dims, &mut velocity, &mut pressure, &mut divergence, 20);
    let first_change = max_change(&original, &velocity);
    let first_div = max_divergence(dims, &velocity);

    let projected = velocity.clone();
    project(dims, &mut velocity, &mut pressure, &mut divergence, 20);
    let second_change = max_change(&projected, &velocity);
    let second_div = max_divergence(dims, &velocity);

    println!(
        "Change: first={:.5}, second={:.5}; divergence {:.5} -> {:.5}",
        first_change, second_change, first_div, second_div
    );

    assert!(
        second_change < 0.5 * first_change,
        "Second projection should be a small correction: {} vs {}",
        second_change,
        first_change
    );
    assert!(
        second_div <= first_div,
        "Divergence should not grow: {} -> {}",
        first_div,
        second_div
    );
}

/// Test that a divergence-free field (uniform zero) is a fixed point
#[test]
fn test_zero_field_is_fixed_point() {
    let dims = GridDims::new(6);
    let mut velocity = VelocityField::zeros(dims.cell_count());
    let mut pressure = vec![3.0; dims.cell_count()];
    let mut divergence = vec![-1.0; dims.cell_count()];

    project(dims, &mut velocity, &mut pressure, &mut divergence, 8);

    assert_eq!(velocity, VelocityField::zeros(dims.cell_count()));
}
