//! Headless plume driven by a rotating emitter.
//!
//! A propeller at the box centre spins about +z at 80°/s and pushes dye
//! along its blade direction. Stats are logged every 30 ticks and a density
//! slice through the propeller plane is printed at the end.
//!
//! Usage: `cargo run --example propeller_plume [config.json]`
//! Run with `RUST_LOG=info` to see the periodic stats.

use std::path::Path;

use fluid3d::{FluidError, FluidGrid, FluidParams, Vec3};

const TICK_RATE: f32 = 60.0;
const TICKS: u32 = 300;
const SPIN_DEG_PER_SEC: f32 = 80.0;
const DYE_PER_TICK: f32 = 50.0;
const PUSH: f32 = 2.0;

fn main() -> Result<(), FluidError> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => FluidParams::load_json(Path::new(&path))?,
        None => FluidParams {
            size: 32,
            dt: 1.0 / TICK_RATE,
            iterations: 8,
            diffusion: 0.0001,
            viscosity: 0.00005,
        },
    };

    let mut fluid = FluidGrid::new(params)?;
    let c = params.size / 2;
    let mut angle = 0.0f32;

    println!("=== PROPELLER PLUME ===\n");
    println!("Grid: {}³, dt={:.4}, iterations={}", params.size, params.dt, params.iterations);

    for tick in 0..TICKS {
        // Emit from both blade tips
        let blade = Vec3::new(angle.cos(), angle.sin(), 0.0);
        for dir in [blade, -blade] {
            let tip = Vec3::splat(c as f32) + dir * 2.0;
            let x = (tip.x.round() as usize).clamp(1, params.size - 2);
            let y = (tip.y.round() as usize).clamp(1, params.size - 2);
            let z = c;
            fluid.add_density(x, y, z, DYE_PER_TICK);
            fluid.add_velocity(x, y, z, (dir + Vec3::Z * 0.5) * PUSH);
        }

        fluid.step();
        fluid.fade_density(0.002);

        if tick % 30 == 0 {
            log::info!("{}", fluid.stats());
        }

        angle += SPIN_DEG_PER_SEC.to_radians() / TICK_RATE;
    }

    let stats = fluid.stats();
    println!("Final: {}\n", stats);
    print_slice(&fluid, c);

    Ok(())
}

/// ASCII shading of the z = `z` plane, scaled to the slice's peak.
fn print_slice(fluid: &FluidGrid, z: usize) {
    const SHADES: &[u8] = b" .:-=+*#%@";
    let dims = fluid.dims();

    let peak = dims
        .interior()
        .flat_map(|y| dims.interior().map(move |x| (x, y)))
        .map(|(x, y)| fluid.density_at(x, y, z))
        .fold(0.0f32, f32::max)
        .max(1e-6);

    for y in dims.interior().rev() {
        let row: String = dims
            .interior()
            .map(|x| {
                let t = (fluid.density_at(x, y, z) / peak).clamp(0.0, 1.0);
                SHADES[(t * (SHADES.len() - 1) as f32).round() as usize] as char
            })
            .collect();
        println!("|{}|", row);
    }
}
