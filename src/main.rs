//! wavegrid - headless Gerstner ocean surface
//!
//! Builds a noise-height grid once, then animates it with two superposed
//! Gerstner waves on a fixed tick.

use clap::Parser;
use std::time::Instant;

use wavegrid::cli::Args;
use wavegrid::export::save_heightmap;
use wavegrid::ocean::{OceanSystem, SurfaceMesh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let grid_config = args.grid_config();
    let snapshot = args.snapshot_config();
    let waves = args.wave_settings()?;

    println!("wavegrid - Gerstner ocean surface");
    println!("  Grid: {}x{}", grid_config.x_size, grid_config.z_size);
    println!(
        "  Waves: amplitude {}m, wavelengths {}m / {}m",
        waves.amplitude(),
        waves.primary().wavelength(),
        waves.secondary().wavelength()
    );

    let start = Instant::now();

    let ocean = OceanSystem::build(&grid_config, waves)?;
    let mut mesh = SurfaceMesh::from_grid(ocean.grid());

    let frames = snapshot.total_frames();
    for frame in 0..=frames {
        let time_s = snapshot.time_at(frame);
        ocean.evaluate(time_s, &mut mesh);

        let bounds = mesh.bounds();
        log::debug!(
            "frame {} t={:.3}s height [{:.3}, {:.3}]",
            frame,
            time_s,
            bounds.min.y,
            bounds.max.y
        );
    }

    let bounds = mesh.bounds();
    println!("  Frames: {}", frames + 1);
    println!("  Bounds: {:?} .. {:?}", bounds.min, bounds.max);

    if let Some(path) = &snapshot.output {
        save_heightmap(&grid_config, mesh.positions(), path)?;
        println!("  Output: {}", path.display());
    }

    let elapsed = start.elapsed();
    println!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
