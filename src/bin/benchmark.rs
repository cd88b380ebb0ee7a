//! Step and rebuild timings for serial and parallel board advance

use std::time::Instant;
use life_board::{AutomatonStepper, BirthTiePolicy, GridModel, InstanceRenderBatch};
use glam::Vec3;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn random_grid(size: usize) -> GridModel {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = GridModel::new(size, size).expect("benchmark sizes are non-zero");
    grid.randomize(&mut rng, 0.3);
    grid
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);
    let mut stepper = AutomatonStepper::new(BirthTiePolicy::Neither);

    let start = Instant::now();
    for _ in 0..iterations {
        stepper.advance(&mut grid).expect("grid size is fixed");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);
    let mut stepper = AutomatonStepper::new(BirthTiePolicy::Neither);

    let start = Instant::now();
    for _ in 0..iterations {
        stepper.advance_parallel(&mut grid).expect("grid size is fixed");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_rebuild(size: usize, iterations: u32) -> f64 {
    let grid = random_grid(size);
    let mut batch = InstanceRenderBatch::new(size, size, Vec3::Z, Vec3::X);

    let start = Instant::now();
    for _ in 0..iterations {
        batch.rebuild(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Board Step Benchmark ===\n");

    let sizes = [16, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Rebuild", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);
        let rebuild_ms = benchmark_rebuild(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            rebuild_ms,
            serial_ms / parallel_ms
        );
        info!(size, serial_ms, parallel_ms, rebuild_ms, "measured");
    }
}
