//! Frame-time benchmark across playfield sizes and score scan modes

use std::time::Instant;
use territory_wars::{
    JitterPolicy, ScanMode, SimConfig, Simulation,
    application::{NullSurface, run_frames},
    domain::Grid,
};

fn benchmark_step(cells_per_side: u32, scan: ScanMode, frames: u64) -> f64 {
    let cell_size = 4;
    let config = SimConfig {
        cell_size,
        width: cells_per_side * cell_size,
        height: cells_per_side * cell_size,
        jitter: JitterPolicy::Twice,
        scan,
        ..SimConfig::default()
    };
    let Ok(mut sim) = Simulation::new(config, NullSurface, NullSurface) else {
        return f64::NAN;
    };

    let start = Instant::now();
    run_frames(&mut sim, frames);
    start.elapsed().as_secs_f64() * 1000.0 / frames as f64
}

fn benchmark_scan(cells_per_side: usize, scan: ScanMode, iterations: u32) -> f64 {
    let grid = Grid::split(cells_per_side, cells_per_side, 4);

    let start = Instant::now();
    let mut total = 0;
    for _ in 0..iterations {
        total += grid.score(scan).total();
    }
    assert_eq!(total, cells_per_side * cells_per_side * iterations as usize);
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Territory Wars Frame Benchmark ===\n");

    let sizes = [24, 100, 500, 1000, 2000, 4000];
    let frames = 50;

    println!(
        "{:>12} {:>14} {:>14} {:>12} {:>12} {:>10}",
        "Cells", "Step serial", "Step par", "Scan serial", "Scan par", "Speedup"
    );
    println!("{:-<80}", "");

    for size in sizes {
        // Drawing every cell dominates huge grids; skip full steps there
        let (step_serial, step_parallel) = if size <= 1000 {
            (
                benchmark_step(size, ScanMode::Serial, frames),
                benchmark_step(size, ScanMode::Parallel, frames),
            )
        } else {
            (0.0, 0.0)
        };
        let step_str = |ms: f64| {
            if ms > 0.0 { format!("{:>12.3}ms", ms) } else { format!("{:>14}", "-") }
        };
        let scan_serial = benchmark_scan(size as usize, ScanMode::Serial, frames as u32);
        let scan_parallel = benchmark_scan(size as usize, ScanMode::Parallel, frames as u32);

        println!(
            "{:>12} {} {} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{}x{}", size, size),
            step_str(step_serial),
            step_str(step_parallel),
            scan_serial,
            scan_parallel,
            scan_serial / scan_parallel
        );
    }

    let cells = 4000.0 * 4000.0;
    let scan_parallel = benchmark_scan(4000, ScanMode::Parallel, 20);
    println!(
        "\nParallel scan at 4000x4000: {:.2} ms/frame, {:.1}M cells/sec",
        scan_parallel,
        cells / (scan_parallel / 1000.0) / 1_000_000.0
    );
}
