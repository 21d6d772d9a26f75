//! Timings for the dense (serial and parallel) and sparse engines

use std::time::Instant;
use life_engine::{DenseGrid, Generation, SparseCellSet};

const DENSITY: f64 = 0.3;

fn random_grid(size: usize) -> DenseGrid {
    let mut grid = DenseGrid::new(size, size);
    grid.randomize(&mut rand::rng(), DENSITY);
    grid
}

fn benchmark_dense(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_dense_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.advance_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_sparse(size: usize, iterations: u32) -> f64 {
    let mut cells = SparseCellSet::from(&random_grid(size));

    let start = Instant::now();
    for _ in 0..iterations {
        cells = cells.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Engine Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Dense", "Dense+Par", "Sparse", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let dense_ms = benchmark_dense(size, iterations);
        let parallel_ms = benchmark_dense_parallel(size, iterations);
        // Hash look-ups dominate at high density; skip the largest grid
        let sparse_ms = if size <= 1000 { benchmark_sparse(size, iterations) } else { 0.0 };

        let sparse_str = if sparse_ms > 0.0 { format!("{:>12.2}", sparse_ms) } else { format!("{:>12}", "-") };

        println!(
            "{:>10} {:>12.2} {:>12.2} {} {:>9.1}x",
            format!("{}x{}", size, size),
            dense_ms,
            parallel_ms,
            sparse_str,
            dense_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_dense_parallel(2000, iterations);
    println!("Dense+Parallel:   {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms, (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0);
}
