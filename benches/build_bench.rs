//! Benchmark for 2D-tree construction
//!
//! Measures insertion throughput for shuffled input, which keeps the tree
//! shallow, and for sorted input, which degenerates it into a spine. The
//! `PointMap` baseline is included for the shuffled case.

use kdmap::{KdTreeMap, Point2D, PointMap};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate random points in the unit square
fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<Point2D> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.random_range(0.0..1.0);
        let y = rng.random_range(0.0..1.0);
        points.push(Point2D::new(x, y));
    }
    points
}

/// Time the construction of a tree from the given points
fn bench_tree_build(points: &[Point2D], label: &str) {
    let start = Instant::now();
    let mut tree = KdTreeMap::with_capacity(points.len());
    for (i, &p) in points.iter().enumerate() {
        tree.put(p, i).unwrap();
    }
    let elapsed = start.elapsed();
    println!(
        "{} inserts ({}): {:.2}ms, {} stored",
        points.len(),
        label,
        elapsed.as_secs_f64() * 1000.0,
        tree.len()
    );
}

fn main() {
    println!("KdTreeMap Build Benchmark");
    println!("=========================\n");

    let seed = 73069251_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let shuffled = random_points(&mut rng, 1_000_000);
    bench_tree_build(&shuffled, "shuffled");

    // Sorted input chains every insert down one spine, so the cost is
    // quadratic; a much smaller count keeps the run short
    let mut sorted = random_points(&mut rng, 20_000);
    sorted.sort_by(|a, b| (a.x(), a.y()).partial_cmp(&(b.x(), b.y())).unwrap());
    bench_tree_build(&sorted, "sorted");

    let start = Instant::now();
    let mut flat = PointMap::new();
    for (i, &p) in shuffled.iter().enumerate() {
        flat.put(p, i).unwrap();
    }
    let elapsed = start.elapsed();
    println!(
        "{} scan-map inserts: {:.2}ms, {} stored",
        shuffled.len(),
        elapsed.as_secs_f64() * 1000.0,
        flat.len()
    );

    // Level-order traversal over the full tree
    let mut tree = KdTreeMap::with_capacity(shuffled.len());
    for (i, &p) in shuffled.iter().enumerate() {
        tree.put(p, i).unwrap();
    }
    let start = Instant::now();
    let points = tree.points();
    let elapsed = start.elapsed();
    println!(
        "level-order traversal of {} points: {:.2}ms",
        points.len(),
        elapsed.as_secs_f64() * 1000.0
    );
}

/*
cargo bench --bench build_bench
*/
