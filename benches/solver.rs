//! Benchmarks for the block puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bloxorz::levels::LEVELS;
use bloxorz::solver::{self, neighbors, SolveOptions};
use bloxorz::{BlockState, Map, Move, Orientation};

/// Benchmark solving every built-in level.
fn bench_solve_levels(c: &mut Criterion) {
    let maps: Vec<Map> = LEVELS.iter().map(|level| level.map().unwrap()).collect();

    let mut group = c.benchmark_group("levels");
    for (level, map) in LEVELS.iter().zip(&maps) {
        group.bench_function(level.name, |b| {
            b.iter(|| solver::solve_map(black_box(map), &SolveOptions::default()))
        });
    }
    group.finish();
}

/// Benchmark an exhaustive search over a large open map with no reachable target.
fn bench_solve_open_map(c: &mut Criterion) {
    let mut rows = vec!["1".repeat(200); 200];
    rows[0].replace_range(0..1, "B");
    rows[199].replace_range(198..200, "0X");
    rows[198].replace_range(199..200, "0");
    let map = Map::parse(&rows).unwrap();

    let mut group = c.benchmark_group("open_map");
    group.sample_size(10);
    group.bench_function("200x200_unreachable", |b| {
        b.iter(|| solver::solve_map(black_box(&map), &SolveOptions::default()))
    });
    group.finish();
}

/// Benchmark the transition function alone.
fn bench_step(c: &mut Criterion) {
    let state = BlockState::new((5, 5), Orientation::LyingX);

    c.bench_function("step", |b| {
        b.iter(|| Move::ALL.map(|direction| black_box(state).step(direction)))
    });
}

/// Benchmark legal neighbor generation from the first level's start.
fn bench_neighbors(c: &mut Criterion) {
    let map = LEVELS[0].map().unwrap();
    let start = BlockState::standing(map.start());

    c.bench_function("neighbors", |b| {
        b.iter(|| neighbors(black_box(&map), start).count())
    });
}

criterion_group!(
    benches,
    bench_solve_levels,
    bench_solve_open_map,
    bench_step,
    bench_neighbors
);
criterion_main!(benches);
