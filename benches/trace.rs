//! Benchmarks for the segment tracer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mapgeom::{trace_segments, GameMap, TilePoint};

/// Hollow square ring of the given outer size.
fn ring(size: i64) -> Vec<TilePoint> {
    let mut walls = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if x == 0 || x == size - 1 || y == 0 || y == size - 1 {
                walls.push(TilePoint::new(x, y));
            }
        }
    }
    walls
}

/// Solid block: worst case for the boundary filter, every tile is
/// classified and most are rejected as interior.
fn block(size: i64) -> Vec<TilePoint> {
    let mut walls = Vec::new();
    for y in 0..size {
        for x in 0..size {
            walls.push(TilePoint::new(x, y));
        }
    }
    walls
}

/// Grid of disconnected single tiles: worst case for the lone pass.
fn scatter(size: i64) -> Vec<TilePoint> {
    let mut walls = Vec::new();
    for y in 0..size {
        for x in 0..size {
            walls.push(TilePoint::new(x * 2, y * 2));
        }
    }
    walls
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");

    let ring_64 = ring(64);
    let block_64 = block(64);
    let scatter_32 = scatter(32);

    group.bench_function("ring_64", |b| {
        b.iter(|| trace_segments(black_box(&ring_64)))
    });

    group.bench_function("block_64", |b| {
        b.iter(|| trace_segments(black_box(&block_64)))
    });

    group.bench_function("scatter_32", |b| {
        b.iter(|| trace_segments(black_box(&scatter_32)))
    });

    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    let walls = ring(128);

    group.bench_function("center_and_trace_ring_128", |b| {
        b.iter(|| {
            let mut map = GameMap {
                wall_tiles: black_box(walls.clone()),
                ..Default::default()
            };
            map.center();
            map.generate_segments();
            map
        })
    });

    group.finish();
}

criterion_group!(benches, bench_trace, bench_assembly);
criterion_main!(benches);
