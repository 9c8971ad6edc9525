//! Benchmarks for the topology lint passes.
//!
//! Run with: cargo bench -p meshlint-check
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p meshlint-check -- --save-baseline main
//! 2. After changes: cargo bench -p meshlint-check -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use meshlint_check::{check_topology_issues, show_five_poles};
use meshlint_types::{CheckConfig, MeshSnapshot};

// =============================================================================
// Snapshot Generation
// =============================================================================

/// Create an n x n planar quad grid: (n+1)^2 vertices, 2n(n+1) edges,
/// n^2 quads. Interior vertices have valence 4; the corners have
/// valence 2, which keeps the pole pass doing real work.
fn quad_grid(n: u32) -> MeshSnapshot {
    let side = n + 1;
    let vertex_count = (side * side) as usize;
    let at = |x: u32, y: u32| y * side + x;

    let mut edges = Vec::new();
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                edges.push([at(x, y), at(x + 1, y)]);
            }
            if y + 1 < side {
                edges.push([at(x, y), at(x, y + 1)]);
            }
        }
    }

    let mut polygons = Vec::new();
    for y in 0..n {
        for x in 0..n {
            polygons.push(vec![at(x, y), at(x + 1, y), at(x + 1, y + 1), at(x, y + 1)]);
        }
    }

    MeshSnapshot::from_parts(vertex_count, edges, polygons)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_check_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_default");
    let config = CheckConfig::default();

    for n in [10, 50, 100] {
        let snapshot = quad_grid(n);
        group.throughput(Throughput::Elements(snapshot.polygons.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| check_topology_issues(black_box(snapshot), &config));
        });
    }

    group.finish();
}

fn bench_check_with_non_manifold_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_non_manifold");
    let config = CheckConfig::default().with_search_non_manifold_edges(true);

    for n in [10, 50, 100] {
        let snapshot = quad_grid(n);
        group.throughput(Throughput::Elements(snapshot.edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| check_topology_issues(black_box(snapshot), &config));
        });
    }

    group.finish();
}

fn bench_show_five_poles(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_five_poles");

    for n in [10, 100] {
        let snapshot = quad_grid(n);
        group.throughput(Throughput::Elements(snapshot.edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| show_five_poles(black_box(snapshot)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_check_default,
    bench_check_with_non_manifold_search,
    bench_show_five_poles
);
criterion_main!(benches);
