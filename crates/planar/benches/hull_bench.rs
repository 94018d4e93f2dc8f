//! Criterion benchmarks for hull construction and containment.
//! Focus sizes: n in {16, 128, 1024, 8192}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planar

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::rand::{draw_point_cloud, draw_polygon_radial, RadialCfg, ReplayToken};
use planar::{build_convex_hull, Point};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("point_cloud", n), &n, |b, &n| {
            b.iter_batched(
                || draw_point_cloud(n, 1.0, ReplayToken::new(43, n as u64)),
                |pts| {
                    let _hull = build_convex_hull(pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[16usize, 128, 1024] {
        let cfg = RadialCfg {
            vertices: n..=n,
            radius_jitter: 0.0,
        };
        let poly = draw_polygon_radial(&cfg, ReplayToken::new(44, n as u64)).unwrap();
        let probes = draw_point_cloud(256, 1.2, ReplayToken::new(45, n as u64));
        group.bench_with_input(BenchmarkId::new("is_point_inside", n), &n, |b, _| {
            b.iter(|| probes.iter().filter(|&&p| poly.is_point_inside(p)).count())
        });
        group.bench_with_input(BenchmarkId::new("construct", n), &n, |b, _| {
            b.iter_batched(
                || poly.vertices().to_vec(),
                |verts: Vec<Point>| {
                    let _p = planar::Polygon::new(verts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_contains);
criterion_main!(benches);
