// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Quadtree, Rect};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, span: f64, max_side: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        // Centered on the origin so all four root quadrants are exercised.
        let x0 = (rng.next_f64() - 0.5) * span;
        let y0 = (rng.next_f64() - 0.5) * span;
        let side = rng.next_f64() * max_side;
        out.push(Rect::from_xywh(x0, y0, side, side));
    }
    out
}

fn gen_points(count: usize, span: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for _ in 0..count {
        out.push(Rect::from_point(rng.next_f64() * span, rng.next_f64() * span));
    }
    out
}

fn gen_scattered_magnitudes(count: usize) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    for i in 0..count {
        let scale = 10_f64.powi((i % 12) as i32);
        let x0 = rng.next_f64() * scale;
        let y0 = rng.next_f64() * scale;
        out.push(Rect::from_xywh(x0, y0, scale * 0.01, scale * 0.01));
    }
    out
}

fn build(rects: &[Rect]) -> Quadtree<u32> {
    let mut qt = Quadtree::new();
    for (i, r) in rects.iter().copied().enumerate() {
        qt.insert(r, i as u32).unwrap();
    }
    qt
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_grid");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_n{}", n), |b| {
            b.iter_batched(
                Quadtree::<u32>::new,
                |mut qt| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        qt.insert(r, i as u32).unwrap();
                    }
                    let hits = qt
                        .query(Rect::from_xywh(100.0, 100.0, 400.0, 400.0))
                        .len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_random");
    let rects = gen_random_rects(4096, 4000.0, 12.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("insert_query", |b| {
        b.iter_batched(
            Quadtree::<u32>::new,
            |mut qt| {
                for (i, r) in rects.iter().copied().enumerate() {
                    qt.insert(r, i as u32).unwrap();
                }
                let hits = qt
                    .query(Rect::from_xywh(-200.0, -200.0, 400.0, 400.0))
                    .len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_points");
    let rects = gen_points(4096, 2000.0);
    group.bench_function("insert_query", |b| {
        b.iter_batched(
            Quadtree::<u32>::new,
            |mut qt| {
                for (i, r) in rects.iter().copied().enumerate() {
                    qt.insert(r, i as u32).unwrap();
                }
                let hits = qt
                    .query(Rect::from_xywh(800.0, 800.0, 100.0, 100.0))
                    .len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_reroot(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_reroot");
    let rects = gen_scattered_magnitudes(4096);
    group.bench_function("insert_across_magnitudes", |b| {
        b.iter(|| black_box(build(&rects).depth()))
    });
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_churn");
    let rects = gen_random_rects(4096, 4000.0, 12.0);
    group.bench_function("remove_then_reinsert", |b| {
        b.iter_batched(
            || build(&rects),
            |mut qt| {
                for (i, r) in rects.iter().copied().enumerate() {
                    qt.remove(r, i as u32);
                }
                for (i, r) in rects.iter().copied().enumerate() {
                    qt.insert(r, i as u32).unwrap();
                }
                black_box(qt.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_heavy");
    let qt = build(&gen_grid_rects(128, 8.0));
    group.bench_function("many_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) as f64 * 8.0;
                let y = (q / 64) as f64 * 64.0;
                qt.visit(Rect::from_xywh(x, y, 32.0, 32.0), |_| total += 1);
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_grid,
    bench_random,
    bench_points,
    bench_reroot,
    bench_churn,
    bench_query_heavy,
);
criterion_main!(benches);
