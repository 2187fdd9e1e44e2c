//! Benchmark for level generation.
//!
//! TARGET: well under 10 microseconds per level
//!
//! Run with: cargo bench --package finquest_procedural --bench generation_benchmark

// criterion_group! emits an undocumented pub fn
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use finquest_procedural::{Curriculum, LevelContentGenerator, SeededRng};

fn benchmark_single_level(c: &mut Criterion) {
    let generator = LevelContentGenerator::bundled().expect("bundled catalog");

    c.bench_function("generate_single_level", |b| {
        let mut level = 0u32;
        b.iter(|| {
            level = level % 64 + 1;
            black_box(generator.generate(black_box("Budget Beach"), black_box(level)))
        });
    });
}

fn benchmark_all_worlds(c: &mut Criterion) {
    let curriculum = Curriculum::bundled().expect("bundled catalog");
    let world_ids: Vec<String> = curriculum
        .generator()
        .catalog()
        .worlds()
        .iter()
        .map(|w| w.id.clone())
        .collect();

    let mut group = c.benchmark_group("curriculum");
    group.throughput(Throughput::Elements(world_ids.len() as u64 * 8));

    group.bench_function("list_levels_every_world", |b| {
        b.iter(|| {
            for world in &world_ids {
                black_box(curriculum.list_levels(world).expect("levels"));
            }
        });
    });

    group.finish();
}

fn benchmark_rng(c: &mut Criterion) {
    c.bench_function("seeded_rng_seed_and_draw", |b| {
        b.iter(|| {
            let mut rng = SeededRng::new(black_box("CreditCanyon_l7"));
            black_box(rng.next())
        });
    });
}

criterion_group!(benches, benchmark_single_level, benchmark_all_worlds, benchmark_rng);
criterion_main!(benches);
