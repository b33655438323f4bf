// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving-navigation micro-benchmarks.

use armature_benches::striped_disabled;
use armature_nav::{NavIntent, WrapMode, next_index, tab_stop};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_next_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_next_index");
    for count in [8_usize, 64, 512] {
        let disabled = striped_disabled(count, 4);
        group.bench_with_input(BenchmarkId::from_parameter(count), &disabled, |b, d| {
            let mut at = Some(0);
            b.iter(|| {
                at = next_index(black_box(d), at, NavIntent::Next, WrapMode::Wrap);
                at
            });
        });
    }
    group.finish();
}

fn bench_full_cycle(c: &mut Criterion) {
    let disabled = striped_disabled(64, 4);
    let enabled = disabled.iter().filter(|&&d| !d).count();
    c.bench_function("nav_full_cycle_64", |b| {
        b.iter(|| {
            let mut at = Some(0);
            for _ in 0..enabled {
                at = next_index(black_box(&disabled), at, NavIntent::Next, WrapMode::Wrap);
            }
            at
        });
    });
}

fn bench_tab_stop(c: &mut Criterion) {
    let disabled = striped_disabled(512, 3);
    c.bench_function("nav_tab_stop_512", |b| {
        b.iter(|| tab_stop(black_box(&disabled), black_box(Some(200))));
    });
}

criterion_group!(benches, bench_next_index, bench_full_cycle, bench_tab_stop);
criterion_main!(benches);
