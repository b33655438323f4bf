// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State-container mutation and broadcast micro-benchmarks.

use armature_benches::single_select_config;
use armature_state::{Notifier, WidgetState};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_select_single(c: &mut Criterion) {
    c.bench_function("state_select_single_alternating", |b| {
        let mut state = WidgetState::new(&single_select_config());
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let value = if flip { "a" } else { "b" };
            state.select_single(black_box(value))
        });
    });
}

fn bench_noop_reselect(c: &mut Criterion) {
    c.bench_function("state_select_single_noop", |b| {
        let mut state = WidgetState::new(&single_select_config());
        state.select_single("a");
        b.iter(|| state.select_single(black_box("a")));
    });
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifier_broadcast");
    for subscribers in [1_usize, 8, 64] {
        group.bench_function(subscribers.to_string(), |b| {
            let mut state = WidgetState::new(&single_select_config());
            let mut notifier = Notifier::new();
            for _ in 0..subscribers {
                notifier.subscribe(|change| {
                    black_box(change.revision);
                });
            }
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let value = if flip { "a" } else { "b" };
                if let Some(change) = state.select_single(value) {
                    notifier.broadcast(&change);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_single, bench_noop_reselect, bench_broadcast);
criterion_main!(benches);
