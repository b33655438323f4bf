// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-projection micro-benchmarks.

use armature_attrs::{ItemCx, PartCx, SelectionAria, StateWording, project};
use armature_registry::PartRole;
use armature_state::Snapshot;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_trigger_projection(c: &mut Criterion) {
    let cx = PartCx::new(PartRole::Trigger);
    let snapshot = Snapshot::Open { open: true };
    c.bench_function("project_trigger", |b| {
        b.iter(|| project(black_box(&cx), black_box(&snapshot)));
    });
}

fn bench_item_projection(c: &mut Criterion) {
    let mut cx = PartCx::new(PartRole::Item);
    cx.selection_aria = SelectionAria::Checked;
    cx.wording = StateWording::CheckedUnchecked;
    cx.item = Some(ItemCx {
        value: "item-17",
        disabled: false,
        tab_stop: true,
    });
    let snapshot = Snapshot::Single {
        active: Some("item-17".to_string()),
    };
    c.bench_function("project_checked_item", |b| {
        b.iter(|| project(black_box(&cx), black_box(&snapshot)));
    });
}

fn bench_stage_attrs(c: &mut Criterion) {
    use armature_registry::{Orientation, PartDesc, WidgetConfig, WidgetKind};
    use armature_widgets::stage::{FamilyProfile, Stage};

    let mut stage = Stage::new();
    let widget = stage.create_widget(
        WidgetConfig {
            kind: WidgetKind::SingleSelect { collapsible: false },
            orientation: Orientation::Vertical,
            ..WidgetConfig::default()
        },
        FamilyProfile::default(),
    );
    let parts: Vec<_> = (0..32)
        .map(|idx| {
            stage
                .attach_part(widget, PartDesc::item(format!("item-{idx}")))
                .unwrap()
        })
        .collect();
    stage.select_single(widget, "item-17", 0);

    c.bench_function("stage_attrs_for_32_items", |b| {
        b.iter(|| {
            for &part in &parts {
                black_box(stage.attrs_for(part));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_trigger_projection,
    bench_item_projection,
    bench_stage_attrs
);
criterion_main!(benches);
