// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Armature benchmarks.

use armature_registry::{Orientation, WidgetConfig, WidgetFlags, WidgetKind};

/// The single-select configuration shared by the mutation benchmarks.
#[must_use]
pub fn single_select_config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::SingleSelect { collapsible: false },
        orientation: Orientation::Vertical,
        flags: WidgetFlags::LOOP,
    }
}

/// A disabled-flag pattern with every `stride`-th item disabled.
#[must_use]
pub fn striped_disabled(count: usize, stride: usize) -> Vec<bool> {
    (0..count).map(|idx| stride != 0 && idx % stride == 0).collect()
}
