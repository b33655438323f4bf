// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip: hover-intent-delayed disclosure of a label.

use armature_dismiss::DismissPolicy;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};
use armature_timing::IntentDelays;

use crate::stage::{FamilyProfile, Stage};

/// One tooltip.
///
/// Opens only after the pointer has rested on the trigger for the open
/// delay; a pointer that merely passes through never opens it, because the
/// leave cancels the pending intent outright. Escape closes an open
/// tooltip; it takes no part in outside-press dismissal and never touches
/// focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    widget: WidgetId,
    trigger: PartId,
    content: PartId,
}

impl Tooltip {
    /// Creates a tooltip with the default 700 ms / 300 ms intent delays.
    pub fn create(stage: &mut Stage) -> Self {
        Self::create_with_delays(stage, IntentDelays::default())
    }

    /// Creates a tooltip with explicit intent delays.
    pub fn create_with_delays(stage: &mut Stage, delays: IntentDelays) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                dismissal: DismissPolicy::ESCAPE,
                delays: Some(delays),
                ..FamilyProfile::default()
            },
        );
        let trigger = stage
            .attach_part(widget, PartDesc::new(PartRole::Trigger))
            .expect("widget created above is live");
        let content = stage
            .attach_part(widget, PartDesc::new(PartRole::Content))
            .expect("widget created above is live");
        stage.bind_pair(trigger, content);
        Self {
            widget,
            trigger,
            content,
        }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.widget
    }

    /// The trigger part.
    #[must_use]
    pub fn trigger(self) -> PartId {
        self.trigger
    }

    /// The content part.
    #[must_use]
    pub fn content(self) -> PartId {
        self.content
    }

    /// Whether the tooltip is visible.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// The pointer entered the trigger.
    pub fn pointer_enter(self, stage: &mut Stage, now: u64) {
        stage.pointer_enter(self.widget, now);
    }

    /// The pointer left the trigger.
    pub fn pointer_leave(self, stage: &mut Stage, now: u64) {
        stage.pointer_leave(self.widget, now);
    }
}
