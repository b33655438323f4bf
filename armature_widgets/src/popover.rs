// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover: a non-modal overlay anchored to its trigger.

use armature_dismiss::DismissPolicy;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::stage::{FamilyProfile, Stage};

/// One popover.
///
/// Like a dialog it captures and restores focus and dismisses on outside
/// press or Escape, but it is not modal: the rest of the page stays
/// interactive and `aria-modal` is never projected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Popover {
    widget: WidgetId,
    trigger: PartId,
    content: PartId,
}

impl Popover {
    /// Creates a popover with trigger and content parts attached.
    pub fn create(stage: &mut Stage) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                dismissal: DismissPolicy::OVERLAY,
                focus_capture: true,
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

    /// Whether the popover is open.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Toggles the popover, as its trigger does.
    pub fn toggle(self, stage: &mut Stage, now: u64) -> bool {
        stage.toggle_open(self.widget, now)
    }

    /// Closes the popover.
    pub fn close(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, false, now)
    }
}
