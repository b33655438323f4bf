// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog: a modal overlay with focus capture and restoration.

use armature_dismiss::DismissPolicy;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::stage::{FamilyProfile, Stage};

/// One modal dialog.
///
/// Opening records the previously focused element and moves focus into the
/// content (the first autofocus-marked part, else the content container);
/// closing restores focus when that element still exists. Outside presses
/// and Escape dismiss it — see [`crate::alert_dialog`] for the variant
/// that refuses both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    widget: WidgetId,
    trigger: PartId,
    content: PartId,
}

impl Dialog {
    /// Creates a dialog with trigger and content parts attached.
    pub fn create(stage: &mut Stage) -> Self {
        Self::create_with_policy(stage, DismissPolicy::OVERLAY)
    }

    pub(crate) fn create_with_policy(stage: &mut Stage, dismissal: DismissPolicy) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Modal,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                dismissal,
                modal: true,
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

    /// Attaches an additional part inside the content (e.g. a close
    /// button), optionally autofocus-marked.
    pub fn add_content_part(self, stage: &mut Stage, autofocus: bool) -> PartId {
        let mut desc = PartDesc::new(PartRole::Indicator);
        if autofocus {
            desc = desc.autofocus();
        }
        stage
            .attach_part(self.widget, desc)
            .expect("dialog widget is live")
    }

    /// Whether the dialog is open.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Opens the dialog.
    pub fn open(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, true, now)
    }

    /// Closes the dialog.
    pub fn close(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, false, now)
    }
}
