// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group: exclusive selection where arrows select as they move.

use alloc::string::String;

use armature_attrs::{SelectionAria, StateWording};
use armature_registry::{
    Orientation, PartDesc, PartId, WidgetConfig, WidgetId, WidgetKind,
};

use crate::router::{Key, RouterVerdict};
use crate::stage::{DeferredOp, FamilyProfile, Stage};

/// One radio group.
///
/// Plain single-select (re-selecting the checked item is a no-op), with
/// radio keyboard semantics: moving the roving cursor checks the item it
/// lands on, so there is never a focused-but-unchecked radio after arrow
/// navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RadioGroup {
    widget: WidgetId,
}

impl RadioGroup {
    /// Creates an empty radio group.
    pub fn create(stage: &mut Stage, orientation: Orientation) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::SingleSelect { collapsible: false },
                orientation,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Checked,
                wording: StateWording::CheckedUnchecked,
                ..FamilyProfile::default()
            },
        );
        Self { widget }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.widget
    }

    /// Adds a radio item.
    pub fn add_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value))
            .expect("radio group widget is live")
    }

    /// Adds a disabled radio item.
    pub fn add_disabled_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value).disabled())
            .expect("radio group widget is live")
    }

    /// Checks the item holding `value`.
    pub fn check(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        stage.select_single(self.widget, value, now)
    }

    /// The checked value.
    #[must_use]
    pub fn value(self, stage: &Stage) -> Option<String> {
        stage.state(self.widget)?.active_value().map(String::from)
    }

    /// Routes a key press on a radio item.
    ///
    /// Arrow moves check the destination item as part of the same
    /// interaction (deferred past the focus dispatch, like automatic
    /// tabs).
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        let verdict = stage.handle_key(part, key, now);

        if verdict == RouterVerdict::Handled
            && key.nav().is_some()
            && let Some(value) = stage.focused_value(self.widget)
        {
            stage.defer(DeferredOp::SelectSingle {
                widget: self.widget,
                value,
            });
            stage.flush_deferred(now);
        }
        verdict
    }
}
