// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible: a single trigger revealing a single content region.

use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::stage::{FamilyProfile, Stage};

/// One collapsible disclosure widget.
///
/// The simplest boolean family: a trigger toggles a content region. No
/// dismissal, no focus capture, no timing — pressing the trigger (or
/// calling [`Collapsible::toggle`]) is the only way state moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Collapsible {
    widget: WidgetId,
    trigger: PartId,
    content: PartId,
}

impl Collapsible {
    /// Creates a collapsible with its trigger and content parts attached
    /// and id-paired.
    pub fn create(stage: &mut Stage) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile::default(),
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

    /// Whether the content is revealed.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Toggles the content.
    pub fn toggle(self, stage: &mut Stage, now: u64) -> bool {
        stage.toggle_open(self.widget, now)
    }

    /// Opens the content.
    pub fn open(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, true, now)
    }

    /// Closes the content.
    pub fn close(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, false, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_attrs::{AttrName, AttrValue};
    use crate::events::ChangeEvent;
    use crate::stage::StageEvent;

    #[test]
    fn trigger_and_content_stay_in_sync() {
        let mut stage = Stage::new();
        let collapsible = Collapsible::create(&mut stage);

        collapsible.toggle(&mut stage, 0);
        assert!(collapsible.is_open(&stage));

        let trigger = stage.attrs_for(collapsible.trigger()).unwrap();
        assert_eq!(
            trigger.get(AttrName::AriaExpanded),
            Some(&AttrValue::Bool(true))
        );
        let content = stage.attrs_for(collapsible.content()).unwrap();
        assert_eq!(content.get(AttrName::DataState), Some(&AttrValue::Static("open")));

        // The content's id is what the trigger claims to control.
        assert_eq!(
            trigger.get(AttrName::AriaControls),
            content.get(AttrName::Id)
        );
    }

    #[test]
    fn toggling_emits_open_change() {
        let mut stage = Stage::new();
        let collapsible = Collapsible::create(&mut stage);

        collapsible.toggle(&mut stage, 0);
        let events = stage.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            StageEvent::Change {
                event: ChangeEvent::OpenChange { open: true },
                ..
            }
        )));
    }

    #[test]
    fn disabled_collapsible_ignores_toggle() {
        let mut stage = Stage::new();
        let collapsible = Collapsible::create(&mut stage);
        stage.set_disabled(collapsible.id(), true);
        stage.drain_events();

        assert!(!collapsible.toggle(&mut stage, 0));
        assert!(!collapsible.is_open(&stage));
        assert!(stage.drain_events().is_empty());
    }
}
