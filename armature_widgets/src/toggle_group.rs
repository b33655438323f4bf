// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle group: pressed items with single or multiple membership.

use alloc::string::String;

use armature_attrs::{SelectionAria, StateWording};
use armature_registry::{
    Orientation, PartDesc, PartId, WidgetConfig, WidgetId, WidgetKind,
};

use crate::router::{Key, RouterVerdict};
use crate::stage::{FamilyProfile, MultiEventKind, Stage};

/// Membership arity of a toggle group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToggleGroupKind {
    /// At most one item pressed; pressing it again always releases it
    /// (unconditional toggle-off, unlike plain single-select tabs).
    Single,
    /// Any number of items pressed.
    Multiple,
}

/// One toggle group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToggleGroup {
    widget: WidgetId,
}

impl ToggleGroup {
    /// Creates an empty toggle group.
    pub fn create(stage: &mut Stage, kind: ToggleGroupKind, orientation: Orientation) -> Self {
        let kind = match kind {
            // Single toggle groups always toggle off on re-press.
            ToggleGroupKind::Single => WidgetKind::SingleSelect { collapsible: true },
            ToggleGroupKind::Multiple => WidgetKind::MultiSelect,
        };
        let widget = stage.create_widget(
            WidgetConfig {
                kind,
                orientation,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Pressed,
                wording: StateWording::OnOff,
                multi_event: MultiEventKind::ValueList,
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

    /// Adds an item with the given value.
    pub fn add_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value))
            .expect("toggle group widget is live")
    }

    /// Adds a disabled item.
    pub fn add_disabled_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value).disabled())
            .expect("toggle group widget is live")
    }

    /// Presses the item holding `value`.
    pub fn press_item(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        match stage.registry().kind(self.widget) {
            Some(WidgetKind::SingleSelect { .. }) => stage.select_single(self.widget, value, now),
            Some(WidgetKind::MultiSelect) => stage.select_multiple(self.widget, value, now),
            _ => false,
        }
    }

    /// The pressed value of a single group.
    #[must_use]
    pub fn value(self, stage: &Stage) -> Option<String> {
        stage.state(self.widget)?.active_value().map(String::from)
    }

    /// Routes a key press on a group item.
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        stage.handle_key(part, key, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_attrs::{AttrName, AttrValue};

    #[test]
    fn single_group_toggle_off_is_unconditional() {
        let mut stage = Stage::new();
        let group = ToggleGroup::create(
            &mut stage,
            ToggleGroupKind::Single,
            Orientation::Horizontal,
        );
        for value in ["left", "center", "right"] {
            group.add_item(&mut stage, value);
        }

        group.press_item(&mut stage, "center", 0);
        assert_eq!(group.value(&stage).as_deref(), Some("center"));

        // Pressing the pressed item releases it.
        group.press_item(&mut stage, "center", 1);
        assert_eq!(group.value(&stage), None);
    }

    #[test]
    fn multiple_group_membership_is_independent() {
        let mut stage = Stage::new();
        let group = ToggleGroup::create(
            &mut stage,
            ToggleGroupKind::Multiple,
            Orientation::Horizontal,
        );
        let bold = group.add_item(&mut stage, "bold");
        group.add_item(&mut stage, "italic");

        group.press_item(&mut stage, "bold", 0);
        group.press_item(&mut stage, "italic", 1);
        assert_eq!(
            stage.state(group.id()).unwrap().active_values(),
            ["bold", "italic"]
        );

        let attrs = stage.attrs_for(bold).unwrap();
        assert_eq!(attrs.get(AttrName::AriaPressed), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.get(AttrName::DataState), Some(&AttrValue::Static("on")));

        // Toggle is its own inverse.
        group.press_item(&mut stage, "bold", 2);
        group.press_item(&mut stage, "bold", 3);
        assert_eq!(
            stage.state(group.id()).unwrap().active_values(),
            ["italic", "bold"]
        );
    }

    #[test]
    fn horizontal_group_roves_with_left_right() {
        let mut stage = Stage::new();
        let group = ToggleGroup::create(
            &mut stage,
            ToggleGroupKind::Single,
            Orientation::Horizontal,
        );
        let left = group.add_item(&mut stage, "left");
        group.add_item(&mut stage, "center");

        stage.set_focused(group.id(), 0, 0);
        let verdict = group.handle_key(&mut stage, left, Key::ArrowRight, 0);
        assert_eq!(verdict, RouterVerdict::Handled);
        assert_eq!(stage.state(group.id()).unwrap().focused(), Some(1));
    }
}
