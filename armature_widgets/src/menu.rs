// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu: an action-item popup with roving navigation.

use alloc::string::{String, ToString};

use armature_attrs::{SelectionAria, StateWording};
use armature_dismiss::DismissPolicy;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::events::{ChangeEvent, EventValue};
use crate::router::{Key, RouterVerdict};
use crate::stage::{FamilyProfile, MultiEventKind, Stage};

/// One menu.
///
/// Action items carry no persistent selection: activating one fires a
/// `value-change` with the item's value, closes the menu, and focus
/// returns to the trigger. Checkbox items toggle a persistent checked set
/// instead, firing `checked-change` and leaving the menu open. Escape
/// closes without activating; arrows rove across enabled items, skipping
/// disabled ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    widget: WidgetId,
    /// Checked-state holder for checkbox items.
    checks: WidgetId,
    trigger: PartId,
    content: PartId,
}

impl Menu {
    /// Creates a menu with trigger and content parts attached.
    pub fn create(stage: &mut Stage) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                dismissal: DismissPolicy::OVERLAY,
                focus_capture: true,
                haspopup: Some("menu"),
                ..FamilyProfile::default()
            },
        );
        let checks = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::MultiSelect,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Checked,
                wording: StateWording::CheckedUnchecked,
                multi_event: MultiEventKind::Checked,
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
            checks,
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

    /// Adds an action item.
    pub fn add_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value))
            .expect("menu widget is live")
    }

    /// Adds a disabled action item.
    pub fn add_disabled_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value).disabled())
            .expect("menu widget is live")
    }

    /// Adds a checkbox item holding persistent checked state.
    pub fn add_checkbox_item(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.checks, PartDesc::item(value))
            .expect("menu check widget is live")
    }

    /// Toggles a checkbox item's checked state. The menu stays open.
    pub fn toggle_checkbox_item(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        stage.select_multiple(self.checks, value, now)
    }

    /// Whether a checkbox item is checked.
    #[must_use]
    pub fn is_checked(self, stage: &Stage, value: &str) -> bool {
        stage
            .state(self.checks)
            .is_some_and(|state| state.is_selected(value))
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Opens the menu.
    pub fn open(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, true, now)
    }

    /// Closes the menu.
    pub fn close(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, false, now)
    }

    /// Activates an item: fires its value and closes the menu.
    pub fn activate_item(self, stage: &mut Stage, part: PartId, now: u64) -> RouterVerdict {
        if stage.registry().owner_of(part) != Some(self.widget)
            || stage.registry().part_disabled(part)
        {
            return RouterVerdict::Ignored;
        }
        let Some(value) = stage.registry().value_of(part).map(ToString::to_string) else {
            return RouterVerdict::Ignored;
        };
        stage.emit_change(
            self.widget,
            ChangeEvent::ValueChange {
                value: EventValue::Text(value),
            },
        );
        self.close(stage, now);
        RouterVerdict::Handled
    }

    /// Routes a key press on a menu part.
    ///
    /// Enter/Space on an action item activates it; on a checkbox item it
    /// toggles the check without closing. Everything else (Escape close,
    /// arrow roving, trigger activation) is the shared routing.
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        if key.is_activation()
            && stage.registry().role_of(part) == Some(PartRole::Item)
            && stage.state(self.widget).is_some_and(|state| !state.disabled())
        {
            if stage.registry().owner_of(part) == Some(self.checks) {
                // The shared item routing already toggles multi-select
                // membership; checkbox items just skip the close.
                return stage.handle_key(part, key, now);
            }
            return self.activate_item(stage, part, now);
        }
        if key == Key::Escape && stage.registry().owner_of(part) == Some(self.checks) {
            // Escape on a checkbox item still closes the menu it sits in.
            return if self.is_open(stage) && self.close(stage, now) {
                RouterVerdict::Handled
            } else {
                RouterVerdict::Ignored
            };
        }
        stage.handle_key(part, key, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_attrs::{AttrName, AttrValue};
    use crate::stage::StageEvent;

    fn menu(stage: &mut Stage) -> (Menu, [PartId; 3]) {
        let menu = Menu::create(stage);
        let cut = menu.add_item(stage, "cut");
        let copy = menu.add_disabled_item(stage, "copy");
        let paste = menu.add_item(stage, "paste");
        (menu, [cut, copy, paste])
    }

    #[test]
    fn trigger_advertises_the_popup() {
        let mut stage = Stage::new();
        let (menu, _) = menu(&mut stage);

        let attrs = stage.attrs_for(menu.trigger()).unwrap();
        assert_eq!(
            attrs.get(AttrName::AriaHasPopup),
            Some(&AttrValue::Static("menu"))
        );
    }

    #[test]
    fn activating_an_item_fires_and_closes() {
        let mut stage = Stage::new();
        let (menu, [cut, ..]) = menu(&mut stage);
        stage.note_focus(Some(menu.trigger()));
        menu.open(&mut stage, 0);
        stage.drain_events();

        let verdict = menu.handle_key(&mut stage, cut, Key::Enter, 1);
        assert_eq!(verdict, RouterVerdict::Handled);
        assert!(!menu.is_open(&stage));

        let events = stage.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            StageEvent::Change {
                event: ChangeEvent::ValueChange {
                    value: EventValue::Text(value)
                },
                ..
            } if value == "cut"
        )));
        // Focus returns to the trigger.
        assert!(events.iter().any(|event| matches!(
            event,
            StageEvent::Focus { target, .. } if *target == menu.trigger()
        )));
    }

    #[test]
    fn disabled_items_do_not_activate() {
        let mut stage = Stage::new();
        let (menu, [_, copy, _]) = menu(&mut stage);
        menu.open(&mut stage, 0);

        let verdict = menu.handle_key(&mut stage, copy, Key::Enter, 1);
        assert_eq!(verdict, RouterVerdict::Ignored);
        assert!(menu.is_open(&stage));
    }

    #[test]
    fn arrows_rove_and_skip_disabled_items() {
        let mut stage = Stage::new();
        let (menu, [cut, ..]) = menu(&mut stage);
        menu.open(&mut stage, 0);
        stage.set_focused(menu.id(), 0, 0);

        menu.handle_key(&mut stage, cut, Key::ArrowDown, 1);
        // "copy" is disabled, so the cursor lands on "paste".
        assert_eq!(stage.state(menu.id()).unwrap().focused(), Some(2));
    }

    #[test]
    fn escape_closes_without_activating() {
        let mut stage = Stage::new();
        let (menu, [cut, ..]) = menu(&mut stage);
        menu.open(&mut stage, 0);
        stage.drain_events();

        let verdict = menu.handle_key(&mut stage, cut, Key::Escape, 1);
        assert_eq!(verdict, RouterVerdict::Handled);
        assert!(!menu.is_open(&stage));

        let events = stage.drain_events();
        assert!(!events.iter().any(|event| matches!(
            event,
            StageEvent::Change {
                event: ChangeEvent::ValueChange { .. },
                ..
            }
        )));
    }

    #[test]
    fn checkbox_items_toggle_and_keep_the_menu_open() {
        let mut stage = Stage::new();
        let menu = Menu::create(&mut stage);
        let wrap = menu.add_checkbox_item(&mut stage, "word-wrap");
        menu.open(&mut stage, 0);
        stage.drain_events();

        let verdict = menu.handle_key(&mut stage, wrap, Key::Enter, 1);
        assert_eq!(verdict, RouterVerdict::Handled);
        assert!(menu.is_open(&stage));
        assert!(menu.is_checked(&stage, "word-wrap"));

        let events = stage.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            StageEvent::Change {
                event: ChangeEvent::CheckedChange { value, checked: true },
                ..
            } if value == "word-wrap"
        )));

        // Toggle is its own inverse.
        menu.handle_key(&mut stage, wrap, Key::Enter, 2);
        assert!(!menu.is_checked(&stage, "word-wrap"));

        let attrs = stage.attrs_for(wrap).unwrap();
        assert_eq!(
            attrs.get(AttrName::AriaChecked),
            Some(&AttrValue::Bool(false))
        );
    }

    #[test]
    fn item_press_inside_the_menu_is_not_an_outside_press() {
        let mut stage = Stage::new();
        let (menu, [cut, ..]) = menu(&mut stage);
        menu.open(&mut stage, 0);

        stage.pointer_press(&[cut], None, 1);
        assert!(menu.is_open(&stage));
    }
}
