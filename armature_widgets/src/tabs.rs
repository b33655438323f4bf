// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabs: single selection with roving triggers and paired panels.

use alloc::string::String;

use armature_attrs::{SelectionAria, StateWording};
use armature_registry::{
    Orientation, PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind,
};

use crate::router::{Key, RouterVerdict};
use crate::stage::{DeferredOp, FamilyProfile, Stage};

/// How tab selection follows the roving cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Moving the cursor selects the tab it lands on.
    #[default]
    Automatic,
    /// The cursor moves freely; Enter/Space selects.
    Manual,
}

/// One tab: its trigger and its panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    /// The tab trigger (an item part).
    pub trigger: PartId,
    /// The panel shown while this tab is active.
    pub panel: PartId,
}

/// One tab list with its panels.
///
/// Plain single-select: re-selecting the active tab is a no-op (there is
/// no "no tab selected" state to toggle back to once one is active).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tabs {
    widget: WidgetId,
    activation: Activation,
}

impl Tabs {
    /// Creates an empty tab list.
    pub fn create(stage: &mut Stage, activation: Activation, orientation: Orientation) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::SingleSelect { collapsible: false },
                orientation,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Selected,
                wording: StateWording::ActiveInactive,
                ..FamilyProfile::default()
            },
        );
        Self { widget, activation }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.widget
    }

    /// Adds a tab with the given value.
    pub fn add_tab(self, stage: &mut Stage, value: impl Into<String>) -> Tab {
        self.add_tab_inner(stage, value.into(), false)
    }

    /// Adds a disabled tab.
    pub fn add_disabled_tab(self, stage: &mut Stage, value: impl Into<String>) -> Tab {
        self.add_tab_inner(stage, value.into(), true)
    }

    fn add_tab_inner(self, stage: &mut Stage, value: String, disabled: bool) -> Tab {
        let mut desc = PartDesc::item(value.clone());
        if disabled {
            desc = desc.disabled();
        }
        let trigger = stage
            .attach_part(self.widget, desc)
            .expect("tabs widget is live");
        let panel = stage
            .attach_part(
                self.widget,
                PartDesc {
                    role: PartRole::Content,
                    value: Some(value),
                    disabled,
                    autofocus: false,
                },
            )
            .expect("tabs widget is live");
        stage.bind_pair(trigger, panel);
        Tab { trigger, panel }
    }

    /// Selects a tab by value.
    pub fn select(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        stage.select_single(self.widget, value, now)
    }

    /// The active tab value.
    #[must_use]
    pub fn value(self, stage: &Stage) -> Option<String> {
        stage.state(self.widget)?.active_value().map(String::from)
    }

    /// Routes a key press on a tab trigger.
    ///
    /// Under automatic activation a cursor move also selects the tab it
    /// lands on; the selection is deferred past the focus dispatch and
    /// flushed before returning, so subscribers never observe it from
    /// inside the move's own delivery.
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        let verdict = stage.handle_key(part, key, now);

        if self.activation == Activation::Automatic
            && verdict == RouterVerdict::Handled
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

#[cfg(test)]
mod tests {
    use super::*;
    use armature_attrs::{AttrName, AttrValue};

    fn tabs(stage: &mut Stage, activation: Activation) -> (Tabs, [Tab; 3]) {
        let tabs = Tabs::create(stage, activation, Orientation::Horizontal);
        let a = tabs.add_tab(stage, "a");
        let b = tabs.add_tab(stage, "b");
        let c = tabs.add_tab(stage, "c");
        (tabs, [a, b, c])
    }

    #[test]
    fn selecting_switches_panels() {
        let mut stage = Stage::new();
        let (tabs, [a, b, _]) = tabs(&mut stage, Activation::Manual);

        tabs.select(&mut stage, "a", 0);
        let panel_a = stage.attrs_for(a.panel).unwrap();
        assert!(!panel_a.contains(AttrName::AriaHidden));

        tabs.select(&mut stage, "b", 0);
        let panel_a = stage.attrs_for(a.panel).unwrap();
        assert_eq!(panel_a.get(AttrName::AriaHidden), Some(&AttrValue::Bool(true)));
        let panel_b = stage.attrs_for(b.panel).unwrap();
        assert!(!panel_b.contains(AttrName::AriaHidden));
    }

    #[test]
    fn reselecting_the_active_tab_is_a_noop() {
        let mut stage = Stage::new();
        let (tabs, _) = tabs(&mut stage, Activation::Manual);

        tabs.select(&mut stage, "b", 0);
        let revision = stage.state(tabs.id()).unwrap().revision();
        assert!(!tabs.select(&mut stage, "b", 0));
        assert_eq!(stage.state(tabs.id()).unwrap().revision(), revision);
    }

    #[test]
    fn horizontal_tabs_navigate_with_left_right() {
        let mut stage = Stage::new();
        let (tabs, [a, _, _]) = tabs(&mut stage, Activation::Manual);
        stage.set_focused(tabs.id(), 0, 0);

        assert_eq!(
            tabs.handle_key(&mut stage, a.trigger, Key::ArrowRight, 0),
            RouterVerdict::Handled
        );
        assert_eq!(stage.state(tabs.id()).unwrap().focused(), Some(1));

        // The vertical pair is the cross axis and falls through.
        assert_eq!(
            tabs.handle_key(&mut stage, a.trigger, Key::ArrowDown, 0),
            RouterVerdict::Ignored
        );
    }

    #[test]
    fn automatic_activation_selects_on_move() {
        let mut stage = Stage::new();
        let (tabs, [a, _, _]) = tabs(&mut stage, Activation::Automatic);
        tabs.select(&mut stage, "a", 0);
        stage.set_focused(tabs.id(), 0, 0);

        tabs.handle_key(&mut stage, a.trigger, Key::ArrowRight, 0);
        assert_eq!(tabs.value(&stage).as_deref(), Some("b"));
    }

    #[test]
    fn manual_activation_selects_only_on_enter() {
        let mut stage = Stage::new();
        let (tabs, [a, b, _]) = tabs(&mut stage, Activation::Manual);
        tabs.select(&mut stage, "a", 0);
        stage.set_focused(tabs.id(), 0, 0);

        tabs.handle_key(&mut stage, a.trigger, Key::ArrowRight, 0);
        assert_eq!(tabs.value(&stage).as_deref(), Some("a"));

        tabs.handle_key(&mut stage, b.trigger, Key::Enter, 0);
        assert_eq!(tabs.value(&stage).as_deref(), Some("b"));
    }

    #[test]
    fn home_and_end_jump_across_the_list() {
        let mut stage = Stage::new();
        let (tabs, [_, b, _]) = tabs(&mut stage, Activation::Manual);
        stage.set_focused(tabs.id(), 1, 0);

        tabs.handle_key(&mut stage, b.trigger, Key::End, 0);
        assert_eq!(stage.state(tabs.id()).unwrap().focused(), Some(2));
        tabs.handle_key(&mut stage, b.trigger, Key::Home, 0);
        assert_eq!(stage.state(tabs.id()).unwrap().focused(), Some(0));
    }
}
