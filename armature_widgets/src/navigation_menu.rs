// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation menu: hovered submenus with a grace delay on leave.

use alloc::string::String;

use armature_attrs::SelectionAria;
use armature_registry::{
    Orientation, PartDesc, PartId, WidgetConfig, WidgetId, WidgetKind,
};
use armature_timing::{IntentDelays, IntentState, IntentTransition};

use crate::stage::{FamilyProfile, Stage};

/// One navigation menu.
///
/// A horizontal single-select whose active value is the open submenu.
/// Entering a trigger switches the open submenu immediately; leaving the
/// menu schedules a delayed clear, so a pointer that briefly strays (or
/// travels toward the open panel) does not slam it shut. Re-entering
/// before the delay elapses cancels the pending clear.
#[derive(Debug)]
pub struct NavigationMenu {
    widget: WidgetId,
    intent: IntentState,
}

impl NavigationMenu {
    /// Creates a navigation menu with the default 300 ms leave grace.
    pub fn create(stage: &mut Stage) -> Self {
        Self::create_with_grace(stage, 300)
    }

    /// Creates a navigation menu with an explicit leave grace.
    pub fn create_with_grace(stage: &mut Stage, grace_ms: u64) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::SingleSelect { collapsible: true },
                orientation: Orientation::Horizontal,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Expanded,
                ..FamilyProfile::default()
            },
        );
        Self {
            widget,
            intent: IntentState::new(IntentDelays {
                open_ms: 0,
                close_ms: grace_ms,
            }),
        }
    }

    /// The widget id.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.widget
    }

    /// Adds a submenu trigger with its value.
    pub fn add_item(&self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.widget, PartDesc::item(value))
            .expect("navigation menu widget is live")
    }

    /// The open submenu's value.
    #[must_use]
    pub fn open_value(&self, stage: &Stage) -> Option<String> {
        stage.state(self.widget)?.active_value().map(String::from)
    }

    /// The pointer entered the trigger for `value`: open its submenu now.
    pub fn enter_item(&mut self, stage: &mut Stage, value: &str, now: u64) {
        if self.open_value(stage).as_deref() != Some(value) {
            stage.select_single(self.widget, value, now);
        }
        // Cancels any pending clear from an earlier leave.
        self.intent.request_open(now);
    }

    /// The pointer left the menu: schedule the delayed clear.
    pub fn leave(&mut self, now: u64) {
        self.intent.request_close(now);
    }

    /// Advances host time; commits the pending clear once its grace
    /// elapses.
    pub fn tick(&mut self, stage: &mut Stage, now: u64) {
        if self.intent.tick(now) == Some(IntentTransition::Closed) {
            stage.clear_single(self.widget, now);
        }
    }

    /// Closes the open submenu immediately (Escape).
    pub fn close(&mut self, stage: &mut Stage, now: u64) {
        self.intent.close_now();
        stage.clear_single(self.widget, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_switches_submenus_immediately() {
        let mut stage = Stage::new();
        let mut nav = NavigationMenu::create(&mut stage);
        nav.add_item(&mut stage, "products");
        nav.add_item(&mut stage, "docs");

        nav.enter_item(&mut stage, "products", 0);
        assert_eq!(nav.open_value(&stage).as_deref(), Some("products"));

        nav.enter_item(&mut stage, "docs", 100);
        assert_eq!(nav.open_value(&stage).as_deref(), Some("docs"));
    }

    #[test]
    fn leave_clears_only_after_the_grace() {
        let mut stage = Stage::new();
        let mut nav = NavigationMenu::create(&mut stage);
        nav.add_item(&mut stage, "products");

        nav.enter_item(&mut stage, "products", 0);
        nav.leave(1_000);

        nav.tick(&mut stage, 1_200);
        assert_eq!(nav.open_value(&stage).as_deref(), Some("products"));

        nav.tick(&mut stage, 1_300);
        assert_eq!(nav.open_value(&stage), None);
    }

    #[test]
    fn reentry_cancels_the_pending_clear() {
        let mut stage = Stage::new();
        let mut nav = NavigationMenu::create(&mut stage);
        nav.add_item(&mut stage, "products");

        nav.enter_item(&mut stage, "products", 0);
        nav.leave(1_000);
        nav.enter_item(&mut stage, "products", 1_100);

        nav.tick(&mut stage, u64::MAX);
        assert_eq!(nav.open_value(&stage).as_deref(), Some("products"));
    }

    #[test]
    fn close_is_immediate() {
        let mut stage = Stage::new();
        let mut nav = NavigationMenu::create(&mut stage);
        nav.add_item(&mut stage, "products");

        nav.enter_item(&mut stage, "products", 0);
        nav.close(&mut stage, 1);
        assert_eq!(nav.open_value(&stage), None);
    }
}
