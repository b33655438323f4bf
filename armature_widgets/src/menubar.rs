// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menubar: horizontal roving across menu triggers, open menu follows.

use alloc::string::String;
use alloc::vec::Vec;

use armature_attrs::SelectionAria;
use armature_registry::{
    Orientation, PartDesc, PartId, WidgetConfig, WidgetId, WidgetKind,
};

use crate::menu::Menu;
use crate::router::{Key, RouterVerdict};
use crate::stage::{FamilyProfile, Stage};

/// One menubar.
///
/// The bar itself is a horizontal single-select whose item values name its
/// menus; the active value is the open menu. While a menu is open, moving
/// the roving cursor re-targets the open menu to the one under the cursor;
/// with everything closed, arrows only move the cursor.
#[derive(Clone, Debug)]
pub struct Menubar {
    widget: WidgetId,
    menus: Vec<(String, Menu)>,
}

impl Menubar {
    /// Creates an empty menubar.
    pub fn create(stage: &mut Stage) -> Self {
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
            menus: Vec::new(),
        }
    }

    /// The widget id.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.widget
    }

    /// Registers a menu under the bar; returns the bar item that anchors
    /// it.
    pub fn add_menu(&mut self, stage: &mut Stage, value: impl Into<String>, menu: Menu) -> PartId {
        let value = value.into();
        let part = stage
            .attach_part(self.widget, PartDesc::item(value.clone()))
            .expect("menubar widget is live");
        self.menus.push((value, menu));
        part
    }

    /// The open menu's value.
    #[must_use]
    pub fn open_value(&self, stage: &Stage) -> Option<String> {
        stage.state(self.widget)?.active_value().map(String::from)
    }

    /// Opens the menu anchored at `value` (closing any other).
    pub fn activate(&self, stage: &mut Stage, value: &str, now: u64) -> bool {
        // Re-activating the open value must keep it open, so the
        // collapsible toggle-off only ever comes from the item itself.
        let mutated = if self.open_value(stage).as_deref() == Some(value) {
            false
        } else {
            stage.select_single(self.widget, value, now)
        };
        self.sync_menus(stage, now);
        mutated
    }

    /// Closes whichever menu is open.
    pub fn close(&self, stage: &mut Stage, now: u64) -> bool {
        let mutated = stage.clear_single(self.widget, now);
        self.sync_menus(stage, now);
        mutated
    }

    /// Routes a key press on a bar item.
    ///
    /// Arrows rove; while a menu is open, the open menu follows the
    /// cursor. Enter/Space opens the menu under the cursor.
    pub fn handle_key(
        &self,
        stage: &mut Stage,
        part: PartId,
        key: Key,
        now: u64,
    ) -> RouterVerdict {
        if key == Key::Escape && self.open_value(stage).is_some() {
            self.close(stage, now);
            return RouterVerdict::Handled;
        }

        let was_open = self.open_value(stage).is_some();
        let verdict = stage.handle_key(part, key, now);
        if verdict != RouterVerdict::Handled {
            return verdict;
        }

        if key.nav().is_some() && was_open {
            // The open menu follows the cursor.
            if let Some(value) = stage.focused_value(self.widget) {
                self.activate(stage, &value, now);
            }
        } else if key.is_activation() {
            self.sync_menus(stage, now);
        }
        verdict
    }

    fn sync_menus(&self, stage: &mut Stage, now: u64) {
        let open = self.open_value(stage);
        for (value, menu) in &self.menus {
            if open.as_deref() == Some(value) {
                menu.open(stage, now);
            } else {
                menu.close(stage, now);
            }
        }
    }
}
