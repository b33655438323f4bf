// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select: a trigger-opened listbox committing a single value.

use alloc::string::{String, ToString};

use armature_attrs::{SelectionAria, StateWording};
use armature_dismiss::DismissPolicy;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::router::{Key, RouterVerdict};
use crate::stage::{FamilyProfile, Stage};

/// One select.
///
/// Two coupled widgets: a boolean popup (trigger + listbox content, the
/// usual overlay dismissal and focus capture) and a single-select list
/// holding the committed value. Choosing an option writes the value,
/// closes the popup, and focus returns to the trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Select {
    popup: WidgetId,
    list: WidgetId,
    trigger: PartId,
    listbox: PartId,
}

impl Select {
    /// Creates a select with trigger and listbox parts attached.
    pub fn create(stage: &mut Stage) -> Self {
        let popup = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                dismissal: DismissPolicy::OVERLAY,
                focus_capture: true,
                haspopup: Some("listbox"),
                ..FamilyProfile::default()
            },
        );
        let list = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::SingleSelect { collapsible: false },
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Selected,
                wording: StateWording::CheckedUnchecked,
                ..FamilyProfile::default()
            },
        );
        let trigger = stage
            .attach_part(popup, PartDesc::new(PartRole::Trigger))
            .expect("widget created above is live");
        let listbox = stage
            .attach_part(popup, PartDesc::new(PartRole::Content))
            .expect("widget created above is live");
        stage.bind_pair(trigger, listbox);
        Self {
            popup,
            list,
            trigger,
            listbox,
        }
    }

    /// The popup widget id.
    #[must_use]
    pub fn popup_id(self) -> WidgetId {
        self.popup
    }

    /// The value-list widget id.
    #[must_use]
    pub fn list_id(self) -> WidgetId {
        self.list
    }

    /// The trigger part.
    #[must_use]
    pub fn trigger(self) -> PartId {
        self.trigger
    }

    /// The listbox content part.
    #[must_use]
    pub fn listbox(self) -> PartId {
        self.listbox
    }

    /// Adds an option.
    pub fn add_option(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.list, PartDesc::item(value))
            .expect("select list widget is live")
    }

    /// Adds a disabled option.
    pub fn add_disabled_option(self, stage: &mut Stage, value: impl Into<String>) -> PartId {
        stage
            .attach_part(self.list, PartDesc::item(value).disabled())
            .expect("select list widget is live")
    }

    /// Whether the listbox is open.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.popup).is_some_and(|state| state.is_open())
    }

    /// The committed value.
    #[must_use]
    pub fn value(self, stage: &Stage) -> Option<String> {
        stage.state(self.list)?.active_value().map(String::from)
    }

    /// Opens the listbox.
    pub fn open(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.popup, true, now)
    }

    /// Closes the listbox without committing.
    pub fn close(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.popup, false, now)
    }

    /// Commits `value` and closes the listbox.
    pub fn choose(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        let mutated = stage.select_single(self.list, value, now);
        self.close(stage, now);
        mutated
    }

    /// Routes a key press on the trigger or an option.
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        if stage.state(self.popup).is_none_or(|state| state.disabled()) {
            return RouterVerdict::Ignored;
        }

        if part == self.trigger {
            // Enter, Space, and the vertical arrows all open the listbox.
            if key.is_activation() || matches!(key, Key::ArrowDown | Key::ArrowUp) {
                return if self.open(stage, now) {
                    RouterVerdict::Handled
                } else {
                    RouterVerdict::Ignored
                };
            }
            return stage.handle_key(part, key, now);
        }

        if stage.registry().owner_of(part) == Some(self.list) {
            if key == Key::Escape {
                self.close(stage, now);
                return RouterVerdict::Handled;
            }
            if key.is_activation() {
                if stage.registry().part_disabled(part) {
                    return RouterVerdict::Ignored;
                }
                let Some(value) = stage.registry().value_of(part).map(ToString::to_string)
                else {
                    return RouterVerdict::Ignored;
                };
                // Choosing the already-committed value still closes.
                self.choose(stage, &value, now);
                return RouterVerdict::Handled;
            }
            return stage.handle_key(part, key, now);
        }

        RouterVerdict::Ignored
    }
}
