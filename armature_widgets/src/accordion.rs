// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion: value-keyed disclosure items, single or multiple open.

use alloc::string::String;

use armature_attrs::SelectionAria;
use armature_registry::{
    Orientation, PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind,
};

use crate::router::{Key, RouterVerdict};
use crate::stage::{FamilyProfile, Stage};

/// Selection arity of an accordion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccordionKind {
    /// At most one item open. With `collapsible`, toggling the open item
    /// closes it; without, one item is always open once any was.
    Single {
        /// Whether re-toggling the open item closes it.
        collapsible: bool,
    },
    /// Any number of items open; each toggle is independent.
    Multiple,
}

/// One accordion item: its header trigger and its panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccordionItem {
    /// The header trigger (an item part; arrows rove across these).
    pub trigger: PartId,
    /// The panel revealed while the item's value is active.
    pub panel: PartId,
}

/// One accordion widget.
///
/// Item triggers are item parts carrying the item value, so the roving
/// cursor moves across headers; panels are content parts carrying the same
/// value, so their visibility tracks membership. Header and panel are
/// id-paired per item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    widget: WidgetId,
}

impl Accordion {
    /// Creates an empty accordion.
    pub fn create(stage: &mut Stage, kind: AccordionKind, orientation: Orientation) -> Self {
        let kind = match kind {
            AccordionKind::Single { collapsible } => WidgetKind::SingleSelect { collapsible },
            AccordionKind::Multiple => WidgetKind::MultiSelect,
        };
        let widget = stage.create_widget(
            WidgetConfig {
                kind,
                orientation,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                selection_aria: SelectionAria::Expanded,
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
    pub fn add_item(self, stage: &mut Stage, value: impl Into<String>) -> AccordionItem {
        self.add_item_inner(stage, value.into(), false)
    }

    /// Adds a disabled item.
    pub fn add_disabled_item(self, stage: &mut Stage, value: impl Into<String>) -> AccordionItem {
        self.add_item_inner(stage, value.into(), true)
    }

    fn add_item_inner(self, stage: &mut Stage, value: String, disabled: bool) -> AccordionItem {
        let mut desc = PartDesc::item(value.clone());
        if disabled {
            desc = desc.disabled();
        }
        let trigger = stage
            .attach_part(self.widget, desc)
            .expect("accordion widget is live");
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
            .expect("accordion widget is live");
        stage.bind_pair(trigger, panel);
        AccordionItem { trigger, panel }
    }

    /// Toggles the item holding `value`.
    ///
    /// Single accordions replace the open item (toggling off only when
    /// collapsible); multiple accordions toggle membership independently.
    pub fn toggle_item(self, stage: &mut Stage, value: &str, now: u64) -> bool {
        match stage.registry().kind(self.widget) {
            Some(WidgetKind::SingleSelect { .. }) => stage.select_single(self.widget, value, now),
            Some(WidgetKind::MultiSelect) => stage.select_multiple(self.widget, value, now),
            _ => false,
        }
    }

    /// The open item's value, for single accordions.
    #[must_use]
    pub fn value(self, stage: &Stage) -> Option<String> {
        stage
            .state(self.widget)?
            .active_value()
            .map(String::from)
    }

    /// Routes a key press on an accordion header.
    pub fn handle_key(self, stage: &mut Stage, part: PartId, key: Key, now: u64) -> RouterVerdict {
        stage.handle_key(part, key, now)
    }
}
