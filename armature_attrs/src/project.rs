// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The projection from part context plus snapshot to attributes.

use armature_registry::{Orientation, PartRole};
use armature_state::Snapshot;

use crate::ids::IdPair;
use crate::set::{AttrName, AttrSet, AttrValue};

/// Which ARIA attribute marks an active item in this widget family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SelectionAria {
    /// `aria-selected` (tabs).
    #[default]
    Selected,
    /// `aria-checked` (radio groups, checkbox-like menu items).
    Checked,
    /// `aria-pressed` (toggle groups).
    Pressed,
    /// `aria-expanded` (accordion item triggers).
    Expanded,
}

/// The `data-state` vocabulary of a widget family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum StateWording {
    /// `"open"` / `"closed"` (disclosure widgets, accordions).
    #[default]
    OpenClosed,
    /// `"active"` / `"inactive"` (tabs).
    ActiveInactive,
    /// `"checked"` / `"unchecked"` (radio groups).
    CheckedUnchecked,
    /// `"on"` / `"off"` (toggles, toggle groups).
    OnOff,
}

impl StateWording {
    const fn render(self, on: bool) -> &'static str {
        match (self, on) {
            (Self::OpenClosed, true) => "open",
            (Self::OpenClosed, false) => "closed",
            (Self::ActiveInactive, true) => "active",
            (Self::ActiveInactive, false) => "inactive",
            (Self::CheckedUnchecked, true) => "checked",
            (Self::CheckedUnchecked, false) => "unchecked",
            (Self::OnOff, true) => "on",
            (Self::OnOff, false) => "off",
        }
    }
}

/// Item-specific projection inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemCx<'a> {
    /// The item's selection value.
    pub value: &'a str,
    /// Whether the item is individually disabled.
    pub disabled: bool,
    /// Whether this item is the roving tab stop
    /// (see `armature_nav::tab_stop`).
    pub tab_stop: bool,
}

/// Everything the projection needs to know about one part.
///
/// Deliberately a plain value: two equal contexts with the same snapshot
/// always project the same [`AttrSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartCx<'a> {
    /// Structural role of the part.
    pub role: PartRole,
    /// Whether the owning widget is disabled.
    pub widget_disabled: bool,
    /// Projected as `data-orientation` when present.
    pub orientation: Option<Orientation>,
    /// ARIA vocabulary for active items.
    pub selection_aria: SelectionAria,
    /// `data-state` vocabulary.
    pub wording: StateWording,
    /// Trigger/content id pair, when this part participates in pairing.
    pub ids: Option<IdPair>,
    /// Item inputs, for item parts (and for content regions owned by an
    /// item, e.g. one accordion panel).
    pub item: Option<ItemCx<'a>>,
    /// Whether the widget is modal while open (`aria-modal` on content).
    pub modal: bool,
    /// `aria-haspopup` token projected on triggers, when the widget opens
    /// a popup (`"menu"`, `"listbox"`, `"dialog"`).
    pub haspopup: Option<&'static str>,
}

impl<'a> PartCx<'a> {
    /// A minimal context for the given role; everything else defaulted.
    #[must_use]
    pub fn new(role: PartRole) -> Self {
        Self {
            role,
            widget_disabled: false,
            orientation: None,
            selection_aria: SelectionAria::default(),
            wording: StateWording::default(),
            ids: None,
            item: None,
            modal: false,
            haspopup: None,
        }
    }
}

/// Derives the attributes for one part from the canonical snapshot.
///
/// Pure and idempotent: no ambient inputs, no accumulation. Hosts call this
/// for every part of a widget after each notified change and write the
/// result onto the part's element verbatim.
#[must_use]
pub fn project(cx: &PartCx<'_>, snapshot: &Snapshot) -> AttrSet {
    let mut attrs = AttrSet::new();

    // The part's effective "on" state: an item part reflects its own
    // membership, every other part reflects the widget-level state.
    let on = match (&cx.item, snapshot) {
        (_, Snapshot::Open { open }) => *open,
        (Some(item), _) => is_selected(snapshot, item.value),
        (None, Snapshot::Single { active }) => active.is_some(),
        (None, Snapshot::Multi { active }) => !active.is_empty(),
    };

    attrs.set(AttrName::DataState, AttrValue::Static(cx.wording.render(on)));

    if cx.widget_disabled {
        attrs.set(AttrName::DataDisabled, AttrValue::Present);
    }
    if let Some(orientation) = cx.orientation {
        let rendered = if orientation.is_horizontal() {
            "horizontal"
        } else {
            "vertical"
        };
        attrs.set(AttrName::DataOrientation, AttrValue::Static(rendered));
    }

    match cx.role {
        PartRole::Trigger => {
            attrs.set(AttrName::AriaExpanded, AttrValue::Bool(on));
            if let Some(token) = cx.haspopup {
                attrs.set(AttrName::AriaHasPopup, AttrValue::Static(token));
            }
            if cx.widget_disabled {
                attrs.set(AttrName::AriaDisabled, AttrValue::Bool(true));
            }
            if let Some(ids) = cx.ids {
                attrs.set(AttrName::Id, AttrValue::Id(ids.trigger));
                attrs.set(AttrName::AriaControls, AttrValue::Id(ids.content));
            }
        }
        PartRole::Content => {
            if !on {
                attrs.set(AttrName::AriaHidden, AttrValue::Bool(true));
            }
            if cx.modal && on {
                attrs.set(AttrName::AriaModal, AttrValue::Bool(true));
            }
            if let Some(ids) = cx.ids {
                attrs.set(AttrName::Id, AttrValue::Id(ids.content));
                attrs.set(AttrName::AriaLabelledBy, AttrValue::Id(ids.trigger));
            }
        }
        PartRole::Item => {
            let item_disabled = cx.item.is_some_and(|item| item.disabled);
            let name = match cx.selection_aria {
                SelectionAria::Selected => AttrName::AriaSelected,
                SelectionAria::Checked => AttrName::AriaChecked,
                SelectionAria::Pressed => AttrName::AriaPressed,
                SelectionAria::Expanded => AttrName::AriaExpanded,
            };
            attrs.set(name, AttrValue::Bool(on));

            if let Some(item) = &cx.item {
                let stop = item.tab_stop && !item.disabled && !cx.widget_disabled;
                attrs.set(AttrName::TabIndex, AttrValue::Int(if stop { 0 } else { -1 }));
            }
            if item_disabled || cx.widget_disabled {
                attrs.set(AttrName::AriaDisabled, AttrValue::Bool(true));
            }
            if item_disabled {
                attrs.set(AttrName::DataDisabled, AttrValue::Present);
            }
            if let Some(ids) = cx.ids {
                attrs.set(AttrName::Id, AttrValue::Id(ids.trigger));
                attrs.set(AttrName::AriaControls, AttrValue::Id(ids.content));
            }
        }
        PartRole::Indicator => {
            // State mirror only; the attrs above already carry it.
        }
    }

    attrs
}

fn is_selected(snapshot: &Snapshot, value: &str) -> bool {
    match snapshot {
        Snapshot::Single { active } => active.as_deref() == Some(value),
        Snapshot::Multi { active } => active.iter().any(|v| v == value),
        Snapshot::Open { .. } => false,
    }
}
