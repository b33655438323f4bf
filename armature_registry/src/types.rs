// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the registry: identifiers, widget configuration, and part roles.

use alloc::string::String;
use core::fmt;

/// Identifier for a widget instance (generational).
///
/// A `WidgetId` is `(index, generation)` into the registry's widget arena.
/// Slots are reused after destruction with a bumped generation, so a stale
/// id never resolves to a newer occupant; see [`Registry::widget_is_live`].
///
/// [`Registry::widget_is_live`]: crate::Registry::widget_is_live
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a part (generational).
///
/// Same semantics as [`WidgetId`], over the part arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PartId(pub(crate) u32, pub(crate) u32);

impl PartId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The state shape a widget instance carries.
///
/// The kind decides which mutations are meaningful for the widget: boolean
/// kinds respond to open/close, selection kinds to value selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A boolean open/closed widget (collapsible, popover, tooltip, toast).
    Toggle,
    /// A boolean open/closed widget with modal interaction semantics
    /// (dialog, alert dialog).
    Modal,
    /// At most one item value active at a time (tabs, radio group, accordion
    /// in single mode).
    ///
    /// With `collapsible` set, re-selecting the active value clears it;
    /// otherwise re-selection is a no-op and the value can only be replaced.
    SingleSelect {
        /// Whether re-selecting the active value toggles it off.
        collapsible: bool,
    },
    /// A set of item values active simultaneously (accordion in multiple
    /// mode, multi toggle group).
    MultiSelect,
}

/// Primary navigation axis of a list-like widget.
///
/// Orientation selects which arrow-key pair drives roving navigation and is
/// projected as `data-orientation` / `aria-orientation` on relevant parts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Up/Down is the primary axis.
    #[default]
    Vertical,
    /// Left/Right is the primary axis.
    Horizontal,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Horizontal`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

bitflags::bitflags! {
    /// Behavior flags for a widget instance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// The widget ignores all state mutation (guarded no-ops).
        const DISABLED = 0b0000_0001;
        /// Roving navigation wraps from the last enabled item to the first
        /// and vice versa.
        const LOOP = 0b0000_0010;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::LOOP
    }
}

/// Configuration for a widget instance at creation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// The state shape of the widget.
    pub kind: WidgetKind,
    /// Primary navigation axis for list-like widgets.
    pub orientation: Orientation,
    /// Behavior flags.
    pub flags: WidgetFlags,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            kind: WidgetKind::Toggle,
            orientation: Orientation::Vertical,
            flags: WidgetFlags::default(),
        }
    }
}

/// Structural role a part plays within its widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartRole {
    /// Opens, closes, or activates the widget.
    Trigger,
    /// The region revealed or hidden by the widget state.
    Content,
    /// A selectable member of a list-like widget.
    Item,
    /// A presentational mirror of some state (e.g. a check mark).
    Indicator,
}

/// Description of a part at attach time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartDesc {
    /// Structural role.
    pub role: PartRole,
    /// Selection value, for items. Unique per widget by convention; on
    /// duplicates the most recently attached item wins value lookups.
    pub value: Option<String>,
    /// Whether this individual part is disabled. Disabled items are skipped
    /// by roving navigation and refuse activation.
    pub disabled: bool,
    /// Whether this part is the preferred initial focus target when its
    /// widget's content opens.
    pub autofocus: bool,
}

impl PartDesc {
    /// A part with the given role, no value, enabled.
    #[must_use]
    pub const fn new(role: PartRole) -> Self {
        Self {
            role,
            value: None,
            disabled: false,
            autofocus: false,
        }
    }

    /// An enabled item part carrying `value`.
    #[must_use]
    pub fn item(value: impl Into<String>) -> Self {
        Self {
            role: PartRole::Item,
            value: Some(value.into()),
            disabled: false,
            autofocus: false,
        }
    }

    /// Marks the part disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the part as the preferred initial focus target.
    #[must_use]
    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }
}

/// Error returned when attaching a part to a widget that is not live.
///
/// Attachment is the one relationship operation where silently degrading
/// would hide a host bug (the part would be born an orphan), so it reports
/// the failure instead.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct AttachError {
    /// The widget the part was attached to.
    pub owner: WidgetId,
}

impl fmt::Debug for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttachError {{ owner: {:?} }}", self.owner)
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot attach part: widget {:?} is not live", self.owner)
    }
}

impl core::error::Error for AttachError {}
