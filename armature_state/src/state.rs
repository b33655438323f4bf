// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget state container and its mutation entry points.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use armature_nav::{NavIntent, WrapMode, next_index};
use armature_registry::{WidgetConfig, WidgetFlags, WidgetKind};

/// The canonical value state of a widget, shaped by its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snapshot {
    /// Boolean open/closed state ([`WidgetKind::Toggle`], [`WidgetKind::Modal`]).
    Open {
        /// Whether the widget is open.
        open: bool,
    },
    /// Single-selection state ([`WidgetKind::SingleSelect`]).
    Single {
        /// The active item value, if any.
        active: Option<String>,
    },
    /// Multi-selection state ([`WidgetKind::MultiSelect`]).
    ///
    /// First-occurrence order, no duplicates. Values of items that have
    /// since been detached are tolerated and not auto-pruned.
    Multi {
        /// The active item values.
        active: Vec<String>,
    },
}

impl Snapshot {
    /// The initial (closed/empty) snapshot for a widget kind.
    #[must_use]
    pub fn initial(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Toggle | WidgetKind::Modal => Self::Open { open: false },
            WidgetKind::SingleSelect { .. } => Self::Single { active: None },
            WidgetKind::MultiSelect => Self::Multi { active: Vec::new() },
        }
    }
}

/// A single state change, as delivered to subscribers.
///
/// The detail reflects the *post*-mutation snapshot; `revision` is the
/// container revision after the bump, so consecutive changes from one
/// widget carry strictly increasing revisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Container revision after this change.
    pub revision: u64,
    /// What changed.
    pub detail: ChangeDetail,
}

/// Payload of a [`Change`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeDetail {
    /// The open flag changed.
    Open {
        /// The new open flag.
        open: bool,
    },
    /// The single-select value changed.
    Single {
        /// The new active value (`None` after a collapsible toggle-off).
        value: Option<String>,
    },
    /// One value's membership in a multi-select set toggled.
    Multi {
        /// The toggled value.
        value: String,
        /// Whether the value is selected after the toggle.
        selected: bool,
    },
    /// The roving focus cursor moved.
    Focus {
        /// The new focused index.
        index: usize,
    },
    /// The widget's disabled flag changed.
    Disabled {
        /// The new disabled flag.
        disabled: bool,
    },
}

/// The single source of truth for one widget's interaction state.
///
/// All mutators are guarded: they return `Some(Change)` exactly when the
/// canonical state changed and `None` otherwise — in particular when the
/// widget is disabled, when the mutation does not apply to the widget's
/// kind, and when the write is idempotent. Callers broadcast the returned
/// change through a [`Notifier`](crate::Notifier); one successful mutation
/// maps to exactly one broadcast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState {
    kind: WidgetKind,
    flags: WidgetFlags,
    snapshot: Snapshot,
    focused: Option<usize>,
    revision: u64,
}

impl WidgetState {
    /// Creates the initial state for a widget configuration.
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            kind: config.kind,
            flags: config.flags,
            snapshot: Snapshot::initial(config.kind),
            focused: None,
            revision: 0,
        }
    }

    /// The widget kind this state is shaped by.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Current behavior flags.
    #[must_use]
    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    /// Whether the widget is disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.flags.contains(WidgetFlags::DISABLED)
    }

    /// The canonical snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Current revision. Bumps exactly once per semantic change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a boolean widget is open. `false` for selection kinds.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.snapshot, Snapshot::Open { open: true })
    }

    /// The active single-select value.
    #[must_use]
    pub fn active_value(&self) -> Option<&str> {
        match &self.snapshot {
            Snapshot::Single { active } => active.as_deref(),
            _ => None,
        }
    }

    /// The active multi-select values, in first-selection order.
    #[must_use]
    pub fn active_values(&self) -> &[String] {
        match &self.snapshot {
            Snapshot::Multi { active } => active,
            _ => &[],
        }
    }

    /// Whether `value` is active, for either selection kind.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        match &self.snapshot {
            Snapshot::Single { active } => active.as_deref() == Some(value),
            Snapshot::Multi { active } => active.iter().any(|v| v == value),
            Snapshot::Open { .. } => false,
        }
    }

    /// The roving focus cursor.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Sets the open flag of a boolean widget.
    pub fn set_open(&mut self, open: bool) -> Option<Change> {
        if self.disabled() {
            return None;
        }
        match &mut self.snapshot {
            Snapshot::Open { open: current } if *current != open => {
                *current = open;
                Some(self.changed(ChangeDetail::Open { open }))
            }
            _ => None,
        }
    }

    /// Toggles the open flag of a boolean widget.
    pub fn toggle_open(&mut self) -> Option<Change> {
        match self.snapshot {
            Snapshot::Open { open } => self.set_open(!open),
            _ => None,
        }
    }

    /// Selects `value` on a single-select widget.
    ///
    /// Re-selecting the active value clears it when the widget is
    /// collapsible and is a no-op otherwise.
    pub fn select_single(&mut self, value: &str) -> Option<Change> {
        if self.disabled() {
            return None;
        }
        let WidgetKind::SingleSelect { collapsible } = self.kind else {
            return None;
        };
        let Snapshot::Single { active } = &mut self.snapshot else {
            return None;
        };

        if active.as_deref() == Some(value) {
            if !collapsible {
                return None;
            }
            *active = None;
            return Some(self.changed(ChangeDetail::Single { value: None }));
        }

        *active = Some(value.to_string());
        Some(self.changed(ChangeDetail::Single {
            value: Some(value.to_string()),
        }))
    }

    /// Clears the active value of a single-select widget.
    ///
    /// Unconditional (independent of the collapsible flag); used by widgets
    /// whose selection empties when the pointer or focus leaves them.
    pub fn clear_single(&mut self) -> Option<Change> {
        if self.disabled() {
            return None;
        }
        let Snapshot::Single { active } = &mut self.snapshot else {
            return None;
        };
        if active.is_none() {
            return None;
        }
        *active = None;
        Some(self.changed(ChangeDetail::Single { value: None }))
    }

    /// Toggles `value`'s membership on a multi-select widget.
    ///
    /// The toggle is its own inverse: applying it twice restores the
    /// original membership.
    pub fn select_multiple(&mut self, value: &str) -> Option<Change> {
        if self.disabled() {
            return None;
        }
        let Snapshot::Multi { active } = &mut self.snapshot else {
            return None;
        };

        let selected = if let Some(idx) = active.iter().position(|v| v == value) {
            active.remove(idx);
            false
        } else {
            active.push(value.to_string());
            true
        };
        Some(self.changed(ChangeDetail::Multi {
            value: value.to_string(),
            selected,
        }))
    }

    /// Places the roving cursor at `index`, clamped to `[0, item_count)`.
    ///
    /// A no-op on an empty collection.
    pub fn set_focused(&mut self, index: usize, item_count: usize) -> Option<Change> {
        if self.disabled() || item_count == 0 {
            return None;
        }
        let clamped = index.min(item_count - 1);
        if self.focused == Some(clamped) {
            return None;
        }
        self.focused = Some(clamped);
        Some(self.changed(ChangeDetail::Focus { index: clamped }))
    }

    /// Moves the roving cursor by a navigation intent over the given
    /// disabled map, wrapping iff the widget carries [`WidgetFlags::LOOP`].
    ///
    /// Disabled items are skipped entirely; landing on the current index is
    /// a no-op.
    pub fn move_focused(&mut self, disabled: &[bool], intent: NavIntent) -> Option<Change> {
        if self.disabled() {
            return None;
        }
        let wrap = if self.flags.contains(WidgetFlags::LOOP) {
            WrapMode::Wrap
        } else {
            WrapMode::Stop
        };
        let dest = next_index(disabled, self.focused, intent, wrap)?;
        if self.focused == Some(dest) {
            return None;
        }
        self.focused = Some(dest);
        Some(self.changed(ChangeDetail::Focus { index: dest }))
    }

    /// Clears the roving cursor, as when focus leaves the collection.
    ///
    /// Deliberately not guarded on `disabled`: a widget disabled while
    /// focused must still be able to drop its cursor.
    pub fn clear_focused(&mut self) {
        self.focused = None;
    }

    /// Sets the disabled flag.
    ///
    /// This is a configuration change, not a snapshot change, but it is
    /// broadcast like one so parts re-derive `data-disabled`.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<Change> {
        if self.disabled() == disabled {
            return None;
        }
        self.flags.set(WidgetFlags::DISABLED, disabled);
        Some(self.changed(ChangeDetail::Disabled { disabled }))
    }

    fn changed(&mut self, detail: ChangeDetail) -> Change {
        self.revision = self.revision.wrapping_add(1);
        Change {
            revision: self.revision,
            detail,
        }
    }
}
