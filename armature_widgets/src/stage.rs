// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stage: one assembly of every coordination kernel.
//!
//! A [`Stage`] hosts many widget instances and wires the foundation crates
//! together once: registry for structure, state containers for truth,
//! notifiers for broadcast, the attribute projection for output, and the
//! dismissal, focus, and timing controllers for side effects. Widget
//! family modules parameterize it with a [`FamilyProfile`] instead of
//! re-implementing the wiring.
//!
//! Control flow for any interaction is always the same: the router entry
//! points ([`Stage::handle_key`], [`Stage::pointer_press`]) validate the
//! part and its widget, call one state-container mutator, and — exactly
//! when the mutation succeeded — broadcast the change, run the side-effect
//! controllers, and queue host-facing [`StageEvent`]s. Parts re-derive
//! their attributes with [`Stage::attrs_for`] after draining events.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;

use armature_attrs::{AttrSet, IdAllocator, IdPair, ItemCx, PartCx, SelectionAria, StateWording,
    project};
use armature_dismiss::{Coordinator, DismissPolicy, Region};
use armature_focus::{FocusCandidate, FocusMemory, initial_target};
use armature_nav::{NavIntent, intent_for_key, tab_stop};
use armature_registry::{
    AttachError, PartDesc, PartId, PartRole, Registry, WidgetConfig, WidgetId, WidgetKind,
};
use armature_state::{Change, ChangeDetail, Notifier, SubscriptionId, WidgetState};
use armature_timing::{AutoDismiss, IntentDelays, IntentState, IntentTransition};
use hashbrown::HashMap;

use crate::events::{ChangeEvent, EventValue};
use crate::router::{Key, RouterVerdict};

/// How a boolean open change is surfaced to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum OpenEventKind {
    /// `open-change` (disclosure and overlay widgets).
    #[default]
    Open,
    /// `pressed-change` (standalone toggles).
    Pressed,
}

/// How a multi-select membership toggle is surfaced to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MultiEventKind {
    /// `value-change` carrying the whole active list.
    #[default]
    ValueList,
    /// `checked-change` for the toggled value (checkbox-like items).
    Checked,
}

/// Everything family-specific about a widget, in one value.
///
/// Family modules construct the profile; the stage consults it for
/// attribute vocabulary, dismissal policy, focus behavior, timing, and
/// event mapping. Two widgets of the same family differ only in their
/// [`WidgetConfig`], never in their profile shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyProfile {
    /// ARIA vocabulary for active items.
    pub selection_aria: SelectionAria,
    /// `data-state` vocabulary.
    pub wording: StateWording,
    /// Which interactions dismiss the widget while open.
    pub dismissal: DismissPolicy,
    /// Whether content is modal while open.
    pub modal: bool,
    /// Whether opening captures focus and closing restores it.
    pub focus_capture: bool,
    /// Hover/focus intent delays, for widgets that open on intent.
    pub delays: Option<IntentDelays>,
    /// Auto-dismiss lifetime, for toast-style widgets. Zero disables.
    pub auto_dismiss_ms: Option<u64>,
    /// `aria-haspopup` token projected on the trigger (`"menu"`,
    /// `"listbox"`, `"dialog"`), for popup-opening families.
    pub haspopup: Option<&'static str>,
    /// Host event mapping for open changes.
    pub open_event: OpenEventKind,
    /// Host event mapping for multi-select toggles.
    pub multi_event: MultiEventKind,
}

impl Default for FamilyProfile {
    fn default() -> Self {
        Self {
            selection_aria: SelectionAria::Selected,
            wording: StateWording::OpenClosed,
            dismissal: DismissPolicy::empty(),
            modal: false,
            focus_capture: false,
            delays: None,
            auto_dismiss_ms: None,
            haspopup: None,
            open_event: OpenEventKind::Open,
            multi_event: MultiEventKind::ValueList,
        }
    }
}

/// A mutation postponed to the end of the current dispatch.
///
/// The notifier delivers synchronously and must not be re-entered from a
/// delivery; anything a reaction wants to mutate is queued here and run by
/// [`Stage::flush_deferred`] once the current dispatch has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeferredOp {
    /// Set a widget's open flag.
    SetOpen {
        /// Target widget.
        widget: WidgetId,
        /// The flag to set.
        open: bool,
    },
    /// Select a value on a single-select widget.
    SelectSingle {
        /// Target widget.
        widget: WidgetId,
        /// The value to select.
        value: String,
    },
    /// Clear a single-select widget's value.
    ClearSingle {
        /// Target widget.
        widget: WidgetId,
    },
}

/// Something the host must act on after an interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    /// Re-emit a change event on the widget root.
    Change {
        /// The widget whose state changed.
        widget: WidgetId,
        /// The event to emit.
        event: ChangeEvent,
    },
    /// Move keyboard focus to a part (roving move, initial focus on open,
    /// or focus restoration on close).
    Focus {
        /// The widget requesting the move.
        widget: WidgetId,
        /// The part to focus.
        target: PartId,
    },
}

/// One assembly of registry, state, notification, attributes, and the
/// dismissal/focus/timing controllers, hosting many widget instances.
///
/// # Example
///
/// ```rust
/// use armature_registry::{PartDesc, PartRole, WidgetConfig};
/// use armature_widgets::stage::{FamilyProfile, Stage};
///
/// let mut stage = Stage::new();
/// let widget = stage.create_widget(WidgetConfig::default(), FamilyProfile::default());
/// let trigger = stage
///     .attach_part(widget, PartDesc::new(PartRole::Trigger))
///     .unwrap();
///
/// assert!(stage.toggle_open(widget, 0));
/// assert!(stage.state(widget).unwrap().is_open());
///
/// let attrs = stage.attrs_for(trigger).unwrap();
/// assert!(!attrs.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Stage {
    registry: Registry,
    states: HashMap<WidgetId, WidgetState>,
    notifiers: HashMap<WidgetId, Notifier>,
    profiles: HashMap<WidgetId, FamilyProfile>,
    intents: HashMap<WidgetId, IntentState>,
    autos: HashMap<WidgetId, AutoDismiss>,
    pairs: HashMap<PartId, IdPair>,
    ids: IdAllocator,
    dismiss: Coordinator<WidgetId, PartId>,
    focus: FocusMemory<WidgetId, PartId>,
    host_focus: Option<PartId>,
    events: Vec<StageEvent>,
    deferred: Vec<DeferredOp>,
}

impl Stage {
    /// Creates an empty stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a widget with its family profile.
    pub fn create_widget(&mut self, config: WidgetConfig, profile: FamilyProfile) -> WidgetId {
        let widget = self.registry.create_widget(config.clone());
        self.states.insert(widget, WidgetState::new(&config));
        self.notifiers.insert(widget, Notifier::new());
        if let Some(delays) = profile.delays {
            self.intents.insert(widget, IntentState::new(delays));
        }
        if let Some(duration) = profile.auto_dismiss_ms {
            self.autos.insert(widget, AutoDismiss::new(duration));
        }
        self.profiles.insert(widget, profile);
        widget
    }

    /// Tears a widget down: state, notifier, timers, dismissal, focus.
    ///
    /// Its parts are orphaned (inert) until detached, and any armed timer
    /// is cancelled so nothing fires for the dead widget.
    pub fn destroy_widget(&mut self, widget: WidgetId) {
        self.registry.destroy_widget(widget);
        self.states.remove(&widget);
        self.notifiers.remove(&widget);
        self.profiles.remove(&widget);
        self.intents.remove(&widget);
        self.autos.remove(&widget);
        self.dismiss.retire(widget);
        self.focus.forget(widget);
    }

    /// Attaches a part to a widget.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError`] if the widget is not live.
    pub fn attach_part(
        &mut self,
        widget: WidgetId,
        desc: PartDesc,
    ) -> Result<PartId, AttachError> {
        self.registry.attach_part(widget, desc)
    }

    /// Detaches a part and drops its id pairing.
    pub fn detach_part(&mut self, part: PartId) {
        self.registry.detach_part(part);
        self.pairs.remove(&part);
    }

    /// Binds a trigger and a content part through a fresh id pair.
    ///
    /// The pair is allocated once and stays stable while both parts live;
    /// projection emits `id` / `aria-controls` / `aria-labelledby` from it.
    pub fn bind_pair(&mut self, trigger: PartId, content: PartId) -> IdPair {
        let pair = self.ids.pair();
        self.pairs.insert(trigger, pair);
        self.pairs.insert(content, pair);
        pair
    }

    /// The structure registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A widget's state container.
    #[must_use]
    pub fn state(&self, widget: WidgetId) -> Option<&WidgetState> {
        self.states.get(&widget)
    }

    /// A widget's family profile.
    #[must_use]
    pub fn profile(&self, widget: WidgetId) -> Option<&FamilyProfile> {
        self.profiles.get(&widget)
    }

    /// Subscribes to a widget's change broadcast.
    pub fn subscribe(
        &mut self,
        widget: WidgetId,
        subscriber: impl FnMut(&Change) + 'static,
    ) -> Option<SubscriptionId> {
        Some(self.notifiers.get_mut(&widget)?.subscribe(subscriber))
    }

    /// Removes a subscription.
    pub fn unsubscribe(&mut self, widget: WidgetId, id: SubscriptionId) -> bool {
        self.notifiers
            .get_mut(&widget)
            .is_some_and(|notifier| notifier.unsubscribe(id))
    }

    /// Records where host keyboard focus currently is.
    ///
    /// The host reports focus movement here so that opening an overlay can
    /// capture the correct return target.
    pub fn note_focus(&mut self, part: Option<PartId>) {
        self.host_focus = part;
    }

    /// Takes the queued host-facing events, oldest first.
    pub fn drain_events(&mut self) -> Vec<StageEvent> {
        mem::take(&mut self.events)
    }

    /// Queues a family-specific host event (e.g. a menu item activation).
    pub fn emit_change(&mut self, widget: WidgetId, event: ChangeEvent) {
        self.events.push(StageEvent::Change { widget, event });
    }

    /// Queues a focus directive for the host.
    pub fn emit_focus(&mut self, widget: WidgetId, target: PartId) {
        self.events.push(StageEvent::Focus { widget, target });
    }

    /// Queues a mutation for [`Stage::flush_deferred`].
    pub fn defer(&mut self, op: DeferredOp) {
        self.deferred.push(op);
    }

    /// Runs all deferred mutations, in queue order.
    ///
    /// Ops deferred while flushing run in the same flush.
    pub fn flush_deferred(&mut self, now: u64) {
        while !self.deferred.is_empty() {
            let ops = mem::take(&mut self.deferred);
            for op in ops {
                match op {
                    DeferredOp::SetOpen { widget, open } => {
                        self.set_open(widget, open, now);
                    }
                    DeferredOp::SelectSingle { widget, value } => {
                        self.select_single(widget, &value, now);
                    }
                    DeferredOp::ClearSingle { widget } => {
                        self.clear_single(widget, now);
                    }
                }
            }
        }
    }

    /// Sets a widget's open flag, bypassing intent delays.
    ///
    /// Returns `true` if the state changed. The intent machine (when the
    /// widget has one) is kept in step, so a later hover intent starts
    /// from the right phase; when the machine itself drove the change its
    /// phase already matches and the sync is a no-op.
    pub fn set_open(&mut self, widget: WidgetId, open: bool, now: u64) -> bool {
        if self.states.get(&widget).is_none_or(WidgetState::disabled) {
            return false;
        }
        if let Some(intent) = self.intents.get_mut(&widget) {
            if open {
                intent.open_now();
            } else {
                intent.close_now();
            }
        }
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.set_open(open) else {
            return false;
        };
        self.after_change(widget, change, now);
        true
    }

    /// Toggles a widget's open flag programmatically.
    pub fn toggle_open(&mut self, widget: WidgetId, now: u64) -> bool {
        let Some(state) = self.states.get(&widget) else {
            return false;
        };
        let open = !state.is_open();
        self.set_open(widget, open, now)
    }

    /// Selects a value on a single-select widget.
    pub fn select_single(&mut self, widget: WidgetId, value: &str, now: u64) -> bool {
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.select_single(value) else {
            return false;
        };
        self.after_change(widget, change, now);
        true
    }

    /// Clears a single-select widget's value.
    pub fn clear_single(&mut self, widget: WidgetId, now: u64) -> bool {
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.clear_single() else {
            return false;
        };
        self.after_change(widget, change, now);
        true
    }

    /// Toggles a value's membership on a multi-select widget.
    pub fn select_multiple(&mut self, widget: WidgetId, value: &str, now: u64) -> bool {
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.select_multiple(value) else {
            return false;
        };
        self.after_change(widget, change, now);
        true
    }

    /// Places the roving cursor on an item index.
    pub fn set_focused(&mut self, widget: WidgetId, index: usize, now: u64) -> bool {
        let count = self.registry.items_of(widget).count();
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.set_focused(index, count) else {
            return false;
        };
        self.emit_focus_for_index(widget, &change);
        self.after_change(widget, change, now);
        true
    }

    /// Moves the roving cursor by a navigation intent.
    pub fn move_focused(&mut self, widget: WidgetId, intent: NavIntent, now: u64) -> bool {
        let disabled: Vec<bool> = self.registry.items_of(widget).map(|i| i.disabled).collect();
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.move_focused(&disabled, intent) else {
            return false;
        };
        self.emit_focus_for_index(widget, &change);
        self.after_change(widget, change, now);
        true
    }

    /// Sets a widget's disabled flag.
    pub fn set_disabled(&mut self, widget: WidgetId, disabled: bool) -> bool {
        let Some(state) = self.states.get_mut(&widget) else {
            return false;
        };
        let Some(change) = state.set_disabled(disabled) else {
            return false;
        };
        // Disabled never arms timers, so the clock is irrelevant here.
        self.after_change(widget, change, 0);
        true
    }

    /// The value of the item under the roving cursor.
    #[must_use]
    pub fn focused_value(&self, widget: WidgetId) -> Option<String> {
        let index = self.states.get(&widget)?.focused()?;
        self.registry
            .items_of(widget)
            .nth(index)
            .map(|item| item.value.to_string())
    }

    /// Records a hover/focus open intent (tooltips, hover cards).
    pub fn pointer_enter(&mut self, widget: WidgetId, now: u64) {
        if self.states.get(&widget).is_none_or(WidgetState::disabled) {
            return;
        }
        let transition = self
            .intents
            .get_mut(&widget)
            .and_then(|intent| intent.request_open(now));
        self.apply_transition(widget, transition, now);
    }

    /// Records a hover/focus close intent.
    pub fn pointer_leave(&mut self, widget: WidgetId, now: u64) {
        let transition = self
            .intents
            .get_mut(&widget)
            .and_then(|intent| intent.request_close(now));
        self.apply_transition(widget, transition, now);
    }

    /// Advances host time: commits elapsed intent deadlines and fires due
    /// auto-dismiss timers.
    pub fn tick(&mut self, now: u64) {
        let intent_widgets: Vec<WidgetId> = self.intents.keys().copied().collect();
        for widget in intent_widgets {
            let transition = self
                .intents
                .get_mut(&widget)
                .and_then(|intent| intent.tick(now));
            self.apply_transition(widget, transition, now);
        }

        let auto_widgets: Vec<WidgetId> = self.autos.keys().copied().collect();
        for widget in auto_widgets {
            if self
                .autos
                .get_mut(&widget)
                .is_some_and(|auto| auto.tick(now))
            {
                self.set_open(widget, false, now);
            }
        }
    }

    /// Routes a key press on a part.
    pub fn handle_key(&mut self, part: PartId, key: Key, now: u64) -> RouterVerdict {
        let Some(widget) = self.registry.owner_of(part) else {
            return RouterVerdict::Ignored;
        };
        if self.states.get(&widget).is_none_or(WidgetState::disabled) {
            return RouterVerdict::Ignored;
        }

        if key == Key::Escape {
            return self.escape(widget, now);
        }
        if key.is_activation() {
            return self.activate(part, widget, now);
        }
        if let Some(nav_key) = key.nav() {
            let horizontal = self
                .registry
                .orientation(widget)
                .is_some_and(|orientation| orientation.is_horizontal());
            let Some(intent) = intent_for_key(nav_key, horizontal) else {
                return RouterVerdict::Ignored;
            };
            return if self.move_focused(widget, intent, now) {
                RouterVerdict::Handled
            } else {
                RouterVerdict::Ignored
            };
        }
        RouterVerdict::Ignored
    }

    /// Routes a pointer press.
    ///
    /// `path` is the pressed part and its ancestors. Open widgets whose
    /// regions do not contain the press are dismissed first; then the
    /// pressed part itself is activated like Enter would.
    pub fn pointer_press(
        &mut self,
        path: &[PartId],
        point: Option<kurbo::Point>,
        now: u64,
    ) -> RouterVerdict {
        let mut handled = false;

        for request in self.dismiss.pointer_press(path, point) {
            if self.set_open(request.widget, false, now) {
                handled = true;
            }
        }

        if let Some(&target) = path.first()
            && let Some(widget) = self.registry.owner_of(target)
            && self.states.get(&widget).is_some_and(|s| !s.disabled())
            && self.activate(target, widget, now) == RouterVerdict::Handled
        {
            handled = true;
        }

        if handled {
            RouterVerdict::Handled
        } else {
            RouterVerdict::Ignored
        }
    }

    /// Routes a document-level Escape (no specific part focused).
    ///
    /// The topmost registered overlay decides; an alert dialog on top
    /// swallows the key.
    pub fn escape_global(&mut self, now: u64) -> RouterVerdict {
        let Some(request) = self.dismiss.escape() else {
            return RouterVerdict::Ignored;
        };
        if self.set_open(request.widget, false, now) {
            RouterVerdict::Handled
        } else {
            RouterVerdict::Ignored
        }
    }

    /// Projects the attributes for a part from current state.
    ///
    /// Returns `None` for orphaned parts: an unresolvable part is inert
    /// and the host clears whatever attributes it carried.
    #[must_use]
    pub fn attrs_for(&self, part: PartId) -> Option<AttrSet> {
        let widget = self.registry.owner_of(part)?;
        let state = self.states.get(&widget)?;
        let profile = self.profiles.get(&widget)?;
        let role = self.registry.role_of(part)?;
        let config = self.registry.config(widget)?;

        let mut cx = PartCx::new(role);
        cx.widget_disabled = state.disabled();
        cx.selection_aria = profile.selection_aria;
        cx.wording = profile.wording;
        cx.modal = profile.modal;
        cx.haspopup = profile.haspopup;
        cx.ids = self.pairs.get(&part).copied();
        if matches!(
            config.kind,
            WidgetKind::SingleSelect { .. } | WidgetKind::MultiSelect
        ) {
            cx.orientation = Some(config.orientation);
        }

        let value = self.registry.value_of(part);
        if let Some(value) = value {
            let items: Vec<_> = self.registry.items_of(widget).collect();
            let disabled: Vec<bool> = items.iter().map(|item| item.disabled).collect();
            let position = items.iter().position(|item| item.part == part);
            // The roving cursor anchors the tab stop; before any keyboard
            // interaction the active item (or first enabled) carries it.
            let anchor = state
                .focused()
                .or_else(|| items.iter().position(|item| state.is_selected(item.value)));
            let stop = tab_stop(&disabled, anchor);
            cx.item = Some(ItemCx {
                value,
                disabled: self.registry.part_disabled(part),
                tab_stop: position.is_some() && stop == position,
            });
        }

        Some(project(&cx, state.snapshot()))
    }

    fn escape(&mut self, widget: WidgetId, now: u64) -> RouterVerdict {
        let Some(profile) = self.profiles.get(&widget) else {
            return RouterVerdict::Ignored;
        };
        let open = self.states.get(&widget).is_some_and(WidgetState::is_open);
        if open && profile.dismissal.contains(DismissPolicy::ESCAPE) {
            self.set_open(widget, false, now);
            return RouterVerdict::Handled;
        }
        RouterVerdict::Ignored
    }

    fn activate(&mut self, part: PartId, widget: WidgetId, now: u64) -> RouterVerdict {
        match self.registry.role_of(part) {
            Some(PartRole::Trigger) => {
                if self.toggle_open(widget, now) {
                    RouterVerdict::Handled
                } else {
                    RouterVerdict::Ignored
                }
            }
            Some(PartRole::Item) => {
                if self.registry.part_disabled(part) {
                    return RouterVerdict::Ignored;
                }
                let Some(value) = self.registry.value_of(part).map(ToString::to_string) else {
                    return RouterVerdict::Ignored;
                };
                let kind = self.registry.kind(widget);
                let mutated = match kind {
                    Some(WidgetKind::SingleSelect { .. }) => {
                        self.select_single(widget, &value, now)
                    }
                    Some(WidgetKind::MultiSelect) => self.select_multiple(widget, &value, now),
                    _ => false,
                };
                // Activation also moves the roving cursor to the item.
                if let Some(index) = self
                    .registry
                    .items_of(widget)
                    .position(|item| item.part == part)
                {
                    self.set_focused(widget, index, now);
                }
                if mutated {
                    RouterVerdict::Handled
                } else {
                    RouterVerdict::Ignored
                }
            }
            _ => RouterVerdict::Ignored,
        }
    }

    fn apply_transition(
        &mut self,
        widget: WidgetId,
        transition: Option<IntentTransition>,
        now: u64,
    ) {
        match transition {
            Some(IntentTransition::Opened) => {
                self.set_open(widget, true, now);
            }
            Some(IntentTransition::Closed) => {
                self.set_open(widget, false, now);
            }
            None => {}
        }
    }

    /// The shared post-mutation path: broadcast, side effects, host event.
    fn after_change(&mut self, widget: WidgetId, change: Change, now: u64) {
        // Broadcast first: subscribers observe settled state before any
        // side effect runs.
        if let Some(notifier) = self.notifiers.get_mut(&widget) {
            notifier.broadcast(&change);
        }

        if let ChangeDetail::Open { open } = change.detail {
            self.open_side_effects(widget, open, now);
        }

        if let Some(event) = self.host_event(widget, &change) {
            self.events.push(StageEvent::Change { widget, event });
        }
    }

    fn open_side_effects(&mut self, widget: WidgetId, open: bool, now: u64) {
        let Some(profile) = self.profiles.get(&widget).cloned() else {
            return;
        };
        if open {
            // Every part of the widget is inside its region: a press on an
            // item or indicator is not an outside press.
            let mut region = Region::new();
            for part in self.registry.parts_of(widget) {
                region.add_part(part);
            }
            self.dismiss.register(widget, region, profile.dismissal);

            if let Some(auto) = self.autos.get_mut(&widget) {
                auto.arm(now);
            }

            if profile.focus_capture {
                self.focus.on_open(widget, self.host_focus);
                let container = self
                    .registry
                    .parts_of(widget)
                    .find(|&part| self.registry.role_of(part) == Some(PartRole::Content));
                if let Some(container) = container {
                    let candidates: Vec<FocusCandidate<PartId>> = self
                        .registry
                        .parts_of(widget)
                        .map(|part| FocusCandidate {
                            key: part,
                            autofocus: self.registry.part_autofocus(part),
                        })
                        .collect();
                    let target = initial_target(&candidates, container);
                    self.events.push(StageEvent::Focus { widget, target });
                }
            }
        } else {
            self.dismiss.retire(widget);
            if let Some(auto) = self.autos.get_mut(&widget) {
                auto.cancel();
            }
            if profile.focus_capture
                && let Some(target) = self
                    .focus
                    .on_close(widget, |part| self.registry.part_is_live(*part))
            {
                self.events.push(StageEvent::Focus { widget, target });
            }
        }
    }

    fn host_event(&self, widget: WidgetId, change: &Change) -> Option<ChangeEvent> {
        let profile = self.profiles.get(&widget)?;
        match &change.detail {
            ChangeDetail::Open { open } => Some(match profile.open_event {
                OpenEventKind::Open => ChangeEvent::OpenChange { open: *open },
                OpenEventKind::Pressed => ChangeEvent::PressedChange { pressed: *open },
            }),
            ChangeDetail::Single { value } => Some(ChangeEvent::ValueChange {
                value: value
                    .clone()
                    .map_or(EventValue::None, EventValue::Text),
            }),
            ChangeDetail::Multi { value, selected } => Some(match profile.multi_event {
                MultiEventKind::Checked => ChangeEvent::CheckedChange {
                    value: value.clone(),
                    checked: *selected,
                },
                MultiEventKind::ValueList => ChangeEvent::ValueChange {
                    value: EventValue::List(
                        self.states
                            .get(&widget)
                            .map(|state| state.active_values().to_vec())
                            .unwrap_or_default(),
                    ),
                },
            }),
            ChangeDetail::Focus { .. } | ChangeDetail::Disabled { .. } => None,
        }
    }

    fn emit_focus_for_index(&mut self, widget: WidgetId, change: &Change) {
        if let ChangeDetail::Focus { index } = change.detail
            && let Some(item) = self.registry.items_of(widget).nth(index)
        {
            let target = item.part;
            self.events.push(StageEvent::Focus { widget, target });
        }
    }
}
