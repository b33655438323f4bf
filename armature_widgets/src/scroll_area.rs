// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll area: scrollbar visibility with a hide delay.

use armature_attrs::{AttrName, AttrSet, AttrValue};
use armature_timing::{IntentDelays, IntentState, IntentTransition};

/// Scrollbar visibility for one scroll area.
///
/// Bars appear immediately on scrolling or when the pointer hovers them,
/// and fade only after activity has stopped for the hide delay. Every
/// scroll event pushes the deadline out, so the bars never blink while the
/// user is mid-scroll.
#[derive(Copy, Clone, Debug)]
pub struct ScrollArea {
    intent: IntentState,
}

impl Default for ScrollArea {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollArea {
    /// Default delay before idle bars hide, in milliseconds.
    pub const DEFAULT_HIDE_DELAY_MS: u64 = 600;

    /// Creates a scroll area with hidden bars and the default hide delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hide_delay(Self::DEFAULT_HIDE_DELAY_MS)
    }

    /// Creates a scroll area with an explicit hide delay.
    #[must_use]
    pub fn with_hide_delay(hide_delay_ms: u64) -> Self {
        Self {
            intent: IntentState::new(IntentDelays {
                open_ms: 0,
                close_ms: hide_delay_ms,
            }),
        }
    }

    /// Whether the bars are visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.intent.is_open()
    }

    /// A scroll event happened: show the bars and push the hide deadline.
    ///
    /// Returns `true` when the bars just became visible.
    pub fn scrolled(&mut self, now: u64) -> bool {
        let shown = self.intent.request_open(now) == Some(IntentTransition::Opened);
        // Re-arm the hide deadline from this event.
        self.intent.request_close(now);
        shown
    }

    /// The pointer entered a bar: keep the bars up with no deadline.
    pub fn pointer_enter(&mut self, now: u64) {
        self.intent.request_open(now);
    }

    /// The pointer left the bar: start the hide deadline.
    pub fn pointer_leave(&mut self, now: u64) {
        self.intent.request_close(now);
    }

    /// Advances host time. Returns `true` when the bars just hid.
    pub fn tick(&mut self, now: u64) -> bool {
        self.intent.tick(now) == Some(IntentTransition::Closed)
    }

    /// Projects the bar's attributes.
    #[must_use]
    pub fn attrs(&self) -> AttrSet {
        let mut attrs = AttrSet::new();
        let state = if self.visible() { "visible" } else { "hidden" };
        attrs.set(AttrName::DataState, AttrValue::Static(state));
        if !self.visible() {
            attrs.set(AttrName::AriaHidden, AttrValue::Bool(true));
        }
        attrs
    }
}
