// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover card: tooltip timing, but focus counts as hover.

use armature_registry::{PartId, WidgetId};
use armature_timing::IntentDelays;

use crate::stage::Stage;
use crate::tooltip::Tooltip;

/// One hover card.
///
/// Shares the tooltip's intent state machine; the difference is that
/// keyboard focus on the trigger expresses the same open intent as pointer
/// hover, so keyboard users get the card too.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverCard {
    inner: Tooltip,
}

impl HoverCard {
    /// Creates a hover card with the default intent delays.
    pub fn create(stage: &mut Stage) -> Self {
        Self {
            inner: Tooltip::create(stage),
        }
    }

    /// Creates a hover card with explicit intent delays.
    pub fn create_with_delays(stage: &mut Stage, delays: IntentDelays) -> Self {
        Self {
            inner: Tooltip::create_with_delays(stage, delays),
        }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.inner.id()
    }

    /// The trigger part.
    #[must_use]
    pub fn trigger(self) -> PartId {
        self.inner.trigger()
    }

    /// The content part.
    #[must_use]
    pub fn content(self) -> PartId {
        self.inner.content()
    }

    /// Whether the card is visible.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        self.inner.is_open(stage)
    }

    /// The pointer entered the trigger.
    pub fn pointer_enter(self, stage: &mut Stage, now: u64) {
        self.inner.pointer_enter(stage, now);
    }

    /// The pointer left the trigger.
    pub fn pointer_leave(self, stage: &mut Stage, now: u64) {
        self.inner.pointer_leave(stage, now);
    }

    /// The trigger received keyboard focus.
    pub fn focus_enter(self, stage: &mut Stage, now: u64) {
        self.inner.pointer_enter(stage, now);
    }

    /// The trigger lost keyboard focus.
    pub fn focus_leave(self, stage: &mut Stage, now: u64) {
        self.inner.pointer_leave(stage, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_expresses_the_same_open_intent_as_hover() {
        let mut stage = Stage::new();
        let card = HoverCard::create(&mut stage);

        card.focus_enter(&mut stage, 0);
        stage.tick(700);
        assert!(card.is_open(&stage));

        card.focus_leave(&mut stage, 1_000);
        stage.tick(1_300);
        assert!(!card.is_open(&stage));
    }

    #[test]
    fn blur_before_the_delay_cancels_the_pending_open() {
        let mut stage = Stage::new();
        let card = HoverCard::create(&mut stage);

        card.focus_enter(&mut stage, 0);
        card.focus_leave(&mut stage, 50);
        stage.tick(u64::MAX);
        assert!(!card.is_open(&stage));
    }
}
