// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast: a transient notification that dismisses itself.

use armature_registry::{PartDesc, PartRole, WidgetConfig, WidgetId, WidgetKind};
use armature_timing::DEFAULT_TOAST_DURATION_MS;

use crate::stage::{FamilyProfile, Stage};

/// One toast.
///
/// Showing it arms a one-shot close timer; when the timer elapses the
/// toast closes exactly once. An explicit dismissal cancels the pending
/// timer, so no second close ever fires. A duration of zero disables the
/// timer and the toast stays until dismissed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    widget: WidgetId,
}

impl Toast {
    /// Creates a toast with the default 5000 ms lifetime.
    pub fn create(stage: &mut Stage) -> Self {
        Self::create_with_duration(stage, DEFAULT_TOAST_DURATION_MS)
    }

    /// Creates a toast with an explicit lifetime (zero disables
    /// auto-dismissal).
    pub fn create_with_duration(stage: &mut Stage, duration_ms: u64) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                auto_dismiss_ms: Some(duration_ms),
                ..FamilyProfile::default()
            },
        );
        stage
            .attach_part(widget, PartDesc::new(PartRole::Content))
            .expect("widget created above is live");
        Self { widget }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.widget
    }

    /// Whether the toast is showing.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Shows the toast and arms its lifetime timer.
    pub fn show(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, true, now)
    }

    /// Dismisses the toast, cancelling any pending timer.
    pub fn dismiss(self, stage: &mut Stage, now: u64) -> bool {
        stage.set_open(self.widget, false, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ChangeEvent;
    use crate::stage::StageEvent;

    fn close_events(stage: &mut Stage) -> usize {
        stage
            .drain_events()
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    StageEvent::Change {
                        event: ChangeEvent::OpenChange { open: false },
                        ..
                    }
                )
            })
            .count()
    }

    #[test]
    fn auto_dismisses_exactly_once() {
        let mut stage = Stage::new();
        let toast = Toast::create(&mut stage);

        toast.show(&mut stage, 0);
        stage.drain_events();

        stage.tick(4_999);
        assert!(toast.is_open(&stage));

        stage.tick(5_000);
        assert!(!toast.is_open(&stage));
        assert_eq!(close_events(&mut stage), 1);

        // The timer is spent; nothing fires again.
        stage.tick(u64::MAX);
        assert_eq!(close_events(&mut stage), 0);
    }

    #[test]
    fn explicit_dismissal_cancels_the_pending_timer() {
        let mut stage = Stage::new();
        let toast = Toast::create(&mut stage);

        toast.show(&mut stage, 0);
        stage.drain_events();

        // Dismissed at t=2000: one close, and the timer never double-fires.
        toast.dismiss(&mut stage, 2_000);
        assert_eq!(close_events(&mut stage), 1);

        stage.tick(5_000);
        assert!(!toast.is_open(&stage));
        assert_eq!(close_events(&mut stage), 0);
    }

    #[test]
    fn reshow_rearms_the_timer() {
        let mut stage = Stage::new();
        let toast = Toast::create(&mut stage);

        toast.show(&mut stage, 0);
        toast.dismiss(&mut stage, 1_000);
        toast.show(&mut stage, 2_000);

        stage.tick(5_000);
        assert!(toast.is_open(&stage)); // new deadline is 7000
        stage.tick(7_000);
        assert!(!toast.is_open(&stage));
    }

    #[test]
    fn zero_duration_means_no_auto_dismiss() {
        let mut stage = Stage::new();
        let toast = Toast::create_with_duration(&mut stage, 0);

        toast.show(&mut stage, 0);
        stage.tick(u64::MAX);
        assert!(toast.is_open(&stage));
    }
}
