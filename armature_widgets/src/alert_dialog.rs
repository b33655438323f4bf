// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alert dialog: a modal that only explicit action parts may close.

use armature_dismiss::DismissPolicy;
use armature_registry::{PartId, WidgetId};

use crate::dialog::Dialog;
use crate::stage::Stage;

/// One alert dialog.
///
/// Identical to [`Dialog`] except for its dismissal policy: neither
/// outside presses nor Escape close it. The choice it presents is
/// irrevocable, so only its explicit action and cancel parts may resolve
/// it ([`AlertDialog::confirm`] / [`AlertDialog::cancel`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlertDialog {
    inner: Dialog,
}

impl AlertDialog {
    /// Creates an alert dialog.
    pub fn create(stage: &mut Stage) -> Self {
        Self {
            inner: Dialog::create_with_policy(stage, DismissPolicy::empty()),
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

    /// Whether the alert is open.
    #[must_use]
    pub fn is_open(self, stage: &Stage) -> bool {
        self.inner.is_open(stage)
    }

    /// Opens the alert.
    pub fn open(self, stage: &mut Stage, now: u64) -> bool {
        self.inner.open(stage, now)
    }

    /// Resolves the alert through its action part.
    pub fn confirm(self, stage: &mut Stage, now: u64) -> bool {
        self.inner.close(stage, now)
    }

    /// Resolves the alert through its cancel part.
    pub fn cancel(self, stage: &mut Stage, now: u64) -> bool {
        self.inner.close(stage, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{Key, RouterVerdict};

    #[test]
    fn neither_escape_nor_outside_press_closes_it() {
        let mut stage = Stage::new();
        let alert = AlertDialog::create(&mut stage);
        let elsewhere = Dialog::create(&mut stage);
        alert.open(&mut stage, 0);

        let verdict = stage.handle_key(alert.content(), Key::Escape, 1);
        assert_eq!(verdict, RouterVerdict::Ignored);
        assert!(alert.is_open(&stage));

        stage.pointer_press(&[elsewhere.content()], None, 2);
        assert!(alert.is_open(&stage));
    }

    #[test]
    fn explicit_action_closes_it() {
        let mut stage = Stage::new();
        let alert = AlertDialog::create(&mut stage);
        alert.open(&mut stage, 0);

        assert!(alert.confirm(&mut stage, 1));
        assert!(!alert.is_open(&stage));
    }

    #[test]
    fn an_alert_on_top_swallows_global_escape() {
        let mut stage = Stage::new();
        let dialog = Dialog::create(&mut stage);
        let alert = AlertDialog::create(&mut stage);

        dialog.open(&mut stage, 0);
        alert.open(&mut stage, 1);

        // The alert is topmost and refuses Escape; the dialog underneath
        // must not close in its stead.
        assert_eq!(stage.escape_global(2), RouterVerdict::Ignored);
        assert!(alert.is_open(&stage));
        assert!(dialog.is_open(&stage));
    }
}
