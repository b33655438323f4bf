// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot auto-dismiss timer for toast-style widgets.

use crate::token::{Armed, TimerToken, TokenSource};

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// A cancellable one-shot close timer.
///
/// Armed when the widget opens; fires exactly once when its deadline
/// elapses; cancelled by an explicit close, after which it can never fire.
/// A duration of zero disables auto-dismissal entirely (the widget stays
/// until explicitly closed).
///
/// # Example
///
/// ```rust
/// use armature_timing::AutoDismiss;
///
/// let mut timer = AutoDismiss::new(5_000);
/// timer.arm(0);
///
/// assert!(!timer.tick(4_999));
/// assert!(timer.tick(5_000));
/// // One-shot: it does not fire again.
/// assert!(!timer.tick(10_000));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct AutoDismiss {
    duration_ms: u64,
    armed: Option<Armed>,
    tokens: TokenSource,
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION_MS)
    }
}

impl AutoDismiss {
    /// Creates a disarmed timer with the given lifetime.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            armed: None,
            tokens: TokenSource::default(),
        }
    }

    /// The configured lifetime.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Whether a deadline is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The armed deadline, for hosts that schedule their own wakeup.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.armed.map(|armed| armed.deadline)
    }

    /// Arms the timer at time `now`, replacing any earlier deadline.
    ///
    /// Returns the new token, or `None` when the duration is zero and
    /// auto-dismissal is disabled.
    pub fn arm(&mut self, now: u64) -> Option<TimerToken> {
        if self.duration_ms == 0 {
            self.armed = None;
            return None;
        }
        let armed = self.tokens.arm(now + self.duration_ms);
        self.armed = Some(armed);
        Some(armed.token)
    }

    /// Cancels the armed deadline. Returns `false` if nothing was armed.
    ///
    /// A cancelled deadline never fires.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// Fires the deadline if it has elapsed by `now`. One-shot: firing
    /// disarms the timer.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.armed {
            Some(armed) if now >= armed.deadline => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut timer = AutoDismiss::new(5_000);
        timer.arm(0);

        assert!(!timer.tick(2_000));
        assert!(timer.tick(5_000));
        assert!(!timer.tick(5_000));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_before_deadline_suppresses_the_fire() {
        let mut timer = AutoDismiss::new(5_000);
        timer.arm(0);

        // Explicit close at t=2000 cancels the pending deadline.
        assert!(timer.cancel());
        assert!(!timer.tick(5_000));
        assert!(!timer.tick(u64::MAX));
        // A second cancel reports nothing armed.
        assert!(!timer.cancel());
    }

    #[test]
    fn rearm_replaces_the_deadline() {
        let mut timer = AutoDismiss::new(5_000);
        let first = timer.arm(0).unwrap();
        let second = timer.arm(3_000).unwrap();
        assert_ne!(first, second);

        // The original deadline has passed, but only the re-armed one counts.
        assert!(!timer.tick(5_000));
        assert!(timer.tick(8_000));
    }

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        let mut timer = AutoDismiss::new(0);
        assert_eq!(timer.arm(0), None);
        assert!(!timer.is_armed());
        assert!(!timer.tick(u64::MAX));
    }
}
