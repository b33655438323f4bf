// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The open/close intent state machine.

use crate::token::{Armed, TimerToken, TokenSource};

/// Delays before a hover/focus intent commits, in milliseconds.
///
/// A delay of zero commits the transition immediately, with no pending
/// phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntentDelays {
    /// Delay before a pending open commits.
    pub open_ms: u64,
    /// Delay before a pending close commits.
    pub close_ms: u64,
}

impl Default for IntentDelays {
    fn default() -> Self {
        Self {
            open_ms: 700,
            close_ms: 300,
        }
    }
}

/// Phase of an [`IntentState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntentPhase {
    /// Closed, nothing pending.
    Idle,
    /// Closed, an open intent is counting down.
    PendingOpen,
    /// Open, nothing pending.
    Open,
    /// Still open, a close intent is counting down.
    PendingClose,
}

/// A committed visibility transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntentTransition {
    /// The widget became open.
    Opened,
    /// The widget became closed.
    Closed,
}

/// Delayed open/close state machine for one widget.
///
/// The machine is host-clock driven: `request_open` / `request_close`
/// record intent at time `now`, and [`IntentState::tick`] commits whatever
/// deadline has elapsed. At most one deadline is armed at a time — a new
/// same-kind request re-arms it, and an opposite-kind request cancels it
/// outright (a close while an open is pending means the open never
/// happens, not that it is queued).
///
/// # Example
///
/// ```rust
/// use armature_timing::{IntentDelays, IntentState, IntentTransition};
///
/// let mut intent = IntentState::new(IntentDelays::default());
///
/// intent.request_open(0);
/// // The open commits once its 700 ms delay elapses.
/// assert_eq!(intent.tick(700), Some(IntentTransition::Opened));
///
/// intent.request_close(1_000);
/// assert!(intent.is_open()); // still open while the close is pending
/// assert_eq!(intent.tick(1_300), Some(IntentTransition::Closed));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct IntentState {
    phase: IntentPhase,
    armed: Option<Armed>,
    tokens: TokenSource,
    delays: IntentDelays,
}

impl Default for IntentState {
    fn default() -> Self {
        Self::new(IntentDelays::default())
    }
}

impl IntentState {
    /// Creates an idle machine with the given delays.
    #[must_use]
    pub fn new(delays: IntentDelays) -> Self {
        Self {
            phase: IntentPhase::Idle,
            armed: None,
            tokens: TokenSource::default(),
            delays,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> IntentPhase {
        self.phase
    }

    /// Whether the widget is currently visible.
    ///
    /// A widget with a pending close is still open; a widget with a pending
    /// open is still closed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, IntentPhase::Open | IntentPhase::PendingClose)
    }

    /// The armed deadline, for hosts that schedule their own wakeup.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<u64> {
        self.armed.map(|armed| armed.deadline)
    }

    /// The armed token, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.armed.map(|armed| armed.token)
    }

    /// Records an open intent at time `now`.
    ///
    /// Returns the committed transition when the open delay is zero and the
    /// widget opens immediately.
    pub fn request_open(&mut self, now: u64) -> Option<IntentTransition> {
        match self.phase {
            IntentPhase::Open => None,
            IntentPhase::PendingClose => {
                // Cancel the pending close; the widget simply stays open.
                self.armed = None;
                self.phase = IntentPhase::Open;
                None
            }
            IntentPhase::Idle | IntentPhase::PendingOpen => {
                if self.delays.open_ms == 0 {
                    self.armed = None;
                    self.phase = IntentPhase::Open;
                    return Some(IntentTransition::Opened);
                }
                // Re-arming replaces any previous open token.
                self.armed = Some(self.tokens.arm(now + self.delays.open_ms));
                self.phase = IntentPhase::PendingOpen;
                None
            }
        }
    }

    /// Records a close intent at time `now`.
    ///
    /// Returns the committed transition when the close delay is zero and
    /// the widget closes immediately.
    pub fn request_close(&mut self, now: u64) -> Option<IntentTransition> {
        match self.phase {
            IntentPhase::Idle => None,
            IntentPhase::PendingOpen => {
                // The open never commits.
                self.armed = None;
                self.phase = IntentPhase::Idle;
                None
            }
            IntentPhase::Open | IntentPhase::PendingClose => {
                if self.delays.close_ms == 0 {
                    self.armed = None;
                    self.phase = IntentPhase::Idle;
                    return Some(IntentTransition::Closed);
                }
                self.armed = Some(self.tokens.arm(now + self.delays.close_ms));
                self.phase = IntentPhase::PendingClose;
                None
            }
        }
    }

    /// Opens immediately, bypassing delays (programmatic open).
    ///
    /// Any pending intent is cancelled. Returns `None` when the widget was
    /// already open.
    pub fn open_now(&mut self) -> Option<IntentTransition> {
        self.armed = None;
        let was_open = self.is_open();
        self.phase = IntentPhase::Open;
        (!was_open).then_some(IntentTransition::Opened)
    }

    /// Closes immediately, bypassing delays (programmatic close).
    ///
    /// Any pending intent is cancelled. Returns `None` when the widget was
    /// already closed.
    pub fn close_now(&mut self) -> Option<IntentTransition> {
        self.armed = None;
        let was_open = self.is_open();
        self.phase = IntentPhase::Idle;
        was_open.then_some(IntentTransition::Closed)
    }

    /// Cancels any pending intent without changing visibility.
    pub fn cancel_pending(&mut self) {
        self.armed = None;
        self.phase = match self.phase {
            IntentPhase::PendingOpen => IntentPhase::Idle,
            IntentPhase::PendingClose => IntentPhase::Open,
            other => other,
        };
    }

    /// Commits the armed deadline if it has elapsed by `now`.
    pub fn tick(&mut self, now: u64) -> Option<IntentTransition> {
        let armed = self.armed?;
        if now < armed.deadline {
            return None;
        }
        self.armed = None;
        match self.phase {
            IntentPhase::PendingOpen => {
                self.phase = IntentPhase::Open;
                Some(IntentTransition::Opened)
            }
            IntentPhase::PendingClose => {
                self.phase = IntentPhase::Idle;
                Some(IntentTransition::Closed)
            }
            // An armed deadline only exists in pending phases.
            IntentPhase::Idle | IntentPhase::Open => None,
        }
    }
}
