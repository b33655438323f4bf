// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Timing: delayed open/close intents and auto-dismiss.
//!
//! Hover- and focus-triggered widgets (tooltips, hover cards, navigation
//! menus) deliberately wait before committing a visibility change, so that
//! a pointer merely passing through does not flicker the UI. Toasts go the
//! other way: they close themselves after a fixed lifetime unless dismissed
//! first. Both behaviors are small timer state machines, and both are
//! implemented here **without a clock**: every entry point takes `now` in
//! milliseconds from the host, and nothing fires until the host calls
//! `tick`. That keeps the machines deterministic and directly testable.
//!
//! - [`IntentState`]: `Idle → PendingOpen → Open → PendingClose → Idle`,
//!   with opposite-kind requests cancelling pending intents outright.
//! - [`AutoDismiss`]: a one-shot cancellable close timer.
//! - [`TimerToken`]: an opaque handle identifying one armed deadline; a
//!   cancelled token never fires.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_timing::{IntentDelays, IntentState, IntentTransition};
//!
//! let mut intent = IntentState::new(IntentDelays { open_ms: 700, close_ms: 300 });
//!
//! // Pointer enters at t=0: opening is pending, not committed.
//! assert_eq!(intent.request_open(0), None);
//! assert!(!intent.is_open());
//!
//! // Pointer leaves at t=100, before the delay elapsed: the pending open
//! // is cancelled outright. The widget never opens.
//! assert_eq!(intent.request_close(100), None);
//! assert_eq!(intent.tick(10_000), None);
//! assert!(!intent.is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod auto_dismiss;
mod intent;
mod token;

pub use auto_dismiss::{AutoDismiss, DEFAULT_TOAST_DURATION_MS};
pub use intent::{IntentDelays, IntentPhase, IntentState, IntentTransition};
pub use token::TimerToken;
