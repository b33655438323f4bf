// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature State: canonical widget state and change notification.
//!
//! Every composite widget owns exactly one [`WidgetState`]: the single
//! source of truth for its open flag, active value(s), and roving focus
//! cursor. Parts never hold state of their own; anything they cache must be
//! rederived from this container on every notified change.
//!
//! Mutations go through guarded entry points that return [`Option<Change>`]:
//! `Some` exactly when the canonical state changed, `None` for guarded
//! no-ops (disabled widget, kind mismatch) and for idempotent writes. A
//! monotonically increasing revision bumps once per semantic change,
//! so `Some` and a revision bump always coincide.
//!
//! [`Notifier`] delivers a [`Change`] to subscribers synchronously. The
//! container applies the mutation fully *before* returning the change, so
//! the broadcast a caller performs afterwards always describes settled
//! state: a subscriber that queries the container during delivery observes
//! exactly what the payload claims.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_registry::{WidgetConfig, WidgetKind};
//! use armature_state::{ChangeDetail, Notifier, WidgetState};
//!
//! let config = WidgetConfig {
//!     kind: WidgetKind::SingleSelect { collapsible: false },
//!     ..WidgetConfig::default()
//! };
//! let mut state = WidgetState::new(&config);
//! let mut notifier = Notifier::new();
//!
//! notifier.subscribe(|change| {
//!     assert!(matches!(&change.detail, ChangeDetail::Single { value: Some(v) } if v == "b"));
//! });
//!
//! // Mutate first, then broadcast the returned change.
//! if let Some(change) = state.select_single("b") {
//!     notifier.broadcast(&change);
//! }
//! assert_eq!(state.active_value(), Some("b"));
//!
//! // Non-collapsible single-select: re-selecting is a no-op, no broadcast.
//! assert!(state.select_single("b").is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod notify;
mod state;

pub use notify::{Notifier, SubscriptionId};
pub use state::{Change, ChangeDetail, Snapshot, WidgetState};
