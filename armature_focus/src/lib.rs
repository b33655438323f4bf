// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Focus: where focus goes when overlays open and close.
//!
//! Opening a dialog moves keyboard focus into it; closing it must hand
//! focus back to wherever the user was. This crate keeps that bookkeeping:
//!
//! - [`FocusMemory`] records, per opened widget, the element that held
//!   focus beforehand, and returns it on close — but only after a liveness
//!   probe, because the element may have vanished while the overlay was up.
//!   Restoration for a vanished target is a silent no-op, never an error.
//! - [`initial_target`] picks where focus should land inside newly opened
//!   content: the first candidate carrying an explicit autofocus marker,
//!   falling back to the content container itself.
//!
//! The memory is a stack, so nested overlays (a menu opened from a dialog)
//! unwind in LIFO order: closing the menu restores focus into the dialog,
//! closing the dialog restores the page.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_focus::FocusMemory;
//!
//! let mut memory: FocusMemory<u32, u32> = FocusMemory::new();
//!
//! // Dialog 1 opens while element 42 is focused.
//! memory.on_open(1, Some(42));
//!
//! // On close, 42 is still alive, so focus returns to it.
//! assert_eq!(memory.on_close(1, |_| true), Some(42));
//!
//! // Had it vanished, restoration would be a no-op.
//! memory.on_open(1, Some(42));
//! assert_eq!(memory.on_close(1, |_| false), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A focusable candidate inside opened content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusCandidate<K> {
    /// The candidate element key.
    pub key: K,
    /// Whether the candidate carries an explicit autofocus marker.
    pub autofocus: bool,
}

/// Picks the element focus should land on when content opens.
///
/// The first marked candidate wins; with no marked candidate, focus lands
/// on `container` (the content region itself), which is the behavior hosts
/// get "for free" without annotating anything.
#[must_use]
pub fn initial_target<K: Copy>(candidates: &[FocusCandidate<K>], container: K) -> K {
    candidates
        .iter()
        .find(|candidate| candidate.autofocus)
        .map_or(container, |candidate| candidate.key)
}

/// Per-widget focus-return bookkeeping, LIFO across nested overlays.
///
/// `W` identifies the opening widget, `K` the host's focusable elements.
/// Entries are recorded by [`FocusMemory::on_open`] and consumed by
/// [`FocusMemory::on_close`]; closing a widget that never recorded an
/// entry (or whose entry was already consumed) is a no-op.
#[derive(Clone, Debug)]
pub struct FocusMemory<W, K> {
    stack: Vec<(W, Option<K>)>,
}

impl<W, K> Default for FocusMemory<W, K> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<W: Copy + Eq, K: Copy> FocusMemory<W, K> {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Records the pre-open focus target for `widget`.
    ///
    /// `return_target` is whatever held focus at open time; `None` when
    /// nothing did. Re-opening a widget that still has an entry replaces
    /// the entry rather than stacking a duplicate.
    pub fn on_open(&mut self, widget: W, return_target: Option<K>) {
        self.forget(widget);
        self.stack.push((widget, return_target));
    }

    /// Consumes the entry for `widget` and returns the restore target.
    ///
    /// The `is_live` probe is consulted before anything is returned: a
    /// target that no longer exists (or is no longer focusable) yields
    /// `None`, and the caller simply leaves focus where it is.
    pub fn on_close(&mut self, widget: W, is_live: impl Fn(&K) -> bool) -> Option<K> {
        let idx = self.stack.iter().rposition(|(open, _)| *open == widget)?;
        let (_, target) = self.stack.remove(idx);
        target.filter(|target| is_live(target))
    }

    /// Drops the entry for `widget` without restoring, as on teardown.
    pub fn forget(&mut self, widget: W) {
        self.stack.retain(|(open, _)| *open != widget);
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no entries are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_the_recorded_target() {
        let mut memory: FocusMemory<u8, u32> = FocusMemory::new();
        memory.on_open(1, Some(42));
        assert_eq!(memory.on_close(1, |_| true), Some(42));
        assert!(memory.is_empty());
    }

    #[test]
    fn vanished_target_is_a_silent_noop() {
        let mut memory: FocusMemory<u8, u32> = FocusMemory::new();
        memory.on_open(1, Some(42));
        assert_eq!(memory.on_close(1, |_| false), None);
        // The entry is consumed either way.
        assert_eq!(memory.on_close(1, |_| true), None);
    }

    #[test]
    fn nested_overlays_unwind_in_lifo_order() {
        let mut memory: FocusMemory<u8, u32> = FocusMemory::new();
        memory.on_open(1, Some(10)); // dialog, opened from the page
        memory.on_open(2, Some(20)); // menu, opened from inside the dialog

        assert_eq!(memory.on_close(2, |_| true), Some(20));
        assert_eq!(memory.on_close(1, |_| true), Some(10));
    }

    #[test]
    fn reopen_replaces_the_entry() {
        let mut memory: FocusMemory<u8, u32> = FocusMemory::new();
        memory.on_open(1, Some(10));
        memory.on_open(1, Some(11));

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.on_close(1, |_| true), Some(11));
    }

    #[test]
    fn nothing_focused_at_open_restores_nothing() {
        let mut memory: FocusMemory<u8, u32> = FocusMemory::new();
        memory.on_open(1, None);
        assert_eq!(memory.on_close(1, |_| true), None);
    }

    #[test]
    fn initial_target_prefers_the_autofocus_marker() {
        let candidates = [
            FocusCandidate {
                key: 1_u32,
                autofocus: false,
            },
            FocusCandidate {
                key: 2,
                autofocus: true,
            },
            FocusCandidate {
                key: 3,
                autofocus: true,
            },
        ];
        assert_eq!(initial_target(&candidates, 9), 2);
    }

    #[test]
    fn initial_target_falls_back_to_the_container() {
        let candidates = [FocusCandidate {
            key: 1_u32,
            autofocus: false,
        }];
        assert_eq!(initial_target(&candidates, 9), 9);
        assert_eq!(initial_target::<u32>(&[], 9), 9);
    }
}
