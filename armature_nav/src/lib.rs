// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Nav: roving-tabindex navigation policies.
//!
//! List-like widgets (tabs, menus, radio groups, toggle groups, accordions)
//! share one keyboard-navigation model: a single roving cursor moves among
//! the **enabled** items of a collection, arrow keys step it along the
//! widget's primary axis, Home/End jump to the first/last enabled item, and
//! movement optionally wraps at the edges. This crate implements that model
//! as pure functions over slices, with no widget or input-device knowledge.
//!
//! - [`NavIntent`] is the device-independent movement request.
//! - [`intent_for_key`] maps a named key plus the widget's axis to an intent
//!   (the cross-axis arrows produce no intent).
//! - [`next_index`] / [`next_key`] compute the destination, skipping
//!   disabled items entirely and honoring [`WrapMode`].
//! - [`tab_stop`] picks which item carries `tabindex="0"` under the roving
//!   pattern: the active item if it is enabled, else the first enabled one.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_nav::{NavEntry, NavIntent, WrapMode, next_key};
//!
//! let items = [
//!     NavEntry { key: 'a', disabled: false },
//!     NavEntry { key: 'b', disabled: true },
//!     NavEntry { key: 'c', disabled: false },
//! ];
//!
//! // Next from 'a' skips disabled 'b'.
//! assert_eq!(next_key(&items, Some('a'), NavIntent::Next, WrapMode::Wrap), Some('c'));
//! // Next from 'c' wraps back to 'a'.
//! assert_eq!(next_key(&items, Some('c'), NavIntent::Next, WrapMode::Wrap), Some('a'));
//! // Without wrapping it stops at the edge.
//! assert_eq!(next_key(&items, Some('c'), NavIntent::Next, WrapMode::Stop), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

/// Device-independent movement request for a roving cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Move to the next enabled item.
    Next,
    /// Move to the previous enabled item.
    Prev,
    /// Jump to the first enabled item.
    First,
    /// Jump to the last enabled item.
    Last,
}

/// Named keys that participate in roving navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// The Up arrow.
    ArrowUp,
    /// The Down arrow.
    ArrowDown,
    /// The Left arrow.
    ArrowLeft,
    /// The Right arrow.
    ArrowRight,
    /// The Home key.
    Home,
    /// The End key.
    End,
}

/// Edge behavior of roving navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Moving past an edge yields no destination.
    Stop,
    /// Moving past an edge continues from the opposite one.
    Wrap,
}

/// One navigable item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavEntry<K> {
    /// Caller-chosen identifier.
    pub key: K,
    /// Disabled items are skipped entirely, not merely unfocusable.
    pub disabled: bool,
}

/// Maps a key to a movement intent given the widget's primary axis.
///
/// On a vertical widget Up/Down step the cursor; on a horizontal widget
/// Left/Right do. Cross-axis arrows yield `None` so the host can let them
/// fall through (for example to an enclosing menubar). Home/End always map.
#[must_use]
pub const fn intent_for_key(key: NavKey, horizontal: bool) -> Option<NavIntent> {
    match key {
        NavKey::ArrowUp => {
            if horizontal {
                None
            } else {
                Some(NavIntent::Prev)
            }
        }
        NavKey::ArrowDown => {
            if horizontal {
                None
            } else {
                Some(NavIntent::Next)
            }
        }
        NavKey::ArrowLeft => {
            if horizontal {
                Some(NavIntent::Prev)
            } else {
                None
            }
        }
        NavKey::ArrowRight => {
            if horizontal {
                Some(NavIntent::Next)
            } else {
                None
            }
        }
        NavKey::Home => Some(NavIntent::First),
        NavKey::End => Some(NavIntent::Last),
    }
}

/// Computes the destination index for a movement over `disabled` slots.
///
/// `disabled[i]` tells whether slot `i` is disabled; disabled slots are
/// never returned and never count as a step. With no origin (or an origin
/// that is out of range), `Next`/`First` land on the first enabled slot and
/// `Prev`/`Last` on the last enabled one.
///
/// Returns `None` when no slot is enabled, or when the move falls off an
/// edge under [`WrapMode::Stop`].
#[must_use]
pub fn next_index(
    disabled: &[bool],
    origin: Option<usize>,
    intent: NavIntent,
    wrap: WrapMode,
) -> Option<usize> {
    let first = disabled.iter().position(|&d| !d)?;
    let last = disabled.iter().rposition(|&d| !d)?;

    let origin = origin.filter(|&idx| idx < disabled.len());
    let Some(origin) = origin else {
        return Some(match intent {
            NavIntent::Next | NavIntent::First => first,
            NavIntent::Prev | NavIntent::Last => last,
        });
    };

    match intent {
        NavIntent::First => Some(first),
        NavIntent::Last => Some(last),
        NavIntent::Next => {
            let ahead = disabled
                .iter()
                .enumerate()
                .skip(origin + 1)
                .find_map(|(idx, &d)| (!d).then_some(idx));
            match (ahead, wrap) {
                (Some(idx), _) => Some(idx),
                (None, WrapMode::Wrap) => Some(first),
                (None, WrapMode::Stop) => None,
            }
        }
        NavIntent::Prev => {
            let behind = disabled[..origin].iter().rposition(|&d| !d);
            match (behind, wrap) {
                (Some(idx), _) => Some(idx),
                (None, WrapMode::Wrap) => Some(last),
                (None, WrapMode::Stop) => None,
            }
        }
    }
}

/// Computes the destination key for a movement over entries.
///
/// Key-based convenience over [`next_index`]: the origin is located by
/// equality, then the index move is translated back to the entry key. An
/// origin that is absent from `entries` behaves like no origin.
#[must_use]
pub fn next_key<K>(
    entries: &[NavEntry<K>],
    origin: Option<K>,
    intent: NavIntent,
    wrap: WrapMode,
) -> Option<K>
where
    K: Copy + Eq,
{
    let origin_idx =
        origin.and_then(|origin| entries.iter().position(|entry| entry.key == origin));
    // Small collections; a transient flag buffer keeps the core index-based.
    let disabled: alloc::vec::Vec<bool> = entries.iter().map(|entry| entry.disabled).collect();
    next_index(&disabled, origin_idx, intent, wrap).map(|idx| entries[idx].key)
}

/// Picks the roving tab stop: the active slot if enabled, else the first
/// enabled slot.
///
/// Exactly one item of a roving collection carries `tabindex="0"`; this
/// decides which. Returns `None` when every slot is disabled.
#[must_use]
pub fn tab_stop(disabled: &[bool], active: Option<usize>) -> Option<usize> {
    if let Some(idx) = active
        && disabled.get(idx) == Some(&false)
    {
        return Some(idx);
    }
    disabled.iter().position(|&d| !d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn entries(disabled: &[bool]) -> Vec<NavEntry<usize>> {
        disabled
            .iter()
            .enumerate()
            .map(|(key, &disabled)| NavEntry { key, disabled })
            .collect()
    }

    #[test]
    fn next_and_prev_with_wrap() {
        let d = [false, false, false];
        assert_eq!(next_index(&d, Some(0), NavIntent::Next, WrapMode::Wrap), Some(1));
        assert_eq!(next_index(&d, Some(2), NavIntent::Next, WrapMode::Wrap), Some(0));
        assert_eq!(next_index(&d, Some(0), NavIntent::Prev, WrapMode::Wrap), Some(2));
    }

    #[test]
    fn stop_mode_halts_at_edges() {
        let d = [false, false];
        assert_eq!(next_index(&d, Some(1), NavIntent::Next, WrapMode::Stop), None);
        assert_eq!(next_index(&d, Some(0), NavIntent::Prev, WrapMode::Stop), None);
    }

    #[test]
    fn disabled_items_are_skipped_entirely() {
        let d = [false, true, false, true];
        assert_eq!(next_index(&d, Some(0), NavIntent::Next, WrapMode::Wrap), Some(2));
        // Wrapping from the last enabled slot skips the trailing disabled one.
        assert_eq!(next_index(&d, Some(2), NavIntent::Next, WrapMode::Wrap), Some(0));
        assert_eq!(next_index(&d, Some(2), NavIntent::Prev, WrapMode::Wrap), Some(0));
    }

    #[test]
    fn home_and_end_jump_to_enabled_extremes() {
        let d = [true, false, false, true];
        assert_eq!(next_index(&d, Some(2), NavIntent::First, WrapMode::Stop), Some(1));
        assert_eq!(next_index(&d, Some(1), NavIntent::Last, WrapMode::Stop), Some(2));
    }

    #[test]
    fn no_enabled_items_yields_none() {
        let d = [true, true];
        assert_eq!(next_index(&d, Some(0), NavIntent::Next, WrapMode::Wrap), None);
        assert_eq!(tab_stop(&d, None), None);
    }

    #[test]
    fn missing_origin_lands_on_extremes() {
        let d = [true, false, false];
        assert_eq!(next_index(&d, None, NavIntent::Next, WrapMode::Wrap), Some(1));
        assert_eq!(next_index(&d, None, NavIntent::Prev, WrapMode::Wrap), Some(2));
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        // From item N, "next" repeated itemCount times returns to N,
        // skipping disabled items along the way.
        let d = [false, true, false, false];
        let enabled_count = d.iter().filter(|&&x| !x).count();
        let mut at = 0;
        for _ in 0..enabled_count {
            at = next_index(&d, Some(at), NavIntent::Next, WrapMode::Wrap).unwrap();
        }
        assert_eq!(at, 0);
    }

    #[test]
    fn key_based_navigation_resolves_by_equality() {
        let items = entries(&[false, true, false]);
        assert_eq!(next_key(&items, Some(0), NavIntent::Next, WrapMode::Wrap), Some(2));
        // Unknown origin behaves like no origin.
        assert_eq!(next_key(&items, Some(9), NavIntent::Next, WrapMode::Wrap), Some(0));
    }

    #[test]
    fn arrow_mapping_honors_axis() {
        assert_eq!(intent_for_key(NavKey::ArrowDown, false), Some(NavIntent::Next));
        assert_eq!(intent_for_key(NavKey::ArrowDown, true), None);
        assert_eq!(intent_for_key(NavKey::ArrowRight, true), Some(NavIntent::Next));
        assert_eq!(intent_for_key(NavKey::ArrowRight, false), None);
        assert_eq!(intent_for_key(NavKey::Home, true), Some(NavIntent::First));
        assert_eq!(intent_for_key(NavKey::End, false), Some(NavIntent::Last));
    }

    #[test]
    fn tab_stop_prefers_enabled_active() {
        let d = [false, false, true];
        assert_eq!(tab_stop(&d, Some(1)), Some(1));
        // A disabled active item falls back to the first enabled.
        assert_eq!(tab_stop(&d, Some(2)), Some(0));
        assert_eq!(tab_stop(&d, None), Some(0));
    }
}
