// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Dismiss: one coordinator for every open overlay.
//!
//! Overlay widgets close when the user interacts outside their content
//! region or presses Escape. Installing a document-level listener per open
//! widget leaks easily and scales badly; instead, this crate keeps **one**
//! process-wide [`Coordinator`] with which widgets register while open and
//! from which they retire on close. The host installs its global pointer
//! and key hooks once and forwards interactions here.
//!
//! A registration is a content [`Region`] — the part keys making up the
//! widget's content, plus optional bounds for hosts that test by geometry —
//! and a [`DismissPolicy`]:
//!
//! - [`DismissPolicy::OVERLAY`] (outside press + Escape) for dialogs,
//!   popovers, menus.
//! - [`DismissPolicy::ESCAPE`] alone for tooltips.
//! - [`DismissPolicy::empty()`] for alert dialogs: nothing dismisses them
//!   except their explicit action/cancel parts, so a stray press can never
//!   discard an irrevocable choice.
//!
//! Registrations form a stack in open order. A press *inside* a layer's
//! region keeps that layer and everything beneath it (its ancestors in the
//! layering order) open; layers above it are asked to close. Escape asks
//! only the topmost layer, and is swallowed when that layer does not opt
//! into Escape dismissal.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_dismiss::{Coordinator, DismissPolicy, DismissReason, Region};
//!
//! let mut coordinator: Coordinator<u32, u32> = Coordinator::new();
//! coordinator.register(1, Region::of_parts([10, 11]), DismissPolicy::OVERLAY);
//!
//! // Press on a part inside the region: nothing closes.
//! assert!(coordinator.pointer_press(&[10], None).is_empty());
//!
//! // Press elsewhere: the widget is asked to close.
//! let requests = coordinator.pointer_press(&[99], None);
//! assert_eq!(requests.len(), 1);
//! assert_eq!(requests[0].widget, 1);
//! assert_eq!(requests[0].reason, DismissReason::OutsidePress);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Which interactions may dismiss a registered widget.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DismissPolicy: u8 {
        /// A pointer press outside the content region closes the widget.
        const OUTSIDE_PRESS = 0b0000_0001;
        /// Escape closes the widget when it is the topmost layer.
        const ESCAPE = 0b0000_0010;
    }
}

impl DismissPolicy {
    /// Outside press and Escape: the standard overlay policy.
    pub const OVERLAY: Self = Self::OUTSIDE_PRESS.union(Self::ESCAPE);
}

/// The content region of an open widget.
///
/// Containment is tested structurally first (is the pressed part, or any of
/// its ancestors on the hit path, one of the region's parts?) and
/// geometrically second (does the press point fall in one of the region's
/// rects?). Either test passing means "inside".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region<K> {
    parts: SmallVec<[K; 4]>,
    rects: SmallVec<[Rect; 1]>,
}

impl<K: Copy + Eq> Region<K> {
    /// An empty region (contains nothing).
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: SmallVec::new(),
            rects: SmallVec::new(),
        }
    }

    /// A region made of the given part keys.
    #[must_use]
    pub fn of_parts(parts: impl IntoIterator<Item = K>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            rects: SmallVec::new(),
        }
    }

    /// Adds a part key to the region.
    pub fn add_part(&mut self, part: K) {
        if !self.parts.contains(&part) {
            self.parts.push(part);
        }
    }

    /// Adds geometric bounds to the region.
    pub fn add_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Structural containment: any key on the hit path is one of ours.
    #[must_use]
    pub fn contains_path(&self, path: &[K]) -> bool {
        path.iter().any(|key| self.parts.contains(key))
    }

    /// Geometric containment.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    fn contains(&self, path: &[K], point: Option<Point>) -> bool {
        self.contains_path(path) || point.is_some_and(|point| self.contains_point(point))
    }
}

/// Why a widget is being asked to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// A pointer press landed outside the widget's content region.
    OutsidePress,
    /// Escape was pressed while the widget was the topmost layer.
    Escape,
}

/// A request for the host to close one widget.
///
/// The coordinator never mutates widget state itself; it reports which
/// widgets should close and the host routes that into their state
/// containers (restoring focus and retiring the registration as part of
/// the close).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CloseRequest<W> {
    /// The widget to close.
    pub widget: W,
    /// Why.
    pub reason: DismissReason,
}

/// The process-wide dismissal coordinator.
///
/// Widgets register on open and retire on close; the layer stack is the
/// open order. See the crate docs for the containment and layering rules.
#[derive(Clone, Debug)]
pub struct Coordinator<W, K> {
    layers: Vec<Layer<W, K>>,
}

impl<W, K> Default for Coordinator<W, K> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

#[derive(Clone, Debug)]
struct Layer<W, K> {
    widget: W,
    region: Region<K>,
    policy: DismissPolicy,
}

impl<W: Copy + Eq, K: Copy + Eq> Coordinator<W, K> {
    /// Creates a coordinator with no registered layers.
    #[must_use]
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Registers a widget as open, placing it on top of the layer stack.
    ///
    /// Re-registering an already-registered widget replaces its region and
    /// policy and moves it to the top.
    pub fn register(&mut self, widget: W, region: Region<K>, policy: DismissPolicy) {
        self.retire(widget);
        self.layers.push(Layer {
            widget,
            region,
            policy,
        });
    }

    /// Removes a widget's registration, as on close or teardown.
    ///
    /// Returns `false` if the widget was not registered. Retiring is
    /// idempotent, so close paths can call it unconditionally.
    pub fn retire(&mut self, widget: W) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.widget != widget);
        self.layers.len() != before
    }

    /// Whether a widget is currently registered.
    #[must_use]
    pub fn is_registered(&self, widget: W) -> bool {
        self.layers.iter().any(|layer| layer.widget == widget)
    }

    /// The topmost registered widget.
    #[must_use]
    pub fn top(&self) -> Option<W> {
        self.layers.last().map(|layer| layer.widget)
    }

    /// Number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Routes a pointer press.
    ///
    /// `path` is the hit path of the press (the pressed part key and its
    /// ancestors, in any order); `point` optionally carries the press
    /// position for regions with geometric bounds.
    ///
    /// Walks the layer stack top-down: every layer above the first one that
    /// contains the press, and that opted into outside-press dismissal, is
    /// asked to close, topmost first. The containing layer and everything
    /// beneath it stay open.
    #[must_use]
    pub fn pointer_press(&self, path: &[K], point: Option<Point>) -> Vec<CloseRequest<W>> {
        let mut requests = Vec::new();
        for layer in self.layers.iter().rev() {
            if layer.region.contains(path, point) {
                break;
            }
            if layer.policy.contains(DismissPolicy::OUTSIDE_PRESS) {
                requests.push(CloseRequest {
                    widget: layer.widget,
                    reason: DismissReason::OutsidePress,
                });
            }
        }
        requests
    }

    /// Routes an Escape press.
    ///
    /// Only the topmost layer is consulted; a topmost layer that did not
    /// opt into Escape dismissal (an alert dialog) swallows the key.
    #[must_use]
    pub fn escape(&self) -> Option<CloseRequest<W>> {
        let top = self.layers.last()?;
        top.policy
            .contains(DismissPolicy::ESCAPE)
            .then_some(CloseRequest {
                widget: top.widget,
                reason: DismissReason::Escape,
            })
    }
}
