// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Registry: widget and part ownership bookkeeping.
//!
//! A composite control (an accordion, a dialog, a menu) is modeled as a
//! **widget instance** plus a set of **parts** — triggers, content regions,
//! items, indicators — that play structural roles inside it. This crate owns
//! the relationship between the two: parts are attached to a widget, resolve
//! their owner lazily, and degrade to inert when that owner is gone.
//!
//! Both widgets and parts live in generational arenas. A [`WidgetId`] or
//! [`PartId`] is a small copyable handle `(index, generation)`; destroying a
//! slot bumps its generation, so stale handles are detected rather than
//! silently aliasing a reused slot. This replaces ancestor queries over a
//! retained document tree with explicit, queryable ownership records.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_registry::{PartDesc, PartRole, Registry, WidgetConfig, WidgetKind};
//!
//! let mut registry = Registry::new();
//!
//! let accordion = registry.create_widget(WidgetConfig {
//!     kind: WidgetKind::SingleSelect { collapsible: true },
//!     ..WidgetConfig::default()
//! });
//!
//! let item_a = registry
//!     .attach_part(accordion, PartDesc::item("a"))
//!     .unwrap();
//!
//! // The part resolves its owner lazily.
//! assert_eq!(registry.owner_of(item_a), Some(accordion));
//!
//! // Destroying the widget orphans the part: it resolves to nothing
//! // and is expected to behave as inert, not to fail.
//! registry.destroy_widget(accordion);
//! assert_eq!(registry.owner_of(item_a), None);
//! ```
//!
//! ## Ownership semantics
//!
//! - Parts hold a *non-owning* back-reference to their widget. Resolution
//!   via [`Registry::owner_of`] checks liveness on every call, so a part can
//!   outlive its widget without dangling.
//! - [`Registry::reattach_part`] moves a part under a different widget,
//!   mirroring re-parenting in a retained tree. Ownership is re-resolved
//!   from the registry on every query, never cached by the caller.
//! - Items (parts with a [`PartDesc::value`]) are looked up by value with
//!   [`Registry::item_by_value`]. Duplicate values are tolerated: the most
//!   recently attached item wins the lookup, earlier items stay attached.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod types;

pub use registry::{ItemRef, Registry};
pub use types::{
    AttachError, Orientation, PartDesc, PartId, PartRole, WidgetConfig, WidgetFlags, WidgetId,
    WidgetKind,
};
