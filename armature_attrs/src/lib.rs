// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Attrs: deterministic attribute projection.
//!
//! Widget state lives in one canonical container; what the host element
//! tree shows — `aria-expanded`, `aria-checked`, `data-state`, the roving
//! `tabindex` — is a *projection* of that state, recomputed from scratch on
//! every change. This crate is that projection: a pure function from a
//! part's context plus the current snapshot to an [`AttrSet`], with no
//! ambient inputs, so re-running it with the same snapshot always produces
//! the same attributes.
//!
//! - [`project`] derives the attribute set for one part.
//! - [`AttrSet`] is an ordered name → value map with a stable rendering.
//! - [`IdAllocator`] hands out unique element ids, one [`IdPair`] per
//!   content instance, stable for the instance's lifetime, to bind triggers
//!   and content regions through `aria-controls` / `aria-labelledby`.
//! - [`parse`] maps declarative host attributes (selection type,
//!   orientation, durations, ratios) onto typed values with safe fallbacks
//!   for unparseable input.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_attrs::{AttrName, AttrValue, PartCx, project};
//! use armature_registry::PartRole;
//! use armature_state::Snapshot;
//!
//! let snapshot = Snapshot::Open { open: true };
//! let attrs = project(&PartCx::new(PartRole::Trigger), &snapshot);
//!
//! assert_eq!(attrs.get(AttrName::AriaExpanded), Some(&AttrValue::Bool(true)));
//! assert_eq!(attrs.get(AttrName::DataState), Some(&AttrValue::Static("open")));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ids;
pub mod parse;
mod project;
mod set;

pub use ids::{ElementId, IdAllocator, IdPair};
pub use project::{ItemCx, PartCx, SelectionAria, StateWording, project};
pub use set::{AttrName, AttrSet, AttrValue};
