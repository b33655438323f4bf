// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature Widgets: headless, accessible widget families.
//!
//! Every stateful primitive here — accordion, dialog, tabs, tooltip, menu,
//! toggle group, and the rest — is an instantiation of one coordination
//! pattern: a root widget owns canonical state, parts resolve their root
//! through the registry, interactions route through guarded mutators, one
//! broadcast follows each successful mutation, and attributes are a pure
//! projection of the snapshot. The [`stage`] module assembles that pattern
//! once from the foundation crates; each family module parameterizes it.
//!
//! Nothing in this crate renders, positions, or styles anything. A host
//! embeds it by forwarding interactions (keys, pointer presses, hover, a
//! millisecond clock) into a [`stage::Stage`] and applying the resulting
//! attribute sets, focus directives, and change events to its own element
//! tree.
//!
//! ## Minimal example
//!
//! ```rust
//! use armature_widgets::stage::Stage;
//! use armature_widgets::tabs::{Activation, Tabs};
//! use armature_registry::Orientation;
//!
//! let mut stage = Stage::new();
//! let tabs = Tabs::create(&mut stage, Activation::Automatic, Orientation::Horizontal);
//! tabs.add_tab(&mut stage, "overview");
//! tabs.add_tab(&mut stage, "settings");
//!
//! tabs.select(&mut stage, "overview", 0);
//! assert_eq!(tabs.value(&stage).as_deref(), Some("overview"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accordion;
pub mod alert_dialog;
pub mod collapsible;
pub mod dialog;
pub mod events;
pub mod hover_card;
pub mod menu;
pub mod menubar;
pub mod navigation_menu;
pub mod popover;
pub mod radio_group;
pub mod router;
pub mod scroll_area;
pub mod select;
pub mod slider;
pub mod stage;
pub mod tabs;
pub mod toast;
pub mod toggle;
pub mod toggle_group;
pub mod tooltip;
