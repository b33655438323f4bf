// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change events surfaced to the embedding host.
//!
//! Hosts re-emit these as bubbling, cancelable custom events on the widget
//! root (`open-change`, `value-change`, and friends). The payload always
//! reflects the post-mutation snapshot.

use alloc::string::String;
use alloc::vec::Vec;

/// The `value` payload of a [`ChangeEvent::ValueChange`].
#[derive(Clone, Debug, PartialEq)]
pub enum EventValue {
    /// No active value (a cleared single selection).
    None,
    /// A single active value.
    Text(String),
    /// The active values of a multiple selection, in first-selection order.
    List(Vec<String>),
    /// A numeric value (slider).
    Number(f64),
}

/// A state change to re-emit on the host side.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeEvent {
    /// The open flag changed (`open-change`).
    OpenChange {
        /// The new open flag.
        open: bool,
    },
    /// The active value changed (`value-change`).
    ValueChange {
        /// The new value.
        value: EventValue,
    },
    /// One value's checked state toggled (`checked-change`).
    CheckedChange {
        /// The toggled value.
        value: String,
        /// Whether it is checked afterwards.
        checked: bool,
    },
    /// A pressed toggle flipped (`pressed-change`).
    PressedChange {
        /// The new pressed flag.
        pressed: bool,
    },
}

impl ChangeEvent {
    /// The custom event name the host emits.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenChange { .. } => "open-change",
            Self::ValueChange { .. } => "value-change",
            Self::CheckedChange { .. } => "checked-change",
            Self::PressedChange { .. } => "pressed-change",
        }
    }
}
